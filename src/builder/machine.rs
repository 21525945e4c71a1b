//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::calculator::Calculator;
use crate::config::CalculatorConfig;
use crate::eval::{ArithmeticEvaluator, Evaluate};
use crate::format::{LocaleFormat, NumberFormat};
use std::sync::Arc;

/// Builder for constructing calculators with a fluent API.
///
/// Every part is optional: the default configuration, [`LocaleFormat`] and
/// [`ArithmeticEvaluator`] fill whatever is not set.
#[derive(Default)]
pub struct CalculatorBuilder {
    config: Option<CalculatorConfig>,
    format: Option<Arc<dyn NumberFormat>>,
    evaluator: Option<Arc<dyn Evaluate>>,
}

impl CalculatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the number formatter. Its symbols override the config's.
    pub fn format(mut self, format: impl NumberFormat + 'static) -> Self {
        self.format = Some(Arc::new(format));
        self
    }

    /// Replace the expression evaluator.
    pub fn evaluator(mut self, evaluator: impl Evaluate + 'static) -> Self {
        self.evaluator = Some(Arc::new(evaluator));
        self
    }

    /// Build the calculator.
    /// Returns an error if the configuration or formatter symbols are invalid.
    pub fn build(self) -> Result<Calculator, BuildError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let format: Arc<dyn NumberFormat> = match self.format {
            Some(format) => {
                format
                    .symbols()
                    .validate()
                    .map_err(BuildError::InvalidFormatter)?;
                format
            }
            None => Arc::new(LocaleFormat::new(
                config.symbols.clone(),
                config.max_fraction_digits,
            )),
        };
        let evaluator: Arc<dyn Evaluate> = match self.evaluator {
            Some(evaluator) => evaluator,
            None => Arc::new(ArithmeticEvaluator),
        };

        Ok(Calculator::with_parts(config.digit_limit, format, evaluator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, LocaleSymbols};
    use crate::eval::EvalError;
    use crate::expression::Operator;

    struct Constant(f64);

    impl Evaluate for Constant {
        fn evaluate(&self, _: &str) -> Result<f64, EvalError> {
            Ok(self.0)
        }
    }

    #[test]
    fn builder_defaults_match_new() {
        let mut calc = CalculatorBuilder::new().build().unwrap();
        calc.add_digit(4);
        calc.set_operator(Operator::Multiply);
        calc.add_digit(2);
        assert_eq!(calc.display_value(), 8.0);
    }

    #[test]
    fn builder_validates_config() {
        let result = CalculatorBuilder::new()
            .config(CalculatorConfig {
                digit_limit: 0,
                ..CalculatorConfig::default()
            })
            .build();

        assert!(matches!(
            result,
            Err(BuildError::InvalidConfig(ConfigError::ValidationError(_)))
        ));
    }

    #[test]
    fn builder_validates_formatter_symbols() {
        let symbols = LocaleSymbols {
            grouping_separator: '.',
            ..LocaleSymbols::default()
        };
        let result = CalculatorBuilder::new()
            .format(LocaleFormat::new(symbols, 10))
            .build();

        assert!(matches!(result, Err(BuildError::InvalidFormatter(_))));
    }

    #[test]
    fn config_symbols_reach_the_display() {
        let config = CalculatorConfig::from_json(
            r#"{ "symbols": { "decimal_separator": ",", "grouping_separator": "." } }"#,
        )
        .unwrap();
        let mut calc = Calculator::builder().config(config).build().unwrap();
        for d in [1, 2, 3, 4] {
            calc.add_digit(d);
        }
        calc.add_point();
        calc.add_digit(5);

        assert_eq!(calc.input_string(), "1.234,5");
        assert_eq!(calc.input_value(), 1234.5);
    }

    #[test]
    fn digit_limit_comes_from_config() {
        let mut calc = Calculator::builder()
            .config(CalculatorConfig {
                digit_limit: 4,
                ..CalculatorConfig::default()
            })
            .build()
            .unwrap();
        for d in [9, 9, 9, 9, 9, 9] {
            calc.add_digit(d);
        }
        assert_eq!(calc.input_string(), "9,999");
    }

    #[test]
    fn evaluator_can_be_substituted() {
        let mut calc = Calculator::builder()
            .evaluator(Constant(42.0))
            .build()
            .unwrap();
        calc.add_digit(1);
        assert_eq!(calc.display_value(), 42.0);
    }
}

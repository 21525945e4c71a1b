//! Arithmetic evaluation of canonical expression text.
//!
//! Wraps fasteval behind the [`Evaluate`] contract so the expression
//! builder never depends on a particular parser.

use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised by an evaluator.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvalError {
    #[error("Nothing to evaluate")]
    Empty,

    #[error("Cannot evaluate '{expression}': {reason}")]
    Invalid { expression: String, reason: String },
}

/// Expression evaluator contract.
///
/// Input uses `+ - * /` between plain decimal literals, e.g. `"12+-7"`.
pub trait Evaluate: Send + Sync {
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError>;
}

/// Default evaluator backed by fasteval.
///
/// Operator precedence is honoured, so a folded chain such as `2+3*4`
/// evaluates to `14`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArithmeticEvaluator;

impl Evaluate for ArithmeticEvaluator {
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(EvalError::Empty);
        }

        // No variables are ever bound
        let mut namespace = BTreeMap::<String, f64>::new();
        fasteval::ez_eval(expression, &mut namespace).map_err(|e| EvalError::Invalid {
            expression: expression.to_string(),
            reason: format!("{e:?}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_binary_expressions() {
        let eval = ArithmeticEvaluator;
        assert_eq!(eval.evaluate("12+7").unwrap(), 19.0);
        assert_eq!(eval.evaluate("12-7").unwrap(), 5.0);
        assert_eq!(eval.evaluate("6*7").unwrap(), 42.0);
        assert_eq!(eval.evaluate("7/2").unwrap(), 3.5);
    }

    #[test]
    fn single_literal_evaluates_to_itself() {
        assert_eq!(ArithmeticEvaluator.evaluate("42").unwrap(), 42.0);
        assert_eq!(ArithmeticEvaluator.evaluate("0.25").unwrap(), 0.25);
    }

    #[test]
    fn negative_operands() {
        let eval = ArithmeticEvaluator;
        assert_eq!(eval.evaluate("5+-3").unwrap(), 2.0);
        assert_eq!(eval.evaluate("-4*-2").unwrap(), 8.0);
    }

    #[test]
    fn folded_chain_respects_precedence() {
        assert_eq!(ArithmeticEvaluator.evaluate("2+3*4").unwrap(), 14.0);
    }

    #[test]
    fn division_by_zero_is_infinite() {
        assert!(ArithmeticEvaluator.evaluate("1/0").unwrap().is_infinite());
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(ArithmeticEvaluator.evaluate("  "), Err(EvalError::Empty));
    }

    #[test]
    fn dangling_operator_is_an_error() {
        assert!(matches!(
            ArithmeticEvaluator.evaluate("5+"),
            Err(EvalError::Invalid { .. })
        ));
    }
}

//! Calculator configuration and locale symbols.
//!
//! The symbol set is handed explicitly to the formatter and to the
//! expression builder; nothing in the crate looks it up ambiently.
//!
//! # Example Configuration
//!
//! ```json
//! {
//!   "digit_limit": 12,
//!   "max_fraction_digits": 8,
//!   "symbols": {
//!     "zero_digit": "0",
//!     "decimal_separator": ",",
//!     "grouping_separator": ".",
//!     "minus_sign": "-",
//!     "percent": "%",
//!     "nan": "NaN",
//!     "infinity": "∞"
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest digit limit that still round-trips exactly through an `f64`.
pub const MAX_DIGIT_LIMIT: usize = 15;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse JSON
    #[error("Failed to parse JSON config: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Locale symbols used to render and read numerals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSymbols {
    /// Glyph for the digit zero; the nine following code points are 1-9
    pub zero_digit: char,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub minus_sign: char,
    pub percent: char,
    /// Rendered in place of a value that is not a number
    pub nan: String,
    /// Rendered in place of an infinite value
    pub infinity: String,
}

impl Default for LocaleSymbols {
    fn default() -> Self {
        Self {
            zero_digit: '0',
            decimal_separator: '.',
            grouping_separator: ',',
            minus_sign: '-',
            percent: '%',
            nan: "NaN".to_string(),
            infinity: "∞".to_string(),
        }
    }
}

impl LocaleSymbols {
    /// Glyph for `digit` (0-9), offset from the zero glyph.
    pub fn digit_glyph(&self, digit: u8) -> Option<char> {
        if digit > 9 {
            return None;
        }
        char::from_u32(self.zero_digit as u32 + u32::from(digit))
    }

    /// Numeric value of a locale digit glyph.
    pub fn digit_value(&self, glyph: char) -> Option<u8> {
        let offset = (glyph as u32).checked_sub(self.zero_digit as u32)?;
        (offset <= 9).then_some(offset as u8)
    }

    pub fn is_digit(&self, glyph: char) -> bool {
        self.digit_value(glyph).is_some()
    }

    /// The zero glyph as a string, the text of a cleared display.
    pub fn zero(&self) -> String {
        self.zero_digit.to_string()
    }

    /// Reject symbol sets that make rendered text ambiguous.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.digit_glyph(9).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "zero_digit {:?} has no nine successor glyphs",
                self.zero_digit
            )));
        }

        let marks = [
            ("decimal_separator", self.decimal_separator),
            ("grouping_separator", self.grouping_separator),
            ("minus_sign", self.minus_sign),
            ("percent", self.percent),
        ];
        for (i, (name, mark)) in marks.iter().enumerate() {
            if self.is_digit(*mark) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} {mark:?} collides with a digit glyph"
                )));
            }
            if let Some((other, _)) = marks[i + 1..].iter().find(|(_, m)| m == mark) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} and {other} are both {mark:?}"
                )));
            }
        }

        if self.nan.is_empty() || self.infinity.is_empty() {
            return Err(ConfigError::ValidationError(
                "nan and infinity tokens must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Calculator settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Maximum number of digit glyphs a display buffer accepts from typing
    pub digit_limit: usize,

    /// Maximum fraction digits rendered for computed values
    pub max_fraction_digits: usize,

    pub symbols: LocaleSymbols,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            digit_limit: MAX_DIGIT_LIMIT,
            max_fraction_digits: 10,
            symbols: LocaleSymbols::default(),
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DIGIT_LIMIT).contains(&self.digit_limit) {
            return Err(ConfigError::ValidationError(format!(
                "digit_limit must be between 1 and {MAX_DIGIT_LIMIT}, got {}",
                self.digit_limit
            )));
        }
        self.symbols.validate()
    }
}

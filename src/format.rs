//! Locale-aware rendering and parsing of numerals.

use crate::config::LocaleSymbols;
use thiserror::Error;

/// Errors raised when text cannot be read back as a number.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormatError {
    #[error("'{text}' contains no digits")]
    NoDigits { text: String },

    #[error("'{text}' has an unexpected character {found:?}")]
    UnexpectedCharacter { text: String, found: char },
}

/// Number formatter/parser contract.
///
/// Implementations render a value in a locale and read the same text back.
/// `parse(format(v))` must equal `v` up to the rendered fraction digits.
pub trait NumberFormat: Send + Sync {
    fn symbols(&self) -> &LocaleSymbols;

    fn format(&self, value: f64) -> String;

    fn parse(&self, text: &str) -> Result<f64, FormatError>;
}

/// Default formatter driven by a [`LocaleSymbols`] set.
///
/// Integer digits are grouped in threes, fractions are rounded to
/// `max_fraction_digits` with trailing zeros trimmed.
#[derive(Clone, Debug)]
pub struct LocaleFormat {
    symbols: LocaleSymbols,
    max_fraction_digits: usize,
}

impl LocaleFormat {
    pub fn new(symbols: LocaleSymbols, max_fraction_digits: usize) -> Self {
        Self {
            symbols,
            max_fraction_digits,
        }
    }

    fn localize(&self, ascii: char) -> char {
        ascii
            .to_digit(10)
            .and_then(|d| self.symbols.digit_glyph(d as u8))
            .unwrap_or(ascii)
    }
}

impl Default for LocaleFormat {
    fn default() -> Self {
        Self::new(LocaleSymbols::default(), 10)
    }
}

impl NumberFormat for LocaleFormat {
    fn symbols(&self) -> &LocaleSymbols {
        &self.symbols
    }

    fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return self.symbols.nan.clone();
        }
        if value.is_infinite() {
            return if value < 0.0 {
                format!("{}{}", self.symbols.minus_sign, self.symbols.infinity)
            } else {
                self.symbols.infinity.clone()
            };
        }

        let rendered = format!("{:.*}", self.max_fraction_digits, value.abs());
        let (integer, fraction) = match rendered.split_once('.') {
            Some((integer, fraction)) => (integer, fraction.trim_end_matches('0')),
            None => (rendered.as_str(), ""),
        };

        // -0.0 and values that round to zero carry no sign
        let is_zero = integer.bytes().all(|b| b == b'0') && fraction.is_empty();
        let mut out = String::with_capacity(rendered.len() + rendered.len() / 3 + 1);
        if value < 0.0 && !is_zero {
            out.push(self.symbols.minus_sign);
        }

        let len = integer.len();
        for (i, ch) in integer.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.symbols.grouping_separator);
            }
            out.push(self.localize(ch));
        }

        if !fraction.is_empty() {
            out.push(self.symbols.decimal_separator);
            out.extend(fraction.chars().map(|ch| self.localize(ch)));
        }
        out
    }

    fn parse(&self, text: &str) -> Result<f64, FormatError> {
        let symbols = &self.symbols;
        let text = text.trim();

        if text == symbols.nan {
            return Ok(f64::NAN);
        }
        if text == symbols.infinity {
            return Ok(f64::INFINITY);
        }
        if text.strip_prefix(symbols.minus_sign) == Some(symbols.infinity.as_str()) {
            return Ok(f64::NEG_INFINITY);
        }

        let mut normalized = String::with_capacity(text.len());
        let mut seen_digit = false;
        let mut seen_point = false;
        for (i, ch) in text.chars().enumerate() {
            if i == 0 && ch == symbols.minus_sign {
                normalized.push('-');
            } else if ch == symbols.grouping_separator {
                continue;
            } else if ch == symbols.decimal_separator && !seen_point {
                normalized.push('.');
                seen_point = true;
            } else if let Some(digit) = symbols.digit_value(ch) {
                normalized.push(char::from(b'0' + digit));
                seen_digit = true;
            } else {
                return Err(FormatError::UnexpectedCharacter {
                    text: text.to_string(),
                    found: ch,
                });
            }
        }

        if !seen_digit {
            return Err(FormatError::NoDigits {
                text: text.to_string(),
            });
        }
        if normalized.ends_with('.') {
            normalized.pop();
        }

        normalized
            .parse::<f64>()
            .map_err(|_| FormatError::NoDigits {
                text: text.to_string(),
            })
    }
}

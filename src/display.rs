//! Display buffers: one user-visible numeral and the value behind it.

use crate::format::NumberFormat;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Anything that exposes a formatted string and a numeric value.
///
/// The expression builder reads its operands through this capability, so
/// any value with a fixed text and number can stand in for a display buffer.
pub trait Operand {
    fn text(&self) -> &str;
    fn value(&self) -> f64;
}

/// A display buffer.
///
/// Holds the text shown to the user and the value parsed from it. Outside
/// of a failed parse, `value` always equals `parse(text)`; after a failed
/// parse the text is the NaN token.
#[derive(Clone)]
pub struct DisplayValue {
    text: String,
    value: f64,
    digit_limit: usize,
    format: Arc<dyn NumberFormat>,
}

impl DisplayValue {
    pub fn new(format: Arc<dyn NumberFormat>, digit_limit: usize) -> Self {
        Self {
            text: format.symbols().zero(),
            value: 0.0,
            digit_limit,
            format,
        }
    }

    /// Number of digit glyphs in the text; separators and signs excluded.
    pub fn digit_count(&self) -> usize {
        let symbols = self.format.symbols();
        self.text.chars().filter(|c| symbols.is_digit(*c)).count()
    }

    pub fn digit_limit(&self) -> usize {
        self.digit_limit
    }

    /// Append a digit. Ignored once `digit_limit` digits are shown.
    pub fn add_digit(&mut self, digit: u8) {
        if self.digit_count() >= self.digit_limit {
            return;
        }
        let Some(glyph) = self.format.symbols().digit_glyph(digit) else {
            warn!(digit, "ignoring digit outside 0-9");
            return;
        };

        if self.text == self.format.symbols().zero() {
            self.text = glyph.to_string();
        } else {
            self.text.push(glyph);
        }
        self.reformat();
    }

    /// Append a decimal separator. The text is not reformatted so the
    /// trailing separator survives while typing.
    pub fn add_point(&mut self) {
        let point = self.format.symbols().decimal_separator;
        if !self.text.contains(point) {
            self.text.push(point);
        }
    }

    pub fn clear(&mut self) {
        self.text = self.format.symbols().zero();
        self.value = 0.0;
    }

    /// Drop the last character; a lone digit (signed or not) clears.
    pub fn remove_digit(&mut self) {
        let mut chars = self.text.chars();
        let lone_digit = match (chars.next(), chars.next(), chars.next()) {
            (Some(_), None, _) => true,
            (Some(first), Some(_), None) => first == self.format.symbols().minus_sign,
            _ => false,
        };

        if lone_digit {
            self.clear();
        } else {
            self.text.pop();
            self.reformat();
        }
    }

    /// Replace the buffer with a computed value.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.text = self.format.format(value);
    }

    /// Flip the sign. Driven by the value, not the text: a zero value only
    /// ever loses a minus sign, so the display never shows a negative zero.
    pub fn toggle_sign(&mut self) {
        let minus = self.format.symbols().minus_sign;
        if self.value <= 0.0 {
            if self.text.starts_with(minus) {
                self.text.remove(0);
            }
        } else {
            self.text.insert(0, minus);
        }
        self.reformat();
    }

    /// `false` once the buffer shows the NaN or infinity token.
    pub fn valid_value(&self) -> bool {
        let symbols = self.format.symbols();
        let unsigned = self
            .text
            .strip_prefix(symbols.minus_sign)
            .unwrap_or(&self.text);
        self.text != symbols.nan && unsigned != symbols.infinity
    }

    /// Re-parse the text; without a decimal separator, re-render it too so
    /// grouping separators land in canonical positions.
    fn reformat(&mut self) {
        match self.format.parse(&self.text) {
            Ok(value) => {
                self.value = value;
                if !self.text.contains(self.format.symbols().decimal_separator) {
                    self.text = self.format.format(value);
                }
            }
            Err(error) => {
                warn!(text = %self.text, %error, "display text failed to parse");
                self.value = f64::NAN;
                self.text = self.format.symbols().nan.clone();
            }
        }
    }
}

impl Operand for DisplayValue {
    fn text(&self) -> &str {
        &self.text
    }

    fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Debug for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayValue")
            .field("text", &self.text)
            .field("value", &self.value)
            .field("digit_limit", &self.digit_limit)
            .finish_non_exhaustive()
    }
}

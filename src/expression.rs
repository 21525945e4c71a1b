//! The running arithmetic expression.
//!
//! An [`Expression`] accumulates a left operand, an operator and a right
//! operand in two parallel forms: display text such as `"12 + 7"` and
//! evaluable text such as `"12+7"` that the [`Evaluate`] collaborator reads.

use crate::config::LocaleSymbols;
use crate::display::Operand;
use crate::eval::Evaluate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Returned when text does not name a calculator operator.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown operator '{0}'")]
pub struct OperatorParseError(pub String);

/// A binary calculator operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Glyph shown in display text.
    pub fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Canonical token used in evaluable text.
    pub fn token(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// `+` and `-` show their running subtotal and use the left operand as
    /// the percent base.
    pub fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for Operator {
    type Err = OperatorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "×" | "*" | "x" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            other => Err(OperatorParseError(other.to_string())),
        }
    }
}

/// Evaluable rendering of a value. Plain decimal, never exponent notation.
fn internal(value: f64) -> String {
    format!("{value}")
}

/// Left operand, pending operator and right operand of one calculation.
///
/// Slots only fill left to right: a right operand implies an operator and
/// an operator implies a left operand.
#[derive(Clone)]
pub struct Expression {
    display: String,
    evaluable: String,
    left: Option<String>,
    left_internal: Option<String>,
    operator: Option<Operator>,
    right: Option<String>,
    right_internal: Option<String>,
    symbols: LocaleSymbols,
    evaluator: Arc<dyn Evaluate>,
}

impl Expression {
    pub fn new(symbols: LocaleSymbols, evaluator: Arc<dyn Evaluate>) -> Self {
        Self {
            display: String::new(),
            evaluable: String::new(),
            left: None,
            left_internal: None,
            operator: None,
            right: None,
            right_internal: None,
            symbols,
            evaluator,
        }
    }

    pub fn display_text(&self) -> &str {
        &self.display
    }

    pub fn evaluable_text(&self) -> &str {
        &self.evaluable
    }

    pub fn left(&self) -> Option<&str> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&str> {
        self.right.as_deref()
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Store an operand: the left one while no operator is pending, the
    /// right one otherwise.
    pub fn set_val(&mut self, operand: &impl Operand) {
        self.place(operand.text().to_string(), internal(operand.value()));
    }

    /// Record a pending operator, folding any complete `left op right` into
    /// the new left operand first.
    pub fn set_operator(&mut self, op: Operator) {
        if self.left.is_none() {
            self.left = Some(self.symbols.zero());
            self.left_internal = Some(internal(0.0));
        }

        if let (Some(pending), Some(right), Some(right_internal)) = (
            self.operator,
            self.right.take(),
            self.right_internal.take(),
        ) {
            let left = self.left.take().unwrap_or_default();
            let left_internal = self.left_internal.take().unwrap_or_default();
            self.left = Some(format!("{left} {} {right}", pending.glyph()));
            self.left_internal = Some(format!("{left_internal}{}{right_internal}", pending.token()));
        }

        self.operator = Some(op);
        let left = self.left.as_deref().unwrap_or_default();
        self.display = format!("{left} {} ", op.glyph());
        self.evaluable = self.left_internal.clone().unwrap_or_default();
    }

    /// `true` when an operator waits for its right operand, so the next
    /// digit should start a fresh entry.
    pub fn need_clear_display(&self) -> bool {
        self.operator.is_some() && self.right.is_none()
    }

    /// Evaluate the evaluable text. Failures are logged and become NaN.
    pub fn operate(&self) -> f64 {
        self.evaluate(&self.evaluable)
    }

    /// Store a percent operand and return its value.
    ///
    /// Under a pending `+` or `-` the percent is taken of the left operand's
    /// value; otherwise it is taken of one, so `50%` is `0.5`.
    pub fn set_percent(&mut self, display: &str, percent: f64) -> f64 {
        let base = match (self.operator, self.left_internal.as_deref()) {
            (Some(op), Some(left)) if op.is_additive() => self.evaluate(left),
            _ => 1.0,
        };
        let value = base * percent / 100.0;
        self.place(display.to_string(), internal(value));
        value
    }

    /// Re-apply the pending operator and right operand to `previous`.
    ///
    /// Returns `None` when there is no right operand to repeat.
    pub fn repeat(&mut self, previous: &impl Operand) -> Option<f64> {
        if self.right.is_none() {
            return None;
        }
        self.left = Some(previous.text().to_string());
        self.left_internal = Some(internal(previous.value()));
        self.compose();
        Some(self.operate())
    }

    pub fn clear(&mut self) {
        self.display.clear();
        self.evaluable.clear();
        self.left = None;
        self.left_internal = None;
        self.operator = None;
        self.right = None;
        self.right_internal = None;
    }

    fn place(&mut self, text: String, internal: String) {
        if self.operator.is_none() {
            self.display = text.clone();
            self.evaluable = internal.clone();
            self.left = Some(text);
            self.left_internal = Some(internal);
        } else {
            self.right = Some(text);
            self.right_internal = Some(internal);
            self.compose();
        }
    }

    fn compose(&mut self) {
        let (Some(op), Some(left), Some(right)) = (self.operator, &self.left, &self.right) else {
            return;
        };
        let left_internal = self.left_internal.as_deref().unwrap_or_default();
        let right_internal = self.right_internal.as_deref().unwrap_or_default();
        self.display = format!("{left} {} {right}", op.glyph());
        self.evaluable = format!("{left_internal}{}{right_internal}", op.token());
    }

    fn evaluate(&self, text: &str) -> f64 {
        self.evaluator.evaluate(text).unwrap_or_else(|error| {
            warn!(expression = text, %error, "evaluation failed");
            f64::NAN
        })
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expression")
            .field("display", &self.display)
            .field("evaluable", &self.evaluable)
            .field("left", &self.left)
            .field("operator", &self.operator)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}

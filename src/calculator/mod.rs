//! The calculator state machine.
//!
//! A [`Calculator`] owns one [`Expression`] and two display buffers: the
//! input being typed and the live or committed result. Every key press is a
//! transition on the current [`Phase`]; the phase is stored explicitly and,
//! outside `Committed`, always agrees with the expression's operand slots.

mod phase;

pub use phase::Phase;

use crate::builder::CalculatorBuilder;
use crate::config::CalculatorConfig;
use crate::core::State;
use crate::display::{DisplayValue, Operand};
use crate::eval::{ArithmeticEvaluator, Evaluate};
use crate::expression::{Expression, Operator};
use crate::format::{LocaleFormat, NumberFormat};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// One discrete calculator key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Digit(u8),
    Point,
    Operator(Operator),
    Percent,
    ToggleSign,
    Backspace,
    /// `=`: show the result and keep the calculation for repeats
    Equals,
    /// `=` that ends the calculation
    Commit,
    /// Clear entry
    Clear,
    AllClear,
}

/// Four-function calculator with percent, sign toggle and repeat-equals.
#[derive(Debug)]
pub struct Calculator {
    expression: Expression,
    input: DisplayValue,
    result: DisplayValue,
    phase: Phase,
    percent: char,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Calculator with the default configuration and collaborators.
    pub fn new() -> Self {
        let config = CalculatorConfig::default();
        let format = Arc::new(LocaleFormat::new(
            config.symbols.clone(),
            config.max_fraction_digits,
        ));
        Self::with_parts(config.digit_limit, format, Arc::new(ArithmeticEvaluator))
    }

    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    pub(crate) fn with_parts(
        digit_limit: usize,
        format: Arc<dyn NumberFormat>,
        evaluator: Arc<dyn Evaluate>,
    ) -> Self {
        let symbols = format.symbols().clone();
        Self {
            percent: symbols.percent,
            expression: Expression::new(symbols, evaluator),
            input: DisplayValue::new(Arc::clone(&format), digit_limit),
            result: DisplayValue::new(format, digit_limit),
            phase: Phase::Entering,
        }
    }

    pub fn input_string(&self) -> &str {
        self.input.text()
    }

    pub fn input_value(&self) -> f64 {
        self.input.value()
    }

    /// Human-readable expression, e.g. `"12 + 7"`.
    pub fn expression(&self) -> &str {
        self.expression.display_text()
    }

    /// `"= <result>"` while a nonzero result belongs to an expression with
    /// an operator; empty otherwise.
    pub fn display_string(&self) -> String {
        if self.result.value() != 0.0 && self.expression.operator().is_some() {
            format!("= {}", self.result.text())
        } else {
            String::new()
        }
    }

    pub fn display_value(&self) -> f64 {
        self.result.value()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `true` while an `=` result waits for a repeat or a new entry.
    pub fn is_operated(&self) -> bool {
        self.phase == Phase::Committed
    }

    pub fn input(&self) -> &DisplayValue {
        &self.input
    }

    pub fn result(&self) -> &DisplayValue {
        &self.result
    }

    pub fn current_expression(&self) -> &Expression {
        &self.expression
    }

    /// Route one key to its operation.
    pub fn press(&mut self, key: Key) {
        trace!(?key, phase = self.phase.name(), "key pressed");
        match key {
            Key::Digit(digit) => self.add_digit(digit),
            Key::Point => self.add_point(),
            Key::Operator(op) => self.set_operator(op),
            Key::Percent => self.set_percent(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Backspace => self.remove_digit(),
            Key::Equals => self.operate(false),
            Key::Commit => self.operate(true),
            Key::Clear => self.clear(),
            Key::AllClear => self.all_clear(),
        }
    }

    /// Type a digit and refresh the live result.
    pub fn add_digit(&mut self, digit: u8) {
        if digit > 9 {
            warn!(digit, "ignoring digit outside 0-9");
            return;
        }
        if !self.begin_entry("digit") {
            return;
        }
        self.input.add_digit(digit);
        self.expression.set_val(&self.input);
        self.refresh_result();
        self.settle("digit");
    }

    /// Type a decimal separator. The live result is left alone.
    pub fn add_point(&mut self) {
        if !self.begin_entry("point") {
            return;
        }
        self.input.add_point();
        self.expression.set_val(&self.input);
        self.settle("point");
    }

    /// Choose the pending operator. `+` and `-` show the running subtotal
    /// at once; `×` and `÷` wait for their right operand.
    pub fn set_operator(&mut self, op: Operator) {
        if self.check("operator") {
            return;
        }
        self.seed_left();
        self.expression.set_operator(op);
        self.settle("operator");

        if op.is_additive() {
            self.operate(false);
            self.enter(Phase::OperatorPending, "subtotal");
        }
    }

    /// `=`. Repeats the last operation when a result is already shown;
    /// `commit` ends the calculation instead of keeping it for repeats.
    pub fn operate(&mut self, commit: bool) {
        if !self.input.valid_value() {
            debug!(event = "equals", "input is invalid, ignoring");
            return;
        }

        if self.phase == Phase::Committed {
            if let Some(value) = self.expression.repeat(&self.input) {
                self.input.set_value(value);
                self.result.set_value(value);
            }
            return;
        }

        self.seed_left();
        let value = self.expression.operate();
        self.input.set_value(value);
        self.result.set_value(value);

        if commit {
            self.expression.clear();
            self.enter(Phase::Entering, "commit");
        } else {
            self.enter(Phase::Committed, "equals");
        }
    }

    pub fn remove_digit(&mut self) {
        if self.check("backspace") {
            return;
        }
        self.input.remove_digit();
        self.expression.set_val(&self.input);
        self.refresh_result();
        self.settle("backspace");
    }

    /// Turn the input into a percent: of the left operand under `+`/`-`,
    /// of one otherwise.
    pub fn set_percent(&mut self) {
        if self.check("percent") {
            return;
        }
        let display = format!("{}{}", self.input.text(), self.percent);
        let value = self.expression.set_percent(&display, self.input.value());
        self.input.set_value(value);
        self.refresh_result();
        self.settle("percent");
    }

    pub fn toggle_sign(&mut self) {
        if self.check("toggle_sign") {
            return;
        }
        self.input.toggle_sign();
        self.expression.set_val(&self.input);
        self.refresh_result();
        self.settle("toggle_sign");
    }

    /// Clear entry: zero both buffers and the current operand, keeping the
    /// left operand and pending operator.
    pub fn clear(&mut self) {
        self.input.clear();
        self.result.clear();
        self.expression.set_val(&self.input);
        if self.phase != Phase::Committed {
            self.settle("clear");
        }
    }

    pub fn all_clear(&mut self) {
        self.expression.clear();
        self.input.clear();
        self.result.clear();
        self.enter(Phase::Entering, "all_clear");
    }

    /// Shared guard for edits. Returns `true` when the caller must abort
    /// because the input is invalid. A shown `=` result is rewrapped as the
    /// left operand of a fresh expression.
    fn check(&mut self, event: &'static str) -> bool {
        if !self.input.valid_value() {
            debug!(event, "input is invalid, ignoring");
            return true;
        }
        if self.phase == Phase::Committed {
            self.expression.clear();
            self.expression.set_val(&self.input);
            self.enter(Phase::Entering, event);
        }
        false
    }

    /// Reset before typing into the input. Returns `false` when the input
    /// is invalid.
    fn begin_entry(&mut self, event: &'static str) -> bool {
        if !self.input.valid_value() {
            debug!(event, "input is invalid, ignoring");
            return false;
        }
        if self.expression.need_clear_display() {
            self.input.clear();
        }
        if self.phase == Phase::Committed {
            self.all_clear();
        }
        true
    }

    /// An empty expression (fresh, or after a commit) starts from whatever
    /// the input shows.
    fn seed_left(&mut self) {
        if self.expression.left().is_none() {
            self.expression.set_val(&self.input);
        }
    }

    fn refresh_result(&mut self) {
        let value = self.expression.operate();
        self.result.set_value(value);
    }

    fn settle(&mut self, event: &'static str) {
        let next = Phase::of(&self.expression);
        self.enter(next, event);
    }

    fn enter(&mut self, next: Phase, event: &'static str) {
        if self.phase != next {
            debug!(from = self.phase.name(), to = next.name(), event, "phase transition");
            self.phase = next;
        }
    }
}

//! Pocket Calc: the computational core of a four-function pocket calculator.
//!
//! The crate tracks what the user has typed, maintains a running arithmetic
//! expression, and produces both a live result and a committed `=` result,
//! including percent, sign toggle and repeat-on-`=` semantics.
//!
//! # Core Concepts
//!
//! - **DisplayValue**: a display buffer holding locale-formatted text and its value
//! - **Expression**: left operand, operator and right operand in display and
//!   evaluable form
//! - **Calculator**: the state machine sequencing key presses over an
//!   explicit [`Phase`]
//!
//! Number formatting and arithmetic evaluation are external collaborators
//! behind the [`NumberFormat`] and [`Evaluate`] traits.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::{Calculator, Operator};
//!
//! let mut calc = Calculator::new();
//! calc.add_digit(5);
//! calc.set_operator(Operator::Add);
//! calc.add_digit(3);
//!
//! calc.operate(false);
//! assert_eq!(calc.input_string(), "8");
//!
//! // `=` again repeats "+ 3"
//! calc.operate(false);
//! assert_eq!(calc.input_string(), "11");
//! assert_eq!(calc.expression(), "8 + 3");
//! ```

pub mod builder;
pub mod calculator;
pub mod config;
pub mod core;
pub mod display;
pub mod eval;
pub mod expression;
pub mod format;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use calculator::{Calculator, Key, Phase};
pub use config::{CalculatorConfig, ConfigError, LocaleSymbols};
pub use crate::core::State;
pub use display::{DisplayValue, Operand};
pub use eval::{ArithmeticEvaluator, EvalError, Evaluate};
pub use expression::{Expression, Operator, OperatorParseError};
pub use format::{FormatError, LocaleFormat, NumberFormat};

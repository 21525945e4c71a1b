//! Builder API for calculator construction.
//!
//! The builder swaps in a configuration or either external collaborator,
//! validating the result before a [`Calculator`](crate::Calculator) exists.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::CalculatorBuilder;

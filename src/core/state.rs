//! Core State trait for calculator phases.
//!
//! A phase describes where the calculator is within one calculation:
//! typing the first operand, waiting on the second, or showing a result.
//! The trait only inspects a phase; it never changes one.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. A state is a plain value that describes the
/// current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: states are copied into log records
/// - `PartialEq`: transitions compare the old and new state
/// - `Debug`: states show up in diagnostics
/// - `Serialize` + `Deserialize`: states can be captured alongside the display
///
/// # Example
///
/// ```rust
/// use pocket_calc::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum EntryState {
///     Typing,
///     Shown,
///     Overflow,
/// }
///
/// impl State for EntryState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Typing => "Typing",
///             Self::Shown => "Shown",
///             Self::Overflow => "Overflow",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Shown | Self::Overflow)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Overflow)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this state ends a unit of work.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

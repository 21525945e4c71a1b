//! Core state machine types.
//!
//! The calculator keeps its position in a calculation as an explicit,
//! inspectable state rather than a set of flags. This module holds the
//! trait every such state implements.

mod state;

pub use state::State;

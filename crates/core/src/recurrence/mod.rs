//! Recurrence expansion: definitions to dated occurrence series.

pub mod error;
pub mod expander;


pub use error::RecurrenceError;
pub use expander::{BatchExpansion, DEFAULT_OCCURRENCE_CAP, ExpansionLimits, RecurrenceExpander};

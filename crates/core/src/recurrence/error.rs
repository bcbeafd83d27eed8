//! Recurrence error types.

use spendwise_shared::types::ExpenseId;
use thiserror::Error;

/// Errors that can occur while expanding a recurring expense.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecurrenceError {
    /// Recurring expense has neither a date nor a due date.
    #[error("Recurring expense {id} has no effective date")]
    MissingEffectiveDate {
        /// Offending definition.
        id: ExpenseId,
    },
}

impl From<RecurrenceError> for spendwise_shared::AppError {
    fn from(err: RecurrenceError) -> Self {
        Self::InvalidRecurrence(err.to_string())
    }
}

//! Expense error types.

use thiserror::Error;

/// Errors raised while building or decoding an expense definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseError {
    /// Name is empty or whitespace.
    #[error("Expense name cannot be empty")]
    EmptyName,

    /// Category is empty or whitespace.
    #[error("Expense category cannot be empty")]
    EmptyCategory,

    /// Occurrence count was given as zero.
    #[error("Number of occurrences must be positive")]
    ZeroOccurrences,

    /// Neither a date nor a due date was supplied.
    #[error("Expense needs a date or a due date")]
    MissingDate,

    /// A date value could not be parsed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A status value is not one of paid, unpaid, overdue.
    #[error("Invalid status: {0}")]
    InvalidStatus(String),
}

impl From<ExpenseError> for spendwise_shared::AppError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::InvalidDate(raw) => Self::InvalidDate(raw),
            other => Self::Validation(other.to_string()),
        }
    }
}

//! Storage error types.

use spendwise_shared::types::ExpenseId;
use thiserror::Error;

use crate::expense::ExpenseError;

/// Errors reported by an [`ExpenseStore`](super::ExpenseStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with this id.
    #[error("Expense not found: {0}")]
    NotFound(ExpenseId),

    /// Record failed validation before being written.
    #[error(transparent)]
    Invalid(#[from] ExpenseError),

    /// Underlying storage failure.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for spendwise_shared::AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(format!("expense {id}")),
            StoreError::Invalid(inner) => inner.into(),
            StoreError::Backend(msg) => Self::Storage(msg),
        }
    }
}

//! Report error types.

use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// A query that needs at least one dated occurrence received none.
    #[error("No data found for the specified criteria")]
    EmptyDataset,
}

impl From<ReportError> for spendwise_shared::AppError {
    fn from(err: ReportError) -> Self {
        Self::EmptyDataset(err.to_string())
    }
}

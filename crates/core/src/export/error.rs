//! Export error types.

use thiserror::Error;

/// Errors that end an export operation.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Scope name is not one of all, year, month.
    #[error("Unknown export scope: {0}")]
    InvalidScope(String),

    /// Year or month scope without a year.
    #[error("Export scope requires a year")]
    MissingYear,

    /// Month scope without a month.
    #[error("Export scope requires a month")]
    MissingMonth,

    /// Month outside 1-12.
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    /// CSV writer failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Output was not valid UTF-8.
    #[error("Export produced invalid UTF-8")]
    Encoding,
}

impl From<ExportError> for spendwise_shared::AppError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Csv(_) | ExportError::Encoding => Self::Internal(err.to_string()),
            other => Self::InvalidExportScope(other.to_string()),
        }
    }
}

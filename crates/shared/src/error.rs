//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Record not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A recurring expense has no usable effective date.
    #[error("Invalid recurrence: {0}")]
    InvalidRecurrence(String),

    /// A date value could not be parsed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A query that needs at least one record received none.
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// Export scope is unknown or incomplete.
    #[error("Invalid export scope: {0}")]
    InvalidExportScope(String),

    /// Storage collaborator failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 3,
            Self::Validation(_)
            | Self::InvalidRecurrence(_)
            | Self::InvalidDate(_)
            | Self::InvalidExportScope(_) => 2,
            Self::EmptyDataset(_) => 4,
            Self::Storage(_) | Self::Internal(_) => 1,
        }
    }

    /// Returns the stable error code used in machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidRecurrence(_) => "INVALID_RECURRENCE",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::EmptyDataset(_) => "EMPTY_DATASET",
            Self::InvalidExportScope(_) => "INVALID_EXPORT_SCOPE",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

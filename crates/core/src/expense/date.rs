//! Date parsing at the storage and input boundary.

use chrono::{DateTime, NaiveDate};
use tracing::warn;

use super::error::ExpenseError;

/// Parses a calendar date.
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps; for timestamps only the
/// date part as written is kept, so `2024-01-31T23:30:00-05:00` is Jan 31.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ExpenseError> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|_| ExpenseError::InvalidDate(raw.to_string()))
}

/// Parses a calendar date, substituting `fallback` when the value is invalid.
///
/// The substitution is logged so a batch keeps going with a diagnostic trail.
pub fn parse_date_or(raw: &str, fallback: NaiveDate) -> NaiveDate {
    match parse_date(raw) {
        Ok(date) => date,
        Err(err) => {
            warn!(value = raw, %fallback, error = %err, "substituting fallback for unparseable date");
            fallback
        }
    }
}

/// Parses an optional date column; empty and unparseable values become `None`.
pub fn parse_optional_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match parse_date(raw) {
        Ok(date) => Some(date),
        Err(err) => {
            warn!(value = raw, error = %err, "dropping unparseable optional date");
            None
        }
    }
}

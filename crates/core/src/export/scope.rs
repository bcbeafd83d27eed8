//! Export scope selection and output file naming.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::ExportError;
use crate::expense::Occurrence;

/// Which records an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum ExportScope {
    /// Every record.
    All,
    /// Records whose effective date falls in the year.
    Year {
        /// Calendar year.
        year: i32,
    },
    /// Records whose effective date falls in the month.
    Month {
        /// Calendar year.
        year: i32,
        /// Month, 1-12.
        month: u32,
    },
}

impl ExportScope {
    /// Builds a scope from its name and optional parameters.
    ///
    /// # Errors
    ///
    /// Returns an `ExportError` for an unknown scope name, a missing year or
    /// month, or a month outside 1-12.
    pub fn from_parts(kind: &str, year: Option<i32>, month: Option<u32>) -> Result<Self, ExportError> {
        match kind.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "year" => Ok(Self::Year {
                year: year.ok_or(ExportError::MissingYear)?,
            }),
            "month" => {
                let year = year.ok_or(ExportError::MissingYear)?;
                let month = month.ok_or(ExportError::MissingMonth)?;
                Self::month(year, month)
            }
            _ => Err(ExportError::InvalidScope(kind.to_string())),
        }
    }

    /// Builds a month scope, checking the month range.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidMonth` outside 1-12.
    pub fn month(year: i32, month: u32) -> Result<Self, ExportError> {
        if (1..=12).contains(&month) {
            Ok(Self::Month { year, month })
        } else {
            Err(ExportError::InvalidMonth(month))
        }
    }

    /// Returns true if `occurrence` belongs to this scope.
    #[must_use]
    pub fn contains(&self, occurrence: &Occurrence) -> bool {
        match *self {
            Self::All => true,
            Self::Year { year } => occurrence.expense.falls_in_year(year),
            Self::Month { year, month } => occurrence.expense.falls_in_month(year, month),
        }
    }

    /// Filters `occurrences` down to this scope, preserving order.
    #[must_use]
    pub fn select(&self, occurrences: &[Occurrence]) -> Vec<Occurrence> {
        occurrences
            .iter()
            .filter(|o| self.contains(o))
            .cloned()
            .collect()
    }

    /// Default output file name; `today` stamps full exports.
    #[must_use]
    pub fn file_name(&self, today: NaiveDate) -> String {
        match *self {
            Self::All => format!("export-all-{}.csv", today.format("%Y-%m-%d")),
            Self::Year { year } => format!("export-{year}.csv"),
            Self::Month { year, month } => format!("export-{year}-{month:02}.csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::ExpenseDefinition;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dated(date: NaiveDate, due: Option<NaiveDate>) -> Occurrence {
        let mut expense = ExpenseDefinition::builder("Item", dec!(1), "Misc")
            .date(date)
            .build()
            .unwrap();
        expense.due_date = due;
        Occurrence::first(expense)
    }

    #[rstest]
    #[case("all", None, None, ExportScope::All)]
    #[case("ALL", Some(2024), None, ExportScope::All)]
    #[case("year", Some(2024), None, ExportScope::Year { year: 2024 })]
    #[case("month", Some(2024), Some(3), ExportScope::Month { year: 2024, month: 3 })]
    fn test_from_parts(
        #[case] kind: &str,
        #[case] year: Option<i32>,
        #[case] month: Option<u32>,
        #[case] expected: ExportScope,
    ) {
        assert_eq!(ExportScope::from_parts(kind, year, month).unwrap(), expected);
    }

    #[test]
    fn test_from_parts_errors() {
        assert!(matches!(
            ExportScope::from_parts("week", Some(2024), None),
            Err(ExportError::InvalidScope(s)) if s == "week"
        ));
        assert!(matches!(
            ExportScope::from_parts("year", None, None),
            Err(ExportError::MissingYear)
        ));
        assert!(matches!(
            ExportScope::from_parts("month", None, Some(3)),
            Err(ExportError::MissingYear)
        ));
        assert!(matches!(
            ExportScope::from_parts("month", Some(2024), None),
            Err(ExportError::MissingMonth)
        ));
        assert!(matches!(
            ExportScope::from_parts("month", Some(2024), Some(13)),
            Err(ExportError::InvalidMonth(13))
        ));
        assert!(matches!(
            ExportScope::from_parts("month", Some(2024), Some(0)),
            Err(ExportError::InvalidMonth(0))
        ));
    }

    #[test]
    fn test_file_names() {
        let today = ymd(2026, 10, 19);
        assert_eq!(ExportScope::All.file_name(today), "export-all-2026-10-19.csv");
        assert_eq!(ExportScope::Year { year: 2024 }.file_name(today), "export-2024.csv");
        assert_eq!(
            ExportScope::Month { year: 2024, month: 3 }.file_name(today),
            "export-2024-03.csv"
        );
    }

    #[test]
    fn test_select_uses_effective_date() {
        let occurrences = vec![
            dated(ymd(2024, 3, 1), None),
            dated(ymd(2024, 2, 28), Some(ymd(2024, 3, 5))),
            dated(ymd(2024, 3, 10), Some(ymd(2024, 4, 1))),
            dated(ymd(2023, 3, 1), None),
        ];

        let march = ExportScope::Month { year: 2024, month: 3 }.select(&occurrences);
        assert_eq!(march.len(), 2);
        assert_eq!(march[0], occurrences[0]);
        assert_eq!(march[1], occurrences[1]);

        assert_eq!(ExportScope::Year { year: 2024 }.select(&occurrences).len(), 3);
        assert_eq!(ExportScope::All.select(&occurrences).len(), 4);
    }

    #[test]
    fn test_scope_serde_shape() {
        let json = serde_json::to_value(ExportScope::Month { year: 2024, month: 3 }).unwrap();
        assert_eq!(json["scope"], "month");
        assert_eq!(json["year"], 2024);
        let parsed: ExportScope = serde_json::from_str(r#"{"scope":"all"}"#).unwrap();
        assert_eq!(parsed, ExportScope::All);
    }
}

//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of months in a series.
pub const MONTHS_PER_YEAR: usize = 12;

/// Which end of the yearly totals to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extreme {
    /// Year with the largest total.
    Highest,
    /// Year with the smallest total.
    Lowest,
}

/// A year and its total, as returned for the highest or lowest year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearExtreme {
    /// Calendar year.
    pub year: i32,
    /// Sum of amounts in that year.
    pub amount: Decimal,
}

/// Month-by-month totals of one category within a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySeries {
    /// Category label.
    pub category: String,
    /// Totals indexed January (0) to December (11).
    pub months: [Decimal; MONTHS_PER_YEAR],
}

impl MonthlySeries {
    /// Sum of the twelve months.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.months.iter().copied().sum()
    }
}

/// One line of the yearly trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Category label, or `Total` for the overall line.
    pub name: String,
    /// One total per year of [`YearlyTrend::years`].
    pub points: Vec<Decimal>,
}

/// Yearly totals per category across every year with data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyTrend {
    /// Ascending distinct years.
    pub years: Vec<i32>,
    /// One series per category, sorted by name, followed by the total line.
    pub series: Vec<TrendSeries>,
}

/// Summary figures shown under the trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Mean of the yearly totals.
    pub average_yearly: Decimal,
    /// Year with the largest total.
    pub highest: YearExtreme,
    /// Year with the smallest total.
    pub lowest: YearExtreme,
}

/// Yearly overview: the stacked monthly chart plus totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyOverview {
    /// Calendar year.
    pub year: i32,
    /// Monthly series per category.
    pub series: Vec<MonthlySeries>,
    /// Total per month across categories.
    pub monthly_totals: [Decimal; MONTHS_PER_YEAR],
    /// Total for the year.
    pub total: Decimal,
}

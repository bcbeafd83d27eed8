//! Aggregation of occurrences into year, month and category totals.
//!
//! Every grouping keys on [`Occurrence::effective_date`]. Occurrences without
//! an effective date count towards [`AggregationEngine::total_for`] but fall
//! outside every dated bucket.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::error::ReportError;
use super::types::{
    Extreme, MONTHS_PER_YEAR, MonthlySeries, TrendSeries, TrendSummary, YearExtreme, YearlyOverview,
    YearlyTrend,
};
use crate::expense::Occurrence;

/// Name of the overall line in a [`YearlyTrend`].
pub const TOTAL_SERIES_NAME: &str = "Total";

/// Pure reducers over occurrence sets.
pub struct AggregationEngine;

impl AggregationEngine {
    /// Sum of all amounts. Zero for an empty set.
    #[must_use]
    pub fn total_for(occurrences: &[Occurrence]) -> Decimal {
        occurrences.iter().map(Occurrence::amount).sum()
    }

    /// Totals per calendar year.
    #[must_use]
    pub fn by_year(occurrences: &[Occurrence]) -> BTreeMap<i32, Decimal> {
        let mut totals = BTreeMap::new();
        for (date, occurrence) in Self::dated(occurrences) {
            *totals.entry(date.year()).or_insert(Decimal::ZERO) += occurrence.amount();
        }
        totals
    }

    /// Totals per category within `year`.
    #[must_use]
    pub fn by_year_and_category(occurrences: &[Occurrence], year: i32) -> BTreeMap<String, Decimal> {
        Self::category_totals(occurrences, |date| date.year() == year)
    }

    /// Totals per category within `year`/`month` (1-12).
    #[must_use]
    pub fn by_month_and_category(
        occurrences: &[Occurrence],
        year: i32,
        month: u32,
    ) -> BTreeMap<String, Decimal> {
        Self::category_totals(occurrences, |date| date.year() == year && date.month() == month)
    }

    /// Totals per month of `year`, January first.
    #[must_use]
    pub fn by_month(occurrences: &[Occurrence], year: i32) -> [Decimal; MONTHS_PER_YEAR] {
        let mut months = [Decimal::ZERO; MONTHS_PER_YEAR];
        for (date, occurrence) in Self::dated(occurrences).filter(|(d, _)| d.year() == year) {
            months[date.month0() as usize] += occurrence.amount();
        }
        months
    }

    /// Twelve monthly totals per category for `year`, categories sorted.
    ///
    /// Months without a matching occurrence are zero. Categories with no
    /// occurrence in `year` are left out.
    #[must_use]
    pub fn monthly_series(occurrences: &[Occurrence], year: i32) -> Vec<MonthlySeries> {
        let mut by_category: BTreeMap<&str, [Decimal; MONTHS_PER_YEAR]> = BTreeMap::new();
        for (date, occurrence) in Self::dated(occurrences).filter(|(d, _)| d.year() == year) {
            let months = by_category
                .entry(occurrence.category())
                .or_insert([Decimal::ZERO; MONTHS_PER_YEAR]);
            months[date.month0() as usize] += occurrence.amount();
        }

        by_category
            .into_iter()
            .map(|(category, months)| MonthlySeries {
                category: category.to_string(),
                months,
            })
            .collect()
    }

    /// Total for `year`.
    #[must_use]
    pub fn total_for_year(occurrences: &[Occurrence], year: i32) -> Decimal {
        Self::dated(occurrences)
            .filter(|(d, _)| d.year() == year)
            .map(|(_, o)| o.amount())
            .sum()
    }

    /// Total for one category in `year`.
    #[must_use]
    pub fn category_total_for_year(occurrences: &[Occurrence], year: i32, category: &str) -> Decimal {
        Self::dated(occurrences)
            .filter(|(d, o)| d.year() == year && o.category() == category)
            .map(|(_, o)| o.amount())
            .sum()
    }

    /// Builds the yearly overview shown for a single year.
    #[must_use]
    pub fn yearly_overview(occurrences: &[Occurrence], year: i32) -> YearlyOverview {
        YearlyOverview {
            year,
            series: Self::monthly_series(occurrences, year),
            monthly_totals: Self::by_month(occurrences, year),
            total: Self::total_for_year(occurrences, year),
        }
    }

    /// Year with the highest or lowest total.
    ///
    /// Years are scanned in ascending order and only a strictly better total
    /// replaces the current pick, so ties go to the earliest year.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::EmptyDataset` when no occurrence has a date.
    pub fn extreme_year(occurrences: &[Occurrence], extreme: Extreme) -> Result<YearExtreme, ReportError> {
        let mut best: Option<YearExtreme> = None;
        for (year, amount) in Self::by_year(occurrences) {
            let replace = match (best, extreme) {
                (None, _) => true,
                (Some(current), Extreme::Highest) => amount > current.amount,
                (Some(current), Extreme::Lowest) => amount < current.amount,
            };
            if replace {
                best = Some(YearExtreme { year, amount });
            }
        }
        best.ok_or(ReportError::EmptyDataset)
    }

    /// Mean of the yearly totals, rounded to 2 decimal places. Zero when empty.
    #[must_use]
    pub fn average_yearly(occurrences: &[Occurrence]) -> Decimal {
        let totals = Self::by_year(occurrences);
        if totals.is_empty() {
            return Decimal::ZERO;
        }
        let sum: Decimal = totals.values().copied().sum();
        (sum / Decimal::from(totals.len())).round_dp(2)
    }

    /// Yearly totals per category, plus a trailing total line.
    #[must_use]
    pub fn yearly_trend(occurrences: &[Occurrence]) -> YearlyTrend {
        let years = Self::distinct_years(occurrences);
        let mut series: Vec<TrendSeries> = Self::dated_categories(occurrences)
            .into_iter()
            .map(|category| TrendSeries {
                points: years
                    .iter()
                    .map(|&year| Self::category_total_for_year(occurrences, year, &category))
                    .collect(),
                name: category,
            })
            .collect();

        let by_year = Self::by_year(occurrences);
        series.push(TrendSeries {
            name: TOTAL_SERIES_NAME.to_string(),
            points: years
                .iter()
                .map(|year| by_year.get(year).copied().unwrap_or(Decimal::ZERO))
                .collect(),
        });

        YearlyTrend { years, series }
    }

    /// Average, highest and lowest year for the trend view.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::EmptyDataset` when no occurrence has a date.
    pub fn trend_summary(occurrences: &[Occurrence]) -> Result<TrendSummary, ReportError> {
        Ok(TrendSummary {
            highest: Self::extreme_year(occurrences, Extreme::Highest)?,
            lowest: Self::extreme_year(occurrences, Extreme::Lowest)?,
            average_yearly: Self::average_yearly(occurrences),
        })
    }

    /// Ascending distinct years of the effective dates.
    #[must_use]
    pub fn distinct_years(occurrences: &[Occurrence]) -> Vec<i32> {
        Self::dated(occurrences)
            .map(|(date, _)| date.year())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Lexicographically sorted distinct categories.
    #[must_use]
    pub fn distinct_categories(occurrences: &[Occurrence]) -> Vec<String> {
        occurrences
            .iter()
            .map(Occurrence::category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn dated(occurrences: &[Occurrence]) -> impl Iterator<Item = (NaiveDate, &Occurrence)> {
        occurrences
            .iter()
            .filter_map(|o| o.effective_date().map(|date| (date, o)))
    }

    fn dated_categories(occurrences: &[Occurrence]) -> BTreeSet<String> {
        Self::dated(occurrences)
            .map(|(_, o)| o.category().to_string())
            .collect()
    }

    fn category_totals(
        occurrences: &[Occurrence],
        matches: impl Fn(NaiveDate) -> bool,
    ) -> BTreeMap<String, Decimal> {
        let mut totals = BTreeMap::new();
        for (date, occurrence) in Self::dated(occurrences).filter(|(d, _)| matches(*d)) {
            *totals
                .entry(occurrence.category().to_string())
                .or_insert(Decimal::ZERO) += occurrence.amount();
        }
        totals
    }
}

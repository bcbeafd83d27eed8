//! Status classification relative to a reference date.

use chrono::NaiveDate;

use crate::expense::{ExpenseDefinition, ExpenseStatus, Occurrence};

/// Computes the displayed status of occurrences for a given day.
///
/// The reference date is always passed in; nothing here reads the clock.
pub struct StatusResolver;

impl StatusResolver {
    /// Resolves the status of one occurrence on `reference_date`.
    ///
    /// - `paid` stays `paid` regardless of dates
    /// - without a due date the stored status is returned unchanged
    /// - a due date strictly before the reference date is `overdue`
    /// - anything else is `unpaid`
    #[must_use]
    pub fn resolve(occurrence: &Occurrence, reference_date: NaiveDate) -> ExpenseStatus {
        Self::resolve_expense(&occurrence.expense, reference_date)
    }

    /// Same classification applied directly to a definition.
    #[must_use]
    pub fn resolve_expense(expense: &ExpenseDefinition, reference_date: NaiveDate) -> ExpenseStatus {
        if expense.status == ExpenseStatus::Paid {
            return ExpenseStatus::Paid;
        }
        match expense.due_date {
            None => expense.status,
            Some(due) if due < reference_date => ExpenseStatus::Overdue,
            Some(_) => ExpenseStatus::Unpaid,
        }
    }

    /// Returns copies of `occurrences` with their status resolved.
    #[must_use]
    pub fn annotate(occurrences: &[Occurrence], reference_date: NaiveDate) -> Vec<Occurrence> {
        occurrences
            .iter()
            .map(|occurrence| {
                let mut resolved = occurrence.clone();
                resolved.expense.status = Self::resolve(occurrence, reference_date);
                resolved
            })
            .collect()
    }

    /// Returns the occurrences that are overdue on `reference_date`.
    #[must_use]
    pub fn overdue(occurrences: &[Occurrence], reference_date: NaiveDate) -> Vec<&Occurrence> {
        occurrences
            .iter()
            .filter(|o| Self::resolve(o, reference_date) == ExpenseStatus::Overdue)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bill(due: Option<NaiveDate>, status: ExpenseStatus) -> Occurrence {
        let mut expense = ExpenseDefinition::builder("Electricity", dec!(75), "Utilities")
            .date(ymd(2024, 6, 3))
            .status(status)
            .build()
            .unwrap();
        expense.due_date = due;
        Occurrence::first(expense)
    }

    #[rstest]
    #[case(Some(ymd(2024, 6, 3)), ExpenseStatus::Unpaid, ymd(2024, 6, 4), ExpenseStatus::Overdue)]
    #[case(Some(ymd(2024, 6, 3)), ExpenseStatus::Unpaid, ymd(2024, 6, 3), ExpenseStatus::Unpaid)]
    #[case(Some(ymd(2024, 6, 3)), ExpenseStatus::Unpaid, ymd(2024, 6, 1), ExpenseStatus::Unpaid)]
    #[case(Some(ymd(2024, 6, 3)), ExpenseStatus::Overdue, ymd(2024, 6, 1), ExpenseStatus::Unpaid)]
    #[case(Some(ymd(2024, 6, 3)), ExpenseStatus::Paid, ymd(2030, 1, 1), ExpenseStatus::Paid)]
    #[case(None, ExpenseStatus::Unpaid, ymd(2030, 1, 1), ExpenseStatus::Unpaid)]
    #[case(None, ExpenseStatus::Overdue, ymd(2000, 1, 1), ExpenseStatus::Overdue)]
    fn test_resolve(
        #[case] due: Option<NaiveDate>,
        #[case] stored: ExpenseStatus,
        #[case] reference: NaiveDate,
        #[case] expected: ExpenseStatus,
    ) {
        assert_eq!(StatusResolver::resolve(&bill(due, stored), reference), expected);
    }

    #[test]
    fn test_annotate_leaves_input_untouched() {
        let occurrences = vec![
            bill(Some(ymd(2024, 6, 3)), ExpenseStatus::Unpaid),
            bill(Some(ymd(2024, 7, 3)), ExpenseStatus::Unpaid),
            bill(Some(ymd(2024, 5, 3)), ExpenseStatus::Paid),
        ];

        let resolved = StatusResolver::annotate(&occurrences, ymd(2024, 6, 15));

        assert_eq!(resolved[0].status(), ExpenseStatus::Overdue);
        assert_eq!(resolved[1].status(), ExpenseStatus::Unpaid);
        assert_eq!(resolved[2].status(), ExpenseStatus::Paid);
        assert_eq!(occurrences[0].status(), ExpenseStatus::Unpaid);
    }

    #[test]
    fn test_overdue_filter() {
        let occurrences = vec![
            bill(Some(ymd(2024, 6, 3)), ExpenseStatus::Unpaid),
            bill(Some(ymd(2024, 7, 3)), ExpenseStatus::Unpaid),
        ];
        let overdue = StatusResolver::overdue(&occurrences, ymd(2024, 6, 15));
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].expense.due_date, Some(ymd(2024, 6, 3)));
    }

    fn status_strategy() -> impl Strategy<Value = ExpenseStatus> {
        prop_oneof![
            Just(ExpenseStatus::Paid),
            Just(ExpenseStatus::Unpaid),
            Just(ExpenseStatus::Overdue),
        ]
    }

    fn date_strategy() -> impl Strategy<Value = NaiveDate> {
        (0i64..20_000).prop_map(|days| ymd(1990, 1, 1) + chrono::Duration::days(days))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Paid never reverts, whatever the reference date.
        #[test]
        fn prop_paid_is_sticky(due in proptest::option::of(date_strategy()), reference in date_strategy()) {
            let occurrence = bill(due, ExpenseStatus::Paid);
            prop_assert_eq!(StatusResolver::resolve(&occurrence, reference), ExpenseStatus::Paid);
        }

        /// Resolving an already resolved occurrence gives the same status.
        #[test]
        fn prop_resolve_is_idempotent(
            due in proptest::option::of(date_strategy()),
            stored in status_strategy(),
            reference in date_strategy(),
        ) {
            let once = StatusResolver::annotate(&[bill(due, stored)], reference);
            let twice = StatusResolver::annotate(&once, reference);
            prop_assert_eq!(once, twice);
        }
    }
}

//! Reminder windows for upcoming payments.
//!
//! Only computes which occurrences a reminder consumer should surface; no
//! scheduling or delivery happens here.

use chrono::{Days, NaiveDate};

use super::resolver::StatusResolver;
use crate::expense::{ExpenseStatus, Occurrence};

/// Computes reminder dates from `remind_before_days`.
pub struct ReminderPlanner;

impl ReminderPlanner {
    /// First day a reminder is relevant: the effective date minus the lead time.
    ///
    /// `None` for paid or undated occurrences.
    #[must_use]
    pub fn reminder_date(occurrence: &Occurrence) -> Option<NaiveDate> {
        if occurrence.status() == ExpenseStatus::Paid {
            return None;
        }
        let due = occurrence.effective_date()?;
        due.checked_sub_days(Days::new(u64::from(occurrence.expense.remind_before_days)))
    }

    /// Occurrences whose reminder window `[reminder_date, effective_date]`
    /// contains `reference_date`, earliest due first.
    #[must_use]
    pub fn due_reminders(occurrences: &[Occurrence], reference_date: NaiveDate) -> Vec<&Occurrence> {
        let mut due: Vec<&Occurrence> = occurrences
            .iter()
            .filter(|o| StatusResolver::resolve(o, reference_date) != ExpenseStatus::Paid)
            .filter(|o| {
                match (Self::reminder_date(o), o.effective_date()) {
                    (Some(start), Some(end)) => start <= reference_date && reference_date <= end,
                    _ => false,
                }
            })
            .collect();
        due.sort_by_key(|o| (o.effective_date(), o.occurrence_id));
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::ExpenseDefinition;
    use rust_decimal_macros::dec;
    use spendwise_shared::types::ExpenseId;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bill(id: i64, due: NaiveDate, lead: u32, status: ExpenseStatus) -> Occurrence {
        Occurrence::first(
            ExpenseDefinition::builder("Bill", dec!(20), "Utilities")
                .id(ExpenseId::new(id))
                .due_date(due)
                .remind_before_days(lead)
                .status(status)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_reminder_date() {
        let occurrence = bill(1, ymd(2024, 3, 2), 3, ExpenseStatus::Unpaid);
        assert_eq!(ReminderPlanner::reminder_date(&occurrence), Some(ymd(2024, 2, 28)));

        let same_day = bill(1, ymd(2024, 3, 2), 0, ExpenseStatus::Unpaid);
        assert_eq!(ReminderPlanner::reminder_date(&same_day), Some(ymd(2024, 3, 2)));

        let paid = bill(1, ymd(2024, 3, 2), 3, ExpenseStatus::Paid);
        assert_eq!(ReminderPlanner::reminder_date(&paid), None);
    }

    #[test]
    fn test_due_reminders_window() {
        let occurrences = vec![
            bill(1, ymd(2024, 6, 10), 3, ExpenseStatus::Unpaid),
            bill(2, ymd(2024, 6, 8), 1, ExpenseStatus::Unpaid),
            bill(3, ymd(2024, 6, 5), 1, ExpenseStatus::Unpaid),
            bill(4, ymd(2024, 6, 9), 5, ExpenseStatus::Paid),
            bill(5, ymd(2024, 6, 7), 0, ExpenseStatus::Unpaid),
        ];

        let due = ReminderPlanner::due_reminders(&occurrences, ymd(2024, 6, 7));
        let ids: Vec<i64> = due
            .iter()
            .map(|o| o.occurrence_id.parent.into_inner())
            .collect();

        assert_eq!(ids, vec![5, 2, 1]);
    }

    #[test]
    fn test_due_reminders_empty() {
        assert!(ReminderPlanner::due_reminders(&[], ymd(2024, 1, 1)).is_empty());
    }
}

//! Validating builder for expense definitions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendwise_shared::types::ExpenseId;

use super::error::ExpenseError;
use super::types::{DEFAULT_REMIND_BEFORE_DAYS, ExpenseDefinition, ExpenseStatus};

/// Builder for [`ExpenseDefinition`].
#[derive(Debug, Clone)]
#[must_use]
pub struct ExpenseBuilder {
    expense: ExpenseDefinition,
}

impl ExpenseBuilder {
    pub(crate) fn new(name: impl Into<String>, amount: Decimal, category: impl Into<String>) -> Self {
        Self {
            expense: ExpenseDefinition {
                id: ExpenseId::UNASSIGNED,
                name: name.into(),
                description: String::new(),
                amount,
                category: category.into(),
                date: None,
                due_date: None,
                recurring: false,
                num_occurrences: None,
                end_date: None,
                remind_before_days: DEFAULT_REMIND_BEFORE_DAYS,
                status: ExpenseStatus::Unpaid,
            },
        }
    }

    /// Sets the storage id.
    pub const fn id(mut self, id: ExpenseId) -> Self {
        self.expense.id = id;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.expense.description = description.into();
        self
    }

    /// Sets the record date.
    pub const fn date(mut self, date: NaiveDate) -> Self {
        self.expense.date = Some(date);
        self
    }

    /// Sets the due date.
    pub const fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.expense.due_date = Some(due_date);
        self
    }

    /// Marks the expense as recurring monthly.
    pub const fn recurring(mut self, recurring: bool) -> Self {
        self.expense.recurring = recurring;
        self
    }

    /// Bounds the series to `count` occurrences.
    pub const fn num_occurrences(mut self, count: u32) -> Self {
        self.expense.num_occurrences = Some(count);
        self
    }

    /// Bounds the series to dates on or before `end_date`.
    pub const fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.expense.end_date = Some(end_date);
        self
    }

    /// Sets the reminder lead time.
    pub const fn remind_before_days(mut self, days: u32) -> Self {
        self.expense.remind_before_days = days;
        self
    }

    /// Sets the stored status.
    pub const fn status(mut self, status: ExpenseStatus) -> Self {
        self.expense.status = status;
        self
    }

    /// Validates and returns the definition.
    pub fn build(self) -> Result<ExpenseDefinition, ExpenseError> {
        self.expense.validate()?;
        Ok(self.expense)
    }
}

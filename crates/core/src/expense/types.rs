//! Expense data types.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendwise_shared::types::{ExpenseId, OccurrenceId};

use super::builder::ExpenseBuilder;
use super::error::ExpenseError;

/// Default reminder lead time in days.
pub const DEFAULT_REMIND_BEFORE_DAYS: u32 = 1;

/// Lifecycle status of an expense.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    /// Settled. Never reverts.
    Paid,
    /// Not settled and not yet past due.
    #[default]
    Unpaid,
    /// Not settled and past due.
    Overdue,
}

impl ExpenseStatus {
    /// Returns the storage string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
            Self::Overdue => "overdue",
        }
    }
}

impl std::fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExpenseStatus {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paid" => Ok(Self::Paid),
            "unpaid" => Ok(Self::Unpaid),
            "overdue" => Ok(Self::Overdue),
            _ => Err(ExpenseError::InvalidStatus(s.to_string())),
        }
    }
}

/// A user-authored expense record, possibly recurring.
///
/// Construct new definitions through [`ExpenseDefinition::builder`] so that
/// defaults are filled in one place. Records decoded from storage may lack
/// dates; such records cannot be expanded into a recurring series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDefinition {
    /// Storage id, [`ExpenseId::UNASSIGNED`] until inserted.
    #[serde(default)]
    pub id: ExpenseId,
    /// Display name.
    pub name: String,
    /// Free-form notes.
    #[serde(default)]
    pub description: String,
    /// Signed amount in currency units.
    pub amount: Decimal,
    /// Free-form category label.
    pub category: String,
    /// Logical creation date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Due date; when absent `date` is used for scheduling and aggregation.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Whether the expense repeats monthly.
    #[serde(default)]
    pub recurring: bool,
    /// Total number of occurrences; `None` means unbounded.
    #[serde(default)]
    pub num_occurrences: Option<u32>,
    /// Inclusive last date an occurrence may fall on.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Days before the due date a reminder becomes relevant.
    #[serde(default = "default_remind_before_days")]
    pub remind_before_days: u32,
    /// Stored lifecycle status.
    #[serde(default)]
    pub status: ExpenseStatus,
}

fn default_remind_before_days() -> u32 {
    DEFAULT_REMIND_BEFORE_DAYS
}

impl ExpenseDefinition {
    /// Starts building a definition with its required fields.
    #[must_use]
    pub fn builder(
        name: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
    ) -> ExpenseBuilder {
        ExpenseBuilder::new(name, amount, category)
    }

    /// The date used for every status, aggregation and export decision:
    /// the due date when present, else the record date.
    #[must_use]
    pub fn effective_date(&self) -> Option<NaiveDate> {
        self.due_date.or(self.date)
    }

    /// Returns true if the effective date falls in `year`.
    #[must_use]
    pub fn falls_in_year(&self, year: i32) -> bool {
        self.effective_date().is_some_and(|d| d.year() == year)
    }

    /// Returns true if the effective date falls in `year`/`month` (1-12).
    #[must_use]
    pub fn falls_in_month(&self, year: i32, month: u32) -> bool {
        self.effective_date()
            .is_some_and(|d| d.year() == year && d.month() == month)
    }

    /// Checks the invariants the builder enforces.
    ///
    /// # Errors
    ///
    /// Returns the first `ExpenseError` found.
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseError::EmptyName);
        }
        if self.category.trim().is_empty() {
            return Err(ExpenseError::EmptyCategory);
        }
        if self.num_occurrences == Some(0) {
            return Err(ExpenseError::ZeroOccurrences);
        }
        if self.effective_date().is_none() {
            return Err(ExpenseError::MissingDate);
        }
        Ok(())
    }
}

/// One dated instance derived from an expense definition.
///
/// `expense` carries every field of the parent; only its due date differs
/// for generated instances. `expense.id` remains the parent id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    /// Structured identity: parent id plus generation index.
    pub occurrence_id: OccurrenceId,
    /// The instance's field values.
    #[serde(flatten)]
    pub expense: ExpenseDefinition,
}

impl Occurrence {
    /// Wraps a definition as the first occurrence of its own series.
    #[must_use]
    pub fn first(expense: ExpenseDefinition) -> Self {
        Self {
            occurrence_id: OccurrenceId::new(expense.id, 0),
            expense,
        }
    }

    /// Effective date of this instance.
    #[must_use]
    pub fn effective_date(&self) -> Option<NaiveDate> {
        self.expense.effective_date()
    }

    /// Amount of this instance.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.expense.amount
    }

    /// Category of this instance.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.expense.category
    }

    /// Status currently stored on this instance.
    #[must_use]
    pub fn status(&self) -> ExpenseStatus {
        self.expense.status
    }

    /// Identifier written to exports.
    ///
    /// The first occurrence is the stored row itself, so it keeps the plain
    /// row id; generated instances use `parent-index`.
    #[must_use]
    pub fn record_id(&self) -> String {
        if self.occurrence_id.is_first() {
            self.occurrence_id.parent.to_string()
        } else {
            self.occurrence_id.to_string()
        }
    }

    /// Converts this instance into a standalone, non-recurring definition
    /// ready to be inserted as its own row.
    #[must_use]
    pub fn into_standalone(self) -> ExpenseDefinition {
        let effective = self.expense.effective_date();
        ExpenseDefinition {
            id: ExpenseId::UNASSIGNED,
            due_date: effective,
            recurring: false,
            num_occurrences: None,
            end_date: None,
            ..self.expense
        }
    }
}

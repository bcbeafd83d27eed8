//! Storage row shape and its conversion to and from definitions.
//!
//! Rows mirror the `expenses` table: dates as ISO text, the recurring flag
//! as `0`/`1`, optional columns as nulls. Decoding never fails; bad dates
//! are substituted or dropped with a warning.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendwise_shared::types::ExpenseId;
use tracing::warn;

use chrono::NaiveDate;

use crate::expense::{
    DEFAULT_REMIND_BEFORE_DAYS, ExpenseDefinition, ExpenseStatus, parse_date_or, parse_optional_date,
};

/// One persisted expense row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRow {
    /// Row id.
    pub id: i64,
    /// Name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Amount.
    pub amount: Decimal,
    /// Category.
    pub category: String,
    /// Record date, ISO text.
    pub date: String,
    /// Due date, ISO text.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Recurring flag, `0` or `1`.
    #[serde(default)]
    pub recurring: i64,
    /// Status text.
    #[serde(default)]
    pub status: Option<String>,
    /// Reminder lead time.
    #[serde(default)]
    pub remind_before_days: Option<i64>,
    /// Occurrence count bound.
    #[serde(default)]
    pub num_occurrences: Option<i64>,
    /// Series end date, ISO text.
    #[serde(default)]
    pub end_date: Option<String>,
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

impl ExpenseRow {
    /// Encodes a definition for storage.
    #[must_use]
    pub fn from_definition(expense: &ExpenseDefinition) -> Self {
        Self {
            id: expense.id.into_inner(),
            name: expense.name.clone(),
            description: Some(expense.description.clone()),
            amount: expense.amount,
            category: expense.category.clone(),
            date: expense.date.or(expense.due_date).map(iso).unwrap_or_default(),
            due_date: expense.due_date.map(iso),
            recurring: i64::from(expense.recurring),
            status: Some(expense.status.as_str().to_string()),
            remind_before_days: Some(i64::from(expense.remind_before_days)),
            num_occurrences: expense.num_occurrences.map(i64::from),
            end_date: expense.end_date.map(iso),
        }
    }

    /// Decodes a row, substituting `today` for an unparseable record date.
    #[must_use]
    pub fn into_definition(self, today: NaiveDate) -> ExpenseDefinition {
        let status = match self.status.as_deref().map(str::parse::<ExpenseStatus>) {
            None => ExpenseStatus::default(),
            Some(Ok(status)) => status,
            Some(Err(err)) => {
                warn!(id = self.id, error = %err, "unknown status, using unpaid");
                ExpenseStatus::default()
            }
        };

        ExpenseDefinition {
            id: ExpenseId::new(self.id),
            name: self.name,
            description: self.description.unwrap_or_default(),
            amount: self.amount,
            category: self.category,
            date: Some(parse_date_or(&self.date, today)),
            due_date: parse_optional_date(self.due_date.as_deref()),
            recurring: self.recurring != 0,
            num_occurrences: self
                .num_occurrences
                .and_then(|n| u32::try_from(n).ok())
                .filter(|n| *n > 0),
            end_date: parse_optional_date(self.end_date.as_deref()),
            remind_before_days: self
                .remind_before_days
                .and_then(|d| u32::try_from(d).ok())
                .unwrap_or(DEFAULT_REMIND_BEFORE_DAYS),
            status,
        }
    }
}

//! CSV serialization of occurrence records.
//!
//! Output is an unquoted header, then every data
//! field wrapped in double quotes with embedded quotes doubled, rows joined
//! by `\n` with no trailing line break.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::ExportError;
use super::scope::ExportScope;
use crate::expense::Occurrence;

/// An exported column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    /// Record id.
    Id,
    /// Name.
    Name,
    /// Description.
    Description,
    /// Amount.
    Amount,
    /// Category.
    Category,
    /// Record date.
    Date,
    /// Due date.
    DueDate,
    /// Recurring flag as `0`/`1`.
    Recurring,
    /// Stored status.
    Status,
    /// Reminder lead time.
    RemindBeforeDays,
    /// Occurrence count bound.
    NumOccurrences,
    /// Series end date.
    EndDate,
}

impl Column {
    /// Every column in export order.
    pub const ALL: [Self; 12] = [
        Self::Id,
        Self::Name,
        Self::Description,
        Self::Amount,
        Self::Category,
        Self::Date,
        Self::DueDate,
        Self::Recurring,
        Self::Status,
        Self::RemindBeforeDays,
        Self::NumOccurrences,
        Self::EndDate,
    ];

    /// Header name, matching the storage column name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Description => "description",
            Self::Amount => "amount",
            Self::Category => "category",
            Self::Date => "date",
            Self::DueDate => "dueDate",
            Self::Recurring => "recurring",
            Self::Status => "status",
            Self::RemindBeforeDays => "remindBeforeDays",
            Self::NumOccurrences => "numOccurrences",
            Self::EndDate => "endDate",
        }
    }

    /// String form of this column's value; absent values are empty.
    #[must_use]
    pub fn value(self, occurrence: &Occurrence) -> String {
        let expense = &occurrence.expense;
        match self {
            Self::Id => occurrence.record_id(),
            Self::Name => expense.name.clone(),
            Self::Description => expense.description.clone(),
            Self::Amount => expense.amount.to_string(),
            Self::Category => expense.category.clone(),
            Self::Date => iso(expense.date),
            Self::DueDate => iso(expense.due_date),
            Self::Recurring => String::from(if expense.recurring { "1" } else { "0" }),
            Self::Status => expense.status.as_str().to_string(),
            Self::RemindBeforeDays => expense.remind_before_days.to_string(),
            Self::NumOccurrences => expense
                .num_occurrences
                .map(|n| n.to_string())
                .unwrap_or_default(),
            Self::EndDate => iso(expense.end_date),
        }
    }
}

fn iso(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// A rendered export ready to be written by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Suggested file name.
    pub file_name: String,
    /// CSV document.
    pub contents: String,
    /// Number of data rows.
    pub rows: usize,
}

/// Serializes occurrences to CSV.
pub struct CsvExporter;

impl CsvExporter {
    /// Serializes `occurrences` with the given column order.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Csv` if the writer fails.
    pub fn serialize(occurrences: &[Occurrence], columns: &[Column]) -> Result<String, ExportError> {
        let header = columns
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(",");

        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .has_headers(false)
            .from_writer(Vec::new());
        for occurrence in occurrences {
            writer.write_record(columns.iter().map(|c| c.value(occurrence)))?;
        }
        let body = writer
            .into_inner()
            .map_err(|err| ExportError::Csv(err.into_error().into()))?;
        let body = String::from_utf8(body).map_err(|_| ExportError::Encoding)?;

        let mut document = header;
        if !body.is_empty() {
            document.push('\n');
            document.push_str(body.strip_suffix('\n').unwrap_or(&body));
        }
        Ok(document)
    }

    /// Serializes with the fixed column order [`Column::ALL`].
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Csv` if the writer fails.
    pub fn serialize_all(occurrences: &[Occurrence]) -> Result<String, ExportError> {
        Self::serialize(occurrences, &Column::ALL)
    }

    /// Selects `scope` from `occurrences` and renders it with every column.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Csv` if the writer fails.
    pub fn export(
        occurrences: &[Occurrence],
        scope: ExportScope,
        today: NaiveDate,
    ) -> Result<ExportFile, ExportError> {
        let selected = scope.select(occurrences);
        let contents = Self::serialize_all(&selected)?;
        let file_name = scope.file_name(today);
        info!(file = %file_name, rows = selected.len(), "rendered export");
        Ok(ExportFile {
            file_name,
            contents,
            rows: selected.len(),
        })
    }
}

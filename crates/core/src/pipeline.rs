//! Expand-then-resolve stage shared by every view.

use chrono::NaiveDate;
use spendwise_shared::config::EngineConfig;

use crate::expense::ExpenseDefinition;
use crate::recurrence::{BatchExpansion, ExpansionLimits, RecurrenceExpander};
use crate::status::StatusResolver;

/// Turns stored definitions into status-annotated occurrences.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpensePipeline {
    expander: RecurrenceExpander,
}

impl ExpensePipeline {
    /// Creates a pipeline around `expander`.
    #[must_use]
    pub const fn new(expander: RecurrenceExpander) -> Self {
        Self { expander }
    }

    /// Creates a pipeline using the configured occurrence cap.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(RecurrenceExpander::new(ExpansionLimits::from(config)))
    }

    /// Expands every definition and resolves each occurrence's status as of
    /// `reference_date`. Definitions that fail to expand are reported in
    /// `failures` and left out.
    #[must_use]
    pub fn run(&self, definitions: &[ExpenseDefinition], reference_date: NaiveDate) -> BatchExpansion {
        let batch = self.expander.expand_all(definitions);
        BatchExpansion {
            occurrences: StatusResolver::annotate(&batch.occurrences, reference_date),
            failures: batch.failures,
        }
    }
}

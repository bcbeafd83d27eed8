//! Expansion of recurring expenses into dated occurrences.

use chrono::{Months, NaiveDate};
use spendwise_shared::config::EngineConfig;
use spendwise_shared::types::{ExpenseId, OccurrenceId};
use tracing::{debug, warn};

use super::error::RecurrenceError;
use crate::expense::{ExpenseDefinition, Occurrence};

/// Occurrences generated for a recurring expense with neither a count nor an
/// end date.
///
/// Pending product confirmation; override through `engine.occurrence_cap`.
pub const DEFAULT_OCCURRENCE_CAP: u32 = 12;

/// Bounds applied while expanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionLimits {
    /// Maximum series length when the definition itself is unbounded.
    pub occurrence_cap: u32,
}

impl Default for ExpansionLimits {
    fn default() -> Self {
        Self {
            occurrence_cap: DEFAULT_OCCURRENCE_CAP,
        }
    }
}

impl From<&EngineConfig> for ExpansionLimits {
    fn from(config: &EngineConfig) -> Self {
        Self {
            occurrence_cap: config.occurrence_cap,
        }
    }
}

/// Result of expanding many definitions at once.
#[derive(Debug, Clone, Default)]
pub struct BatchExpansion {
    /// Occurrences of every definition that expanded, in input order.
    pub occurrences: Vec<Occurrence>,
    /// Definitions that were skipped, with the reason.
    pub failures: Vec<(ExpenseId, RecurrenceError)>,
}

impl BatchExpansion {
    /// Returns true if every definition expanded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Turns expense definitions into their occurrence series.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecurrenceExpander {
    limits: ExpansionLimits,
}

impl RecurrenceExpander {
    /// Creates an expander with the given limits.
    #[must_use]
    pub const fn new(limits: ExpansionLimits) -> Self {
        Self { limits }
    }

    /// Returns the limits in use.
    #[must_use]
    pub const fn limits(&self) -> ExpansionLimits {
        self.limits
    }

    /// Expands one definition into its ordered occurrences.
    ///
    /// A non-recurring definition yields exactly one occurrence equal to it.
    /// A recurring one yields occurrence 0 at its effective date, then one per
    /// calendar month after it, clamped to month end (Jan 31 -> Feb 29 -> Mar 31).
    /// Generation stops before the first date past `end_date`, at
    /// `num_occurrences`, or at the occurrence cap when neither is set.
    ///
    /// # Errors
    ///
    /// Returns `RecurrenceError::MissingEffectiveDate` for a recurring
    /// definition without any date.
    pub fn expand(&self, definition: &ExpenseDefinition) -> Result<Vec<Occurrence>, RecurrenceError> {
        if !definition.recurring {
            return Ok(vec![Occurrence::first(definition.clone())]);
        }

        let start = definition
            .effective_date()
            .ok_or(RecurrenceError::MissingEffectiveDate { id: definition.id })?;

        let limit = self.series_limit(definition);
        let mut occurrences = Vec::with_capacity(limit.unwrap_or(1).min(64) as usize);
        occurrences.push(Occurrence::first(definition.clone()));

        let mut index: u32 = 1;
        while let Some(candidate) = Self::nth_month(start, index) {
            if definition.end_date.is_some_and(|end| candidate > end) {
                break;
            }
            if limit.is_some_and(|limit| index >= limit) {
                break;
            }

            occurrences.push(Occurrence {
                occurrence_id: OccurrenceId::new(definition.id, index),
                expense: ExpenseDefinition {
                    due_date: Some(candidate),
                    ..definition.clone()
                },
            });
            index += 1;
        }

        debug!(
            expense_id = %definition.id,
            count = occurrences.len(),
            "expanded recurring expense"
        );
        Ok(occurrences)
    }

    /// Expands every definition, skipping the ones that fail.
    ///
    /// Failures are logged and returned alongside the successful occurrences
    /// so one bad record never aborts the batch.
    #[must_use]
    pub fn expand_all(&self, definitions: &[ExpenseDefinition]) -> BatchExpansion {
        let mut batch = BatchExpansion::default();
        for definition in definitions {
            match self.expand(definition) {
                Ok(occurrences) => batch.occurrences.extend(occurrences),
                Err(err) => {
                    warn!(expense_id = %definition.id, error = %err, "skipping expense");
                    batch.failures.push((definition.id, err));
                }
            }
        }
        batch
    }

    /// Count bound for a recurring definition, `None` when only the end date bounds it.
    fn series_limit(&self, definition: &ExpenseDefinition) -> Option<u32> {
        match (definition.num_occurrences, definition.end_date) {
            (Some(count), _) => Some(count),
            (None, Some(_)) => None,
            (None, None) => Some(self.limits.occurrence_cap),
        }
    }

    /// `start` advanced by `months` calendar months, `None` past chrono's range.
    fn nth_month(start: NaiveDate, months: u32) -> Option<NaiveDate> {
        start.checked_add_months(Months::new(months))
    }
}

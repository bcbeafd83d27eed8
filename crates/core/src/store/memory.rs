//! In-memory expense store.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use spendwise_shared::types::ExpenseId;
use tracing::debug;

use super::error::StoreError;
use super::row::ExpenseRow;
use super::ExpenseStore;
use crate::expense::ExpenseDefinition;

/// Store backed by an ordered map. Ids are assigned from 1 upwards and
/// never reused.
#[derive(Debug, Clone)]
pub struct InMemoryExpenseStore {
    records: BTreeMap<ExpenseId, ExpenseDefinition>,
    next_id: i64,
}

impl Default for InMemoryExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryExpenseStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Loads a store from persisted rows, keeping their ids.
    #[must_use]
    pub fn from_rows(rows: Vec<ExpenseRow>, today: NaiveDate) -> Self {
        let mut store = Self::new();
        for row in rows {
            let expense = row.into_definition(today);
            store.next_id = store.next_id.max(expense.id.into_inner() + 1);
            store.records.insert(expense.id, expense);
        }
        store
    }

    /// Snapshot of every record as storage rows, ordered by id.
    #[must_use]
    pub fn to_rows(&self) -> Vec<ExpenseRow> {
        self.records.values().map(ExpenseRow::from_definition).collect()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn retain_outside(&mut self, matches: impl Fn(&ExpenseDefinition) -> bool) -> usize {
        let before = self.records.len();
        self.records.retain(|_, expense| !matches(expense));
        before - self.records.len()
    }
}

impl ExpenseStore for InMemoryExpenseStore {
    fn list_all(&self) -> Result<Vec<ExpenseDefinition>, StoreError> {
        Ok(self.records.values().cloned().collect())
    }

    fn list_by_month(&self, year: i32, month: u32) -> Result<Vec<ExpenseDefinition>, StoreError> {
        Ok(self
            .records
            .values()
            .filter(|e| e.falls_in_month(year, month))
            .cloned()
            .collect())
    }

    fn insert(&mut self, mut expense: ExpenseDefinition) -> Result<ExpenseId, StoreError> {
        expense.validate()?;
        let id = ExpenseId::new(self.next_id);
        self.next_id += 1;
        expense.id = id;
        debug!(%id, name = %expense.name, "inserted expense");
        self.records.insert(id, expense);
        Ok(id)
    }

    fn update(&mut self, id: ExpenseId, mut expense: ExpenseDefinition) -> Result<(), StoreError> {
        expense.validate()?;
        let slot = self.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        expense.id = id;
        *slot = expense;
        Ok(())
    }

    fn delete(&mut self, id: ExpenseId) -> Result<(), StoreError> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    fn delete_by_month(&mut self, year: i32, month: u32) -> Result<usize, StoreError> {
        Ok(self.retain_outside(|e| e.falls_in_month(year, month)))
    }

    fn delete_by_year(&mut self, year: i32) -> Result<usize, StoreError> {
        Ok(self.retain_outside(|e| e.falls_in_year(year)))
    }
}

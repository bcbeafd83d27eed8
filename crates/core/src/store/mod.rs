//! Expense storage contract.
//!
//! Core logic only reads definitions through [`ExpenseStore`]; concrete
//! backends live behind it. [`InMemoryExpenseStore`] is the reference
//! implementation and [`ExpenseRow`] is the on-disk row shape.

pub mod error;
pub mod memory;
pub mod row;

pub use error::StoreError;
pub use memory::InMemoryExpenseStore;
pub use row::ExpenseRow;

use spendwise_shared::types::ExpenseId;
use tracing::info;

use crate::expense::{ExpenseDefinition, Occurrence};

/// Persistent collection of expense definitions.
pub trait ExpenseStore {
    /// Every stored definition.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the store cannot be read.
    fn list_all(&self) -> Result<Vec<ExpenseDefinition>, StoreError>;

    /// Definitions whose effective date falls in `year`/`month`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the store cannot be read.
    fn list_by_month(&self, year: i32, month: u32) -> Result<Vec<ExpenseDefinition>, StoreError>;

    /// Stores a new definition and returns its assigned id. Any id already
    /// on `expense` is ignored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Invalid` for a definition that fails validation.
    fn insert(&mut self, expense: ExpenseDefinition) -> Result<ExpenseId, StoreError>;

    /// Replaces the definition stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id.
    fn update(&mut self, id: ExpenseId, expense: ExpenseDefinition) -> Result<(), StoreError>;

    /// Removes the definition stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id.
    fn delete(&mut self, id: ExpenseId) -> Result<(), StoreError>;

    /// Removes every definition in `year`/`month`, returning how many went.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` on storage failure.
    fn delete_by_month(&mut self, year: i32, month: u32) -> Result<usize, StoreError>;

    /// Removes every definition in `year`, returning how many went.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` on storage failure.
    fn delete_by_year(&mut self, year: i32) -> Result<usize, StoreError>;
}

/// Writes each occurrence back as its own non-recurring row.
///
/// Returns the new ids in input order.
///
/// # Errors
///
/// Stops at the first failed insert; rows inserted before it remain.
pub fn persist_occurrences<S: ExpenseStore + ?Sized>(
    store: &mut S,
    occurrences: &[Occurrence],
) -> Result<Vec<ExpenseId>, StoreError> {
    let ids = occurrences
        .iter()
        .map(|occurrence| store.insert(occurrence.clone().into_standalone()))
        .collect::<Result<Vec<_>, _>>()?;
    info!(count = ids.len(), "persisted occurrences");
    Ok(ids)
}

//! Core expense logic for Spendwise.
//!
//! This crate contains pure business logic with no file, terminal or network
//! access. Storage is reached only through the [`store::ExpenseStore`] trait.
//!
//! # Modules
//!
//! - `expense` - Expense definitions, occurrences and date parsing
//! - `recurrence` - Monthly recurrence expansion
//! - `status` - Paid/unpaid/overdue resolution and reminder windows
//! - `reports` - Yearly, monthly and category aggregation
//! - `export` - CSV export and export scopes
//! - `store` - Storage contract and in-memory store
//! - `pipeline` - Expansion followed by status resolution

pub mod expense;
pub mod export;
pub mod pipeline;
pub mod recurrence;
pub mod reports;
pub mod status;
pub mod store;

pub use expense::{ExpenseDefinition, ExpenseError, ExpenseStatus, Occurrence};
pub use pipeline::ExpensePipeline;

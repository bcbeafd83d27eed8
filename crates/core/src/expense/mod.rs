//! Expense definitions and their dated occurrences.

pub mod builder;
pub mod date;
pub mod error;
pub mod types;

pub use builder::ExpenseBuilder;
pub use date::{parse_date, parse_date_or, parse_optional_date};
pub use error::ExpenseError;
pub use types::{DEFAULT_REMIND_BEFORE_DAYS, ExpenseDefinition, ExpenseStatus, Occurrence};

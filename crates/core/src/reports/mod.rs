//! Expense report aggregation.
//!
//! This module provides pure reducers behind the reporting views:
//! - Yearly overview (monthly series per category)
//! - Month and category breakdowns
//! - Yearly trend lines with highest, lowest and average year

pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::AggregationEngine;
pub use types::*;

//! CSV export of occurrence records.

pub mod error;
pub mod scope;
pub mod writer;

pub use error::ExportError;
pub use scope::ExportScope;
pub use writer::{Column, CsvExporter, ExportFile};

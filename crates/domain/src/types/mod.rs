//! Domain types and models

pub mod registration;
pub mod spreadsheet;

// Re-export for convenience
pub use registration::{RegistrationSubmission, RowStamp, RowStamping, SheetRow};
pub use spreadsheet::{NamedRange, SpreadsheetMetadata, TabInfo, TabPolicy};

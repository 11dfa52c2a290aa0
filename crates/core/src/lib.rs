//! # EventReg Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the spreadsheet backend and the clock
//! - Tab provisioning, row append and title lookup
//! - The registration use-case
//!
//! ## Architecture Principles
//! - Only depends on `eventreg-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits

pub mod provisioning;
pub mod registration;
pub mod sheets;

// Re-export specific items to avoid ambiguity
pub use provisioning::{ProvisionOutcome, TabProvisioner};
pub use registration::{Clock, RegistrationReceipt, RegistrationService};
pub use sheets::{RowAppender, SpreadsheetGateway, TitleService};

//! # EventReg Domain
//!
//! Business domain types for the event registration service.
//!
//! This crate contains:
//! - Registration submissions, sheet rows and row stamps
//! - Spreadsheet metadata snapshots and the tab creation policy
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other EventReg crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;

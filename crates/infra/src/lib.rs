//! # EventReg Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client implementation
//! - Google Sheets integration (service-account auth, REST client)
//! - Configuration loading from the environment and files
//! - System clock and log subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `eventreg-core`
//! - Depends on `eventreg-domain` and `eventreg-core`
//! - Contains all "impure" code (I/O, network, process environment)

pub mod clock;
pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod observability;

// Re-export commonly used items
pub use clock::SystemClock;
pub use errors::InfraError;
pub use http::*;
pub use integrations::google::{
    AccessTokenProvider, GoogleSheetsClient, ServiceAccountTokenProvider,
};
pub use observability::init_logging;

//! Google Sheets integration
//!
//! - [`auth`]: service-account token minting and caching
//! - [`sheets`]: the [`SpreadsheetGateway`](eventreg_core::SpreadsheetGateway)
//!   implementation
//! - [`types`]: REST wire types

pub mod auth;
pub mod sheets;
pub mod types;

pub use auth::{AccessTokenProvider, ServiceAccountTokenProvider};
pub use sheets::GoogleSheetsClient;

//! # EventReg API
//!
//! HTTP surface of the event registration service.
//!
//! - `GET /` serves the registration form
//! - `GET /api/form` returns the spreadsheet title
//! - `POST /api/register` records one attendee
//! - `GET /health` reports liveness and version

pub mod context;
pub mod routes;
pub mod utils;

pub use context::AppContext;
pub use routes::create_router;

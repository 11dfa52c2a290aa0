//! Shared helpers for route handlers

pub mod logging;

//! Shared test helpers for `eventreg-core` integration tests.
//!
//! Provides an in-memory spreadsheet and a fixed clock so service tests can
//! focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod spreadsheet;

use chrono::{DateTime, TimeZone, Utc};
use eventreg_core::Clock;

pub use spreadsheet::{InMemorySpreadsheet, Operation};

/// Clock frozen at one instant.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// 16 October 2026, 14:05 UTC.
    pub fn afternoon() -> Self {
        Self(Utc.with_ymd_and_hms(2026, 10, 16, 14, 5, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

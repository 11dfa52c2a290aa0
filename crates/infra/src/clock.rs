//! Wall-clock implementation of the core `Clock` port

use chrono::{DateTime, Utc};
use eventreg_core::Clock;

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

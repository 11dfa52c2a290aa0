//! Port interfaces for registration

use chrono::{DateTime, Utc};

/// Source of the current instant for server-stamped registrations.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

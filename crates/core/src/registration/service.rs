//! Registration service - core business logic
//!
//! Per request: validate → stamp → ensure the day's tab → append the row.
//! Any step may fail; nothing is rolled back and nothing is retried.

use std::sync::Arc;

use chrono_tz::Tz;
use eventreg_domain::{RegistrationSubmission, Result, RowStamp, RowStamping, SheetRow};
use tracing::{debug, info};

use super::ports::Clock;
use super::validation::{validate, ValidatedRegistration};
use crate::provisioning::{ProvisionOutcome, TabProvisioner};
use crate::sheets::RowAppender;

/// Result of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub tab_name: String,
    pub row: SheetRow,
    pub provision: ProvisionOutcome,
}

/// Registration use-case
pub struct RegistrationService {
    provisioner: Arc<TabProvisioner>,
    appender: RowAppender,
    clock: Arc<dyn Clock>,
    stamping: RowStamping,
    timezone: Tz,
}

impl RegistrationService {
    /// Create a server-stamped service using UTC.
    pub fn new(provisioner: Arc<TabProvisioner>, appender: RowAppender, clock: Arc<dyn Clock>) -> Self {
        Self {
            provisioner,
            appender,
            clock,
            stamping: RowStamping::Server,
            timezone: chrono_tz::UTC,
        }
    }

    #[must_use]
    pub fn with_stamping(mut self, stamping: RowStamping) -> Self {
        self.stamping = stamping;
        self
    }

    /// Zone used to format server-side timestamps and day tab names.
    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Validate a submission and append it to its day's tab.
    ///
    /// # Errors
    /// - `EventRegError::Validation` for a missing or blank required field
    /// - configuration and remote errors from provisioning or append
    pub async fn register(&self, submission: RegistrationSubmission) -> Result<RegistrationReceipt> {
        let ValidatedRegistration { first_name, last_name, email, phone, heard_from, client_stamp } =
            validate(submission, self.stamping)?;

        let RowStamp { timestamp, tab_name } =
            client_stamp.unwrap_or_else(|| RowStamp::at(self.clock.now(), self.timezone));
        debug!(tab = %tab_name, stamping = %self.stamping, "registration validated");

        let row = SheetRow::new(timestamp, first_name, last_name, email, phone, heard_from);

        let provision = self.provisioner.ensure_tab(&tab_name).await?;
        self.appender.append(&tab_name, &row).await?;

        info!(tab = %tab_name, ?provision, "registration recorded");
        Ok(RegistrationReceipt { tab_name, row, provision })
    }
}

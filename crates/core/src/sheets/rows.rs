//! Row append

use std::sync::Arc;

use eventreg_domain::{Result, SheetRow};
use tracing::{debug, error};

use super::ports::SpreadsheetGateway;

/// Appends registration rows to an existing tab.
///
/// Callers must ensure the tab exists first (see
/// [`TabProvisioner`](crate::provisioning::TabProvisioner)).
#[derive(Clone)]
pub struct RowAppender {
    gateway: Arc<dyn SpreadsheetGateway>,
}

impl RowAppender {
    pub fn new(gateway: Arc<dyn SpreadsheetGateway>) -> Self {
        Self { gateway }
    }

    /// Append `row` at the first free row of `tab`.
    pub async fn append(&self, tab: &str, row: &SheetRow) -> Result<()> {
        match self.gateway.append_row(tab, row).await {
            Ok(()) => {
                debug!(tab, "row appended");
                Ok(())
            }
            Err(err) => {
                error!(tab, error = %err, "failed to append row");
                Err(err)
            }
        }
    }
}

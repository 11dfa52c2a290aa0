//! Tab provisioning service
//!
//! `ensure_tab` is check-then-create: it reads the tab list and creates the
//! tab only when it is missing. Two callers racing on the same missing tab
//! can both observe "absent". Within one process the race is closed by an
//! optional per-name lock; across processes it is left to the spreadsheet
//! backend, which rejects the second creation.

use std::sync::Arc;

use dashmap::DashMap;
use eventreg_domain::{EventRegError, Result, SpreadsheetMetadata, TabPolicy};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::sheets::SpreadsheetGateway;

/// What `ensure_tab` had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// The tab was already there.
    AlreadyExists,
    /// A blank tab was added.
    Created { tab_id: i64 },
    /// The template was copied and `renamed_ranges` tables were renamed.
    Duplicated { tab_id: i64, renamed_ranges: usize },
}

/// Creates missing tabs according to a [`TabPolicy`].
pub struct TabProvisioner {
    gateway: Arc<dyn SpreadsheetGateway>,
    policy: TabPolicy,
    locks: Option<DashMap<String, Arc<Mutex<()>>>>,
}

impl TabProvisioner {
    /// Create a provisioner without in-process serialization.
    pub fn new(gateway: Arc<dyn SpreadsheetGateway>, policy: TabPolicy) -> Self {
        Self { gateway, policy, locks: None }
    }

    /// Serialize `ensure_tab` calls for the same tab name.
    ///
    /// Calls for different names still run concurrently.
    #[must_use]
    pub fn with_serialized_creation(mut self, enabled: bool) -> Self {
        self.locks = enabled.then(DashMap::new);
        self
    }

    /// Ensure a tab named `tab_name` exists, creating it if absent.
    ///
    /// # Errors
    /// - `EventRegError::Config` when the policy duplicates a template that
    ///   the spreadsheet does not contain
    /// - any error from the gateway, unchanged
    pub async fn ensure_tab(&self, tab_name: &str) -> Result<ProvisionOutcome> {
        let Some(locks) = &self.locks else {
            return self.check_then_create(tab_name).await;
        };

        let lock = locks.entry(tab_name.to_string()).or_default().clone();
        let outcome = {
            let _guard = lock.lock().await;
            self.check_then_create(tab_name).await
        };

        drop(lock);
        locks.remove_if(tab_name, |_, lock| Arc::strong_count(lock) == 1);

        outcome
    }

    async fn check_then_create(&self, tab_name: &str) -> Result<ProvisionOutcome> {
        let metadata = self.gateway.fetch_metadata().await?;
        if metadata.has_tab(tab_name) {
            debug!(tab = tab_name, "tab already exists");
            return Ok(ProvisionOutcome::AlreadyExists);
        }

        match &self.policy {
            TabPolicy::CreateBlank => {
                let tab_id = self.gateway.add_tab(tab_name).await?;
                info!(tab = tab_name, tab_id, "created blank tab");
                Ok(ProvisionOutcome::Created { tab_id })
            }
            TabPolicy::DuplicateTemplate { template_name, rename_to } => {
                self.duplicate_template(&metadata, tab_name, template_name, rename_to).await
            }
        }
    }

    async fn duplicate_template(
        &self,
        metadata: &SpreadsheetMetadata,
        tab_name: &str,
        template_name: &str,
        rename_to: &str,
    ) -> Result<ProvisionOutcome> {
        let Some(template) = metadata.find_tab(template_name) else {
            error!(tab = tab_name, template = template_name, "template tab is missing");
            return Err(EventRegError::Config(format!(
                "template tab \"{template_name}\" not found in spreadsheet"
            )));
        };

        let tab_id = self.gateway.duplicate_tab(template.id, tab_name).await?;
        info!(tab = tab_name, tab_id, template = template_name, "duplicated template tab");

        // The copy's named ranges get generated names; look them up by tab id.
        let refreshed = self.gateway.fetch_metadata().await?;
        let range_ids: Vec<String> =
            refreshed.named_ranges_on(tab_id).map(|range| range.id.clone()).collect();

        if range_ids.is_empty() {
            warn!(tab = tab_name, tab_id, "duplicated tab has no named ranges to rename");
        } else if let Err(err) = self.gateway.rename_named_ranges(&range_ids, rename_to).await {
            error!(
                tab = tab_name,
                tab_id,
                error = %err,
                "tab duplicated but its named ranges were not renamed"
            );
            return Err(err);
        } else {
            info!(tab = tab_name, count = range_ids.len(), name = rename_to, "renamed named ranges");
        }

        Ok(ProvisionOutcome::Duplicated { tab_id, renamed_ranges: range_ids.len() })
    }
}

//! Application context - dependency injection container

use std::sync::Arc;

use eventreg_core::{
    Clock, RegistrationService, RowAppender, SpreadsheetGateway, TabProvisioner, TitleService,
};
use eventreg_domain::{Config, Result};
use eventreg_infra::{GoogleSheetsClient, SystemClock};
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub registration: RegistrationService,
    pub titles: TitleService,
}

impl AppContext {
    /// Wire the services against the Google Sheets API.
    ///
    /// # Errors
    /// `EventRegError::Config` when the service-account key cannot be parsed.
    pub fn new(config: Config) -> Result<Self> {
        let gateway: Arc<dyn SpreadsheetGateway> = Arc::new(GoogleSheetsClient::new(&config.sheets)?);
        Ok(Self::with_gateway(config, gateway, Arc::new(SystemClock)))
    }

    /// Wire the services against any gateway and clock.
    pub fn with_gateway(
        config: Config,
        gateway: Arc<dyn SpreadsheetGateway>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let settings = &config.registration;

        let provisioner = Arc::new(
            TabProvisioner::new(gateway.clone(), settings.tab_policy.clone())
                .with_serialized_creation(settings.serialize_provisioning),
        );
        let registration =
            RegistrationService::new(provisioner, RowAppender::new(gateway.clone()), clock)
                .with_stamping(settings.row_stamping)
                .with_timezone(settings.timezone);
        let titles = TitleService::new(gateway);

        info!(
            spreadsheet_id = %config.sheets.spreadsheet_id,
            tab_policy = ?settings.tab_policy,
            row_stamping = %settings.row_stamping,
            timezone = %settings.timezone,
            serialize_provisioning = settings.serialize_provisioning,
            "application context ready"
        );

        Self { config, registration, titles }
    }
}

//! Configuration structures
//!
//! Built once at startup (see `eventreg_infra::config`) and shared read-only
//! for the lifetime of the process.

use std::fmt;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BIND_ADDR, GOOGLE_TOKEN_URI, SHEETS_API_BASE};
use crate::impl_config_choice_conversions;
use crate::types::{RowStamping, TabPolicy};

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub sheets: SheetsConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub registration: RegistrationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Spreadsheet identity and service-account credentials.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    pub service_account_email: String,
    /// PEM private key. May contain literal `\n` sequences when it comes
    /// from a single-line environment variable.
    pub private_key: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl SheetsConfig {
    /// Credentials against Google's production endpoints.
    #[must_use]
    pub fn new(
        spreadsheet_id: impl Into<String>,
        service_account_email: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            service_account_email: service_account_email.into(),
            private_key: private_key.into(),
            api_base: default_api_base(),
            token_uri: default_token_uri(),
        }
    }

    /// Private key with escaped newlines turned into real ones.
    #[must_use]
    pub fn normalized_private_key(&self) -> String {
        self.private_key.replace("\\n", "\n")
    }
}

impl fmt::Debug for SheetsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetsConfig")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("service_account_email", &self.service_account_email)
            .field("private_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

fn default_api_base() -> String {
    SHEETS_API_BASE.to_string()
}

fn default_token_uri() -> String {
    GOOGLE_TOKEN_URI.to_string()
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR.to_string() }
    }
}

/// Deployment-dependent registration behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    #[serde(default)]
    pub tab_policy: TabPolicy,
    #[serde(default)]
    pub row_stamping: RowStamping,
    /// Zone used for server-side timestamps and day tab names.
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
    /// Serialize tab creation per tab name within this process.
    #[serde(default = "default_true")]
    pub serialize_provisioning: bool,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            tab_policy: TabPolicy::default(),
            row_stamping: RowStamping::default(),
            timezone: default_timezone(),
            serialize_provisioning: true,
        }
    }
}

const fn default_timezone() -> Tz {
    chrono_tz::UTC
}

const fn default_true() -> bool {
    true
}

/// Log output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Log line encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl_config_choice_conversions!(LogFormat {
    Pretty => "pretty",
    Json => "json",
});

//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Loads a `.env` file into the process environment, if one exists
//! 2. Attempts to load from environment variables
//! 3. If a required variable is missing, falls back to a config file
//! 4. Probes multiple paths for config files
//! 5. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! Required (an empty value counts as missing):
//! - `GOOGLE_SHEET_ID`: Spreadsheet id
//! - `GOOGLE_SERVICE_ACCOUNT_EMAIL`: Service account client email
//! - `GOOGLE_SERVICE_ACCOUNT_PRIVATE_KEY`: PEM private key (`\n` escapes allowed)
//!
//! Optional:
//! - `EVENTREG_BIND_ADDR`: Listen address (default `0.0.0.0:3000`)
//! - `EVENTREG_TAB_POLICY`: `blank` or `template` (default `blank`)
//! - `EVENTREG_TEMPLATE_TAB`: Template tab for `template` (default `default`)
//! - `EVENTREG_TABLE_NAME`: Name given to copied tables (default `Attendees`)
//! - `EVENTREG_ROW_STAMPING`: `server` or `client` (default `server`)
//! - `EVENTREG_TIMEZONE`: IANA zone for server stamps (default `UTC`)
//! - `EVENTREG_SERIALIZE_PROVISIONING`: Per-tab creation lock (default `true`)
//! - `EVENTREG_SHEETS_API_BASE`: Sheets REST base URL
//! - `EVENTREG_TOKEN_URI`: OAuth token endpoint
//! - `EVENTREG_LOG_FORMAT`: `pretty` or `json` (default `pretty`)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./eventreg.json` or `./eventreg.toml` (current working directory)
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use eventreg_domain::constants::{DEFAULT_TABLE_NAME, DEFAULT_TEMPLATE_TAB};
use eventreg_domain::{
    Config, EventRegError, LogFormat, LoggingConfig, RegistrationConfig, Result, RowStamping,
    ServerConfig, SheetsConfig, TabPolicy,
};

/// Load configuration with automatic fallback strategy
///
/// Loads `.env` first, then attempts environment variables. If a required
/// variable is missing and a config file exists, the file is used instead.
///
/// # Errors
/// Returns `EventRegError::Config` if:
/// - A required variable is missing and no config file is found
/// - A value or the file format is invalid
pub fn load() -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Failed to read .env file"),
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(env_error) => match probe_config_paths() {
            Some(path) => {
                tracing::debug!(error = %env_error, "Environment incomplete, trying file");
                load_from_file(Some(path))
            }
            None => Err(env_error),
        },
    }
}

/// Load configuration from environment variables
///
/// All required environment variables must be present and non-empty.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `EventRegError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let mut sheets = SheetsConfig::new(
        env_var("GOOGLE_SHEET_ID")?,
        env_var("GOOGLE_SERVICE_ACCOUNT_EMAIL")?,
        env_var("GOOGLE_SERVICE_ACCOUNT_PRIVATE_KEY")?,
    );
    if let Some(api_base) = env_opt("EVENTREG_SHEETS_API_BASE") {
        sheets.api_base = api_base;
    }
    if let Some(token_uri) = env_opt("EVENTREG_TOKEN_URI") {
        sheets.token_uri = token_uri;
    }

    let server = ServerConfig {
        bind_addr: env_opt("EVENTREG_BIND_ADDR").unwrap_or_else(|| ServerConfig::default().bind_addr),
    };

    let row_stamping = match env_opt("EVENTREG_ROW_STAMPING") {
        Some(value) => value.parse::<RowStamping>().map_err(EventRegError::Config)?,
        None => RowStamping::default(),
    };

    let timezone = match env_opt("EVENTREG_TIMEZONE") {
        Some(value) => value
            .parse::<Tz>()
            .map_err(|e| EventRegError::Config(format!("Invalid timezone {value:?}: {e}")))?,
        None => chrono_tz::UTC,
    };

    let registration = RegistrationConfig {
        tab_policy: tab_policy_from_env()?,
        row_stamping,
        timezone,
        serialize_provisioning: env_bool("EVENTREG_SERIALIZE_PROVISIONING", true)?,
    };

    let logging = LoggingConfig {
        format: match env_opt("EVENTREG_LOG_FORMAT") {
            Some(value) => value.parse::<LogFormat>().map_err(EventRegError::Config)?,
            None => LogFormat::default(),
        },
    };

    Ok(Config { sheets, server, registration, logging })
}

fn tab_policy_from_env() -> Result<TabPolicy> {
    let kind = env_opt("EVENTREG_TAB_POLICY").unwrap_or_else(|| "blank".to_string());

    match kind.to_ascii_lowercase().as_str() {
        "blank" => Ok(TabPolicy::CreateBlank),
        "template" => Ok(TabPolicy::DuplicateTemplate {
            template_name: env_opt("EVENTREG_TEMPLATE_TAB")
                .unwrap_or_else(|| DEFAULT_TEMPLATE_TAB.to_string()),
            rename_to: env_opt("EVENTREG_TABLE_NAME")
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
        }),
        _ => Err(EventRegError::Config(format!(
            "Invalid EVENTREG_TAB_POLICY: {kind:?} (expected one of: blank, template)"
        ))),
    }
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `EventRegError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(EventRegError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            EventRegError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| EventRegError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    validate_required(&config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `EventRegError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| EventRegError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| EventRegError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(EventRegError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Reject blank credentials read from a file, matching the environment rule.
fn validate_required(config: &Config) -> Result<()> {
    let required = [
        ("sheets.spreadsheet_id", &config.sheets.spreadsheet_id),
        ("sheets.service_account_email", &config.sheets.service_account_email),
        ("sheets.private_key", &config.sheets.private_key),
    ];

    match required.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => {
            Err(EventRegError::Config(format!("Config field {field} is required but was empty")))
        }
        None => Ok(()),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./eventreg.{json,toml}`)
/// 2. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const FILE_NAMES: [&str; 4] = ["config.json", "config.toml", "eventreg.json", "eventreg.toml"];

    let mut candidates = Vec::new();

    // Try current working directory
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(FILE_NAMES.iter().map(|name| cwd.join(name)));
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(FILE_NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `EventRegError::Config` if the variable is unset or empty.
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        EventRegError::Config(format!(
            "Environment variable {key} is required but was not found."
        ))
    })
}

/// Get optional environment variable, treating an empty value as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Returns
/// The parsed boolean value, or `default` if not set.
///
/// # Errors
/// Returns `EventRegError::Config` for any other value.
fn env_bool(key: &str, default: bool) -> Result<bool> {
    let Some(value) = env_opt(key) else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(EventRegError::Config(format!(
            "Invalid {key}: {value:?} (expected one of: true, false, 1, 0, yes, no, on, off)"
        ))),
    }
}

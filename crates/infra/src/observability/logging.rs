//! Log subscriber initialization
//!
//! Verbosity comes from `RUST_LOG` (default `info`); the line encoding comes
//! from [`LogFormat`].

use eventreg_domain::{EventRegError, LogFormat, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "info";

/// Filter from `RUST_LOG`, falling back to `info` when unset or invalid.
pub fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber.
///
/// # Errors
/// `EventRegError::Internal` if a global subscriber is already set.
pub fn init_logging(format: LogFormat) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(build_filter()).with_target(true);

    let installed = match format {
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    installed.map_err(|e| EventRegError::Internal(format!("failed to install log subscriber: {e}")))
}

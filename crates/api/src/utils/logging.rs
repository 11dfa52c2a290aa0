use eventreg_domain::EventRegError;
use tracing::error;

/// Log a failed request with structured fields.
///
/// `route` should be a stable identifier such as `"register"`. The error
/// message goes to the log only; clients get a generic body.
#[inline]
pub fn log_route_failure(route: &str, error: &EventRegError) {
    error!(route, error_type = error.label(), error = %error, "request_failed");
}

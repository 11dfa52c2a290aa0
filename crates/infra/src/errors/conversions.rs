//! Conversions from external infrastructure errors into domain errors.

use eventreg_domain::EventRegError;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind as JwtErrorKind};
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub EventRegError);

impl From<InfraError> for EventRegError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<EventRegError> for InfraError {
    fn from(value: EventRegError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoEventRegError {
    fn into_eventreg(self) -> EventRegError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → EventRegError */
/* -------------------------------------------------------------------------- */

impl IntoEventRegError for HttpError {
    fn into_eventreg(self) -> EventRegError {
        if self.is_timeout() {
            return EventRegError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return EventRegError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            return status_error(status, None);
        }

        if self.is_decode() {
            return EventRegError::InvalidInput(format!("unexpected response body: {self}"));
        }

        EventRegError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_eventreg())
    }
}

/// Map a non-success HTTP status (plus the response body, when read) to a
/// domain error. 401 and 403 are credential problems; everything else is a
/// failed remote call.
pub fn status_error(status: reqwest::StatusCode, body: Option<&str>) -> EventRegError {
    let reason = status.canonical_reason().unwrap_or("unknown status");
    let message = match body.map(str::trim).filter(|body| !body.is_empty()) {
        Some(body) => format!("HTTP {} {reason}: {body}", status.as_u16()),
        None => format!("HTTP {} {reason}", status.as_u16()),
    };

    match status.as_u16() {
        401 | 403 => EventRegError::Auth(message),
        _ => EventRegError::Network(message),
    }
}

/* -------------------------------------------------------------------------- */
/* jsonwebtoken::Error → EventRegError */
/* -------------------------------------------------------------------------- */

impl IntoEventRegError for JwtError {
    fn into_eventreg(self) -> EventRegError {
        match self.kind() {
            JwtErrorKind::InvalidRsaKey(_) | JwtErrorKind::InvalidKeyFormat => {
                EventRegError::Config(format!("service account private key is invalid: {self}"))
            }
            _ => EventRegError::Auth(format!("failed to sign service account assertion: {self}")),
        }
    }
}

impl From<JwtError> for InfraError {
    fn from(value: JwtError) -> Self {
        InfraError(value.into_eventreg())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → EventRegError */
/* -------------------------------------------------------------------------- */

impl IntoEventRegError for JsonError {
    fn into_eventreg(self) -> EventRegError {
        EventRegError::InvalidInput(format!("malformed JSON: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_eventreg())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

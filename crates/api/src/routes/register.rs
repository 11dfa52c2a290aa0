//! Registration endpoint
//!
//! The body is parsed here rather than through the `Json` extractor so that
//! a malformed body gets the same generic failure response as a remote error.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use eventreg_domain::constants::REGISTRATION_FAILED;
use eventreg_domain::{EventRegError, RegistrationSubmission};
use eventreg_infra::InfraError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::logging::log_route_failure;
use crate::AppContext;

/// Successful registration body: `{"success": true}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Registered {
    pub success: bool,
}

/// Failure body: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `POST /api/register`
pub async fn register(State(context): State<Arc<AppContext>>, body: Bytes) -> Response {
    let submission = match parse_submission(&body) {
        Ok(submission) => submission,
        Err(err) => return failure(err),
    };

    match context.registration.register(submission).await {
        Ok(_) => (StatusCode::OK, Json(Registered { success: true })).into_response(),
        Err(err) => failure(err),
    }
}

/// Only a JSON object carries fields. Any other non-null value is read as an
/// empty submission so that it fails validation; `null` and malformed JSON
/// are errors.
fn parse_submission(body: &[u8]) -> Result<RegistrationSubmission, EventRegError> {
    match serde_json::from_slice::<Value>(body).map_err(InfraError::from)? {
        Value::Null => Err(EventRegError::InvalidInput("request body is null".into())),
        object @ Value::Object(_) => {
            Ok(serde_json::from_value(object).map_err(InfraError::from)?)
        }
        _ => Ok(RegistrationSubmission::default()),
    }
}

/// Validation errors go back verbatim as 400; everything else is logged and
/// answered with the generic 500 body.
fn failure(err: EventRegError) -> Response {
    match err {
        EventRegError::Validation(message) => {
            (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })).into_response()
        }
        other => {
            log_route_failure("register", &other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody { error: REGISTRATION_FAILED.to_string() }),
            )
                .into_response()
        }
    }
}

//! Title endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use eventreg_domain::constants::FALLBACK_TITLE;
use serde::{Deserialize, Serialize};

use crate::utils::logging::log_route_failure;
use crate::AppContext;

/// `GET /api/form` response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct FormTitle {
    pub title: String,
}

/// Return the spreadsheet title, or the fallback title with a 500 when the
/// lookup fails.
pub async fn get_form_title(State(context): State<Arc<AppContext>>) -> (StatusCode, Json<FormTitle>) {
    match context.titles.get_title().await {
        Ok(title) => (StatusCode::OK, Json(FormTitle { title })),
        Err(err) => {
            log_route_failure("form_title", &err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FormTitle { title: FALLBACK_TITLE.to_string() }),
            )
        }
    }
}

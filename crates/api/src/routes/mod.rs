//! HTTP routes

pub mod form;
pub mod health;
pub mod register;
pub mod ui;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::AppContext;

/// Create the application router.
///
/// This is separated from `main()` to allow testing.
pub fn create_router(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(ui::index))
        .route("/health", get(health::health))
        .route("/api/form", get(form::get_form_title))
        .route("/api/register", post(register::register))
        .layer(TraceLayer::new_for_http())
        .with_state(context)
}

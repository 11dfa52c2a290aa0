//! Registration form page

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Serve the single-page registration form.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

//! HTTP route handlers for the mensa server.

pub mod chat;

use axum::response::Html;

/// Serves the static chat page.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}

//! Fallback page.

use axum::http::StatusCode;
use prepper_routing::RouteState;

use crate::page::Page;

/// Shown for fragments no route matches.
pub fn not_found(route: &RouteState) -> Page {
    tracing::debug!(path = route.path(), "unknown page");
    Page::error(
        StatusCode::NOT_FOUND,
        "Siden blev ikke fundet",
        "Siden findes ikke",
    )
}

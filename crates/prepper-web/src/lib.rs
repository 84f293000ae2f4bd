//! Sgt. Prepper: storefront server library.
//!
//! Exposes configuration, state, controllers and routes so integration tests
//! can build the same application as `main.rs`.

pub mod config;
pub mod controllers;
pub mod error;
pub mod listener;
pub mod page;
pub mod routes;
pub mod session;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application: health check, form actions and pages.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::actions::router())
        .merge(routes::pages::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

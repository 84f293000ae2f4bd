//! Sgt. Prepper: remote API adapters.
//!
//! `reqwest` implementations of the `CatalogApi` and `AuthApi` ports.

mod auth;
mod catalog;
mod client;

pub use auth::HttpAuthApi;
pub use catalog::HttpCatalogApi;
pub use client::REQUEST_TIMEOUT;

//! Sgt. Prepper: authentication.
//!
//! Exchanges credentials for a bearer token through the `AuthApi` port and
//! keeps the token in a session-scoped key-value store.

pub mod api;
pub mod application;
pub mod domain;

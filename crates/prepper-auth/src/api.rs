//! Remote authentication port.

use async_trait::async_trait;
use prepper_core::error::DomainError;

use crate::domain::credentials::{Credentials, LoginResponse};

/// The remote login endpoint.
///
/// A rejected login is a successful call whose response has no token.
/// Only transport and decoding failures are errors (`DomainError::Network`).
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /login` with `{username, password}`.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, DomainError>;
}

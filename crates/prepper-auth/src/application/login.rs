//! Login flow.

use prepper_core::error::DomainError;

use crate::api::AuthApi;
use crate::application::token_store::TokenStore;
use crate::domain::credentials::Credentials;

/// Shown when the server rejects a login without a message of its own.
pub const DEFAULT_REJECTION: &str = "Forkert brugernavn eller adgangskode";

/// Result of a login attempt that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// A token was issued and stored.
    Authenticated,
    /// No token was issued; carries the message to show the user.
    Rejected(String),
}

/// Submits `credentials` and stores the returned token.
///
/// # Errors
///
/// Returns `DomainError::Validation` if either field is empty,
/// `DomainError::Network` if the endpoint cannot be reached, and
/// `DomainError::Persistence` if the token cannot be stored.
pub async fn login(
    api: &dyn AuthApi,
    tokens: &TokenStore,
    credentials: &Credentials,
) -> Result<LoginOutcome, DomainError> {
    if credentials.is_incomplete() {
        return Err(DomainError::Validation(
            "username and password are required".to_owned(),
        ));
    }

    let response = api.login(credentials).await?;
    match response.token() {
        Some(token) => {
            tokens.set_token(token)?;
            tracing::info!(username = %credentials.username, "login succeeded");
            Ok(LoginOutcome::Authenticated)
        }
        None => {
            tracing::info!(username = %credentials.username, "login rejected");
            let message = response
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_REJECTION.to_owned());
            Ok(LoginOutcome::Rejected(message))
        }
    }
}

/// Forgets the stored token.
///
/// # Errors
///
/// Returns `DomainError::Persistence` if the token cannot be removed.
pub fn logout(tokens: &TokenStore) -> Result<(), DomainError> {
    tokens.remove_token()?;
    tracing::info!("logged out");
    Ok(())
}

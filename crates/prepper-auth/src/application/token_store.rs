//! Session token storage.

use std::sync::Arc;

use prepper_core::error::DomainError;
use prepper_core::storage::KeyValueStore;

/// Key the bearer token is stored under.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Holds the bearer token in a session-scoped store.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore").finish_non_exhaustive()
    }
}

impl TokenStore {
    /// Wraps `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Stores `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Persistence` if the store rejects the write.
    pub fn set_token(&self, token: &str) -> Result<(), DomainError> {
        self.storage.set_item(AUTH_TOKEN_KEY, token)
    }

    /// The stored token. An unreadable store counts as logged out.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        match self.storage.get_item(AUTH_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read auth token");
                None
            }
        }
    }

    /// Forgets the token.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Persistence` if the store rejects the removal.
    pub fn remove_token(&self) -> Result<(), DomainError> {
        self.storage.remove_item(AUTH_TOKEN_KEY)
    }

    /// Returns `true` if a token is stored.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }
}

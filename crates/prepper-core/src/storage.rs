//! Key-value storage port.
//!
//! Mirrors the browser storage surface the storefront was built around: a
//! durable store for the cart and a session-scoped store for the auth token.
//! Implementations live in `prepper-storage`.

use crate::error::DomainError;

/// A string-to-string key-value store.
///
/// Implementations are passive sinks with no business logic. Failures are
/// reported as `DomainError::Persistence`.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Persistence` if the store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Persistence` if the store cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Persistence` if the store cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), DomainError>;
}

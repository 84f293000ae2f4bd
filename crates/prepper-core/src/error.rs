//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// A missing cart item is not an error: cart lookups and removals signal it
/// through `Option` and `bool` returns instead.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed input, e.g. a product without identifier, name or price.
    #[error("validation error: {0}")]
    Validation(String),

    /// A remote record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A remote call failed or returned something unreadable.
    #[error("network error: {0}")]
    Network(String),

    /// Reading from or writing to a key-value store failed.
    #[error("persistence error: {0}")]
    Persistence(String),
}

//! Test stores: `KeyValueStore` implementations that misbehave.

use prepper_core::error::DomainError;
use prepper_core::storage::KeyValueStore;

/// A store whose every read and write fails with
/// `DomainError::Persistence`. Useful for checking that persistence failures
/// are logged and swallowed.
#[derive(Debug, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::Persistence("storage unavailable".into()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), DomainError> {
        Err(DomainError::Persistence("storage unavailable".into()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), DomainError> {
        Err(DomainError::Persistence("storage unavailable".into()))
    }
}

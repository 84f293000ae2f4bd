//! JSON-file implementation of the `KeyValueStore` port.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use prepper_core::error::DomainError;
use prepper_core::storage::KeyValueStore;

type Entries = BTreeMap<String, String>;

/// Durable key-value store backed by a single JSON object on disk.
///
/// Every write rewrites the whole file through a temporary sibling and a
/// rename, so a crash mid-write leaves the previous contents in place.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Creates a store at `path`. The file and its parent directories are
    /// created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, DomainError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(DomainError::Persistence(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };
        serde_json::from_str(&raw).map_err(|e| {
            DomainError::Persistence(format!("{} is not a valid store: {e}", self.path.display()))
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), DomainError> {
        let persistence = |e: std::io::Error| {
            DomainError::Persistence(format!("failed to write {}: {e}", self.path.display()))
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(persistence)?;
        }
        let body = serde_json::to_string_pretty(entries)
            .map_err(|e| DomainError::Persistence(format!("failed to encode store: {e}")))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body).map_err(persistence)?;
        fs::rename(&tmp, &self.path).map_err(persistence)
    }

    /// Loads entries for a write. A corrupt file is replaced rather than
    /// blocking every future write.
    fn entries_for_update(&self) -> Result<Entries, DomainError> {
        match self.read_entries() {
            Ok(entries) => Ok(entries),
            Err(DomainError::Persistence(msg)) if self.path.exists() => {
                tracing::warn!(path = %self.path.display(), error = %msg, "discarding unreadable store");
                Ok(Entries::new())
            }
            Err(e) => Err(e),
        }
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>, DomainError> {
        self.lock
            .lock()
            .map_err(|_| DomainError::Persistence("store lock poisoned".into()))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, DomainError> {
        let _guard = self.guard()?;
        Ok(self.read_entries()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let _guard = self.guard()?;
        let mut entries = self.entries_for_update()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.write_entries(&entries)
    }

    fn remove_item(&self, key: &str) -> Result<(), DomainError> {
        let _guard = self.guard()?;
        let mut entries = self.entries_for_update()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

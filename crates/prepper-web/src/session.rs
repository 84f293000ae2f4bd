//! Per-visitor UI state that outlives a single request.
//!
//! The storefront serves one visitor, so there is one `Session`: queued
//! notices, the last login failure and at most one open confirmation.

use std::sync::{Mutex, MutexGuard, PoisonError};

use prepper_views::layout::Notice;
use prepper_views::modal::Confirmer;
use tokio::task::JoinHandle;

/// A confirmation dialog waiting for an answer.
#[derive(Debug)]
pub struct OpenConfirmation {
    /// Identifies the dialog in the confirm form.
    pub key: String,
    /// Shown in the dialog.
    pub item_name: String,
    /// Delivers the answer.
    pub confirmer: Confirmer,
    /// The task that runs the guarded operation once answered.
    pub task: JoinHandle<()>,
}

/// One-shot UI state.
#[derive(Debug, Default)]
pub struct Session {
    notices: Mutex<Vec<Notice>>,
    login_error: Mutex<Option<String>>,
    confirmation: Mutex<Option<OpenConfirmation>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Session {
    /// Queues a notice for the next rendered page.
    pub fn push_notice(&self, notice: Notice) {
        lock(&self.notices).push(notice);
    }

    /// Removes and returns the queued notices.
    pub fn take_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut *lock(&self.notices))
    }

    /// Remembers why the last login failed.
    pub fn set_login_error(&self, message: impl Into<String>) {
        *lock(&self.login_error) = Some(message.into());
    }

    /// Removes and returns the last login failure.
    pub fn take_login_error(&self) -> Option<String> {
        lock(&self.login_error).take()
    }

    /// Opens `confirmation`. A dialog that was still open is dropped, which
    /// cancels it.
    pub fn open_confirmation(&self, confirmation: OpenConfirmation) {
        let previous = lock(&self.confirmation).replace(confirmation);
        if let Some(previous) = previous {
            tracing::debug!(key = %previous.key, "replacing unanswered confirmation");
        }
    }

    /// Key and item name of the open dialog.
    pub fn current_confirmation(&self) -> Option<(String, String)> {
        lock(&self.confirmation)
            .as_ref()
            .map(|c| (c.key.clone(), c.item_name.clone()))
    }

    /// Closes and returns the open dialog if its key is `key`.
    pub fn take_confirmation(&self, key: &str) -> Option<OpenConfirmation> {
        let mut guard = lock(&self.confirmation);
        if guard.as_ref().is_some_and(|c| c.key == key) {
            guard.take()
        } else {
            None
        }
    }
}

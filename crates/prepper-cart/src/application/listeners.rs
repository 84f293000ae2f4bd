//! Cart change notifications.

use serde::Serialize;

use crate::domain::aggregates::CartSummary;
use crate::domain::events::CartEvent;

/// Handed to every listener after a mutation has been persisted.
#[derive(Debug, Clone)]
pub struct CartUpdated {
    /// What changed.
    pub event: CartEvent,
    /// Totals after the change.
    pub summary: CartSummary,
}

/// Serializable form of a notification, e.g. for structured logs.
#[derive(Debug, Serialize)]
pub struct CartUpdatedView<'a> {
    /// Event type name.
    pub event_type: &'a str,
    /// Totals after the change.
    pub summary: CartSummary,
    /// RFC 3339 timestamp of the change.
    pub occurred_at: String,
}

impl CartUpdated {
    /// Returns the serializable form of this notification.
    #[must_use]
    pub fn view(&self) -> CartUpdatedView<'_> {
        CartUpdatedView {
            event_type: &self.event.metadata.event_type,
            summary: self.summary,
            occurred_at: self.event.metadata.occurred_at.to_rfc3339(),
        }
    }
}

/// Something that wants to know when the cart changes (badges, logs).
pub trait CartListener: Send + Sync {
    /// Called once per cart event, after the snapshot has been persisted.
    fn cart_updated(&self, update: &CartUpdated);
}

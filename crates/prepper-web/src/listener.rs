//! Cart change logging.

use prepper_cart::application::listeners::{CartListener, CartUpdated};

/// Logs every cart change as a structured event.
#[derive(Debug, Default)]
pub struct TracingCartListener;

impl CartListener for TracingCartListener {
    fn cart_updated(&self, update: &CartUpdated) {
        let view = update.view();
        tracing::info!(
            event_type = view.event_type,
            total_items = view.summary.total_items,
            total_price = %view.summary.total_price,
            item_count = view.summary.item_count,
            occurred_at = %view.occurred_at,
            "cart updated"
        );
    }
}

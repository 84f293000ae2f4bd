//! Domain events for the cart.

use prepper_core::event::{DomainEvent, EventMetadata};
use prepper_core::product_id::ProductId;
use serde::{Deserialize, Serialize};

/// Event type name for `CartEventKind::ItemAdded`.
pub const ITEM_ADDED_EVENT_TYPE: &str = "cart.item_added";
/// Event type name for `CartEventKind::QuantityChanged`.
pub const QUANTITY_CHANGED_EVENT_TYPE: &str = "cart.quantity_changed";
/// Event type name for `CartEventKind::ItemRemoved`.
pub const ITEM_REMOVED_EVENT_TYPE: &str = "cart.item_removed";
/// Event type name for `CartEventKind::CartCleared`.
pub const CART_CLEARED_EVENT_TYPE: &str = "cart.cleared";

/// Emitted when a product is added, either as a new line or on top of an
/// existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    /// The product identifier.
    pub item_id: ProductId,
    /// How many units were added.
    pub added: u32,
    /// The line quantity after the addition.
    pub quantity: u32,
}

/// Emitted when a line quantity is set explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChanged {
    /// The product identifier.
    pub item_id: ProductId,
    /// The new line quantity.
    pub quantity: u32,
}

/// Emitted when a line is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    /// The product identifier.
    pub item_id: ProductId,
}

/// Event payload variants for the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEventKind {
    /// A product was added.
    ItemAdded(ItemAdded),
    /// A line quantity changed.
    QuantityChanged(QuantityChanged),
    /// A line was removed.
    ItemRemoved(ItemRemoved),
    /// Every line was removed.
    CartCleared,
}

/// Domain event envelope for the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: CartEventKind,
}

impl CartEventKind {
    /// Returns the event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ItemAdded(_) => ITEM_ADDED_EVENT_TYPE,
            Self::QuantityChanged(_) => QUANTITY_CHANGED_EVENT_TYPE,
            Self::ItemRemoved(_) => ITEM_REMOVED_EVENT_TYPE,
            Self::CartCleared => CART_CLEARED_EVENT_TYPE,
        }
    }
}

impl DomainEvent for CartEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}

//! The cart store.
//!
//! Owns the one `Cart` of a session. Every mutation goes through the
//! aggregate, then the full snapshot is written to the key-value store and
//! listeners are notified. Storage problems never reach the caller: a cart
//! that cannot be loaded starts empty, and a cart that cannot be saved stays
//! correct in memory.
//!
//! Persistence is synchronous. A save writes one small JSON record, and the
//! host serves a single shopper, so callers may invoke the store from async
//! handlers while holding the session lock without moving the write to a
//! blocking pool.

use std::sync::Arc;

use prepper_core::clock::Clock;
use prepper_core::error::DomainError;
use prepper_core::product_id::ProductId;
use prepper_core::storage::KeyValueStore;

use crate::application::listeners::{CartListener, CartUpdated};
use crate::domain::aggregates::{Cart, CartItem, CartSummary, MAX_QUANTITY};
use crate::domain::product::CartProduct;

/// Storage key of the persisted cart record.
pub const CART_STORAGE_KEY: &str = "sgtprepper_cart";

/// Session owner of the cart.
pub struct CartStore {
    cart: Cart,
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    listeners: Vec<Box<dyn CartListener>>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Loads the persisted cart from `storage`, or starts an empty one if
    /// nothing usable is stored.
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        let cart = match read_cart(storage.as_ref()) {
            Ok(Some(mut cart)) => {
                cart.normalize();
                tracing::debug!(items = cart.items().len(), "cart loaded");
                cart
            }
            Ok(None) => Cart::empty(clock.now()),
            Err(e) => {
                tracing::warn!(error = %e, "error loading cart, starting empty");
                Cart::empty(clock.now())
            }
        };

        Self {
            cart,
            storage,
            clock,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener for cart changes.
    pub fn subscribe(&mut self, listener: Box<dyn CartListener>) {
        self.listeners.push(listener);
    }

    /// Adds `quantity` units of `product` and returns the updated cart.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the product lacks an identifier,
    /// name or price, if `quantity` is zero, or if the line or cart total
    /// would go out of range. The cart is unchanged then.
    pub fn add_item(&mut self, product: &CartProduct, quantity: u32) -> Result<&Cart, DomainError> {
        self.cart.add_item(product, quantity, self.clock.as_ref())?;
        self.commit();
        Ok(&self.cart)
    }

    /// Removes the line for `id`. Returns `false` if there was none.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let removed = self.cart.remove_item(id, self.clock.as_ref());
        if removed {
            self.commit();
        }
        removed
    }

    /// Sets the quantity of the line for `id`; zero or less removes it.
    /// Returns `Ok(false)` if there was no such line.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `quantity` exceeds
    /// [`MAX_QUANTITY`] or the cart total would go out of range. Nothing is
    /// persisted then.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<bool, DomainError> {
        let updated = self.cart.update_quantity(id, quantity, self.clock.as_ref())?;
        if updated {
            self.commit();
        }
        Ok(updated)
    }

    /// Empties the cart and returns it.
    pub fn clear(&mut self) -> &Cart {
        self.cart.clear(self.clock.as_ref());
        self.commit();
        &self.cart
    }

    /// Returns the whole cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Returns the line for `id`.
    #[must_use]
    pub fn item(&self, id: &ProductId) -> Option<&CartItem> {
        self.cart.item(id)
    }

    /// Returns every line in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Returns the cart totals.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        self.cart.summary()
    }

    /// Returns `true` if there is a line for `id`.
    #[must_use]
    pub fn is_in_cart(&self, id: &ProductId) -> bool {
        self.cart.is_in_cart(id)
    }

    /// Returns the quantity of the line for `id`, or 0.
    #[must_use]
    pub fn item_quantity(&self, id: &ProductId) -> u32 {
        self.cart.item_quantity(id)
    }

    fn commit(&mut self) {
        self.cart.touch(self.clock.now());
        self.save();

        let summary = self.cart.summary();
        for event in self.cart.take_uncommitted_events() {
            let update = CartUpdated { event, summary };
            for listener in &self.listeners {
                listener.cart_updated(&update);
            }
        }
    }

    fn save(&self) {
        let result = serde_json::to_string(&self.cart)
            .map_err(|e| DomainError::Persistence(format!("cart serialization failed: {e}")))
            .and_then(|body| self.storage.set_item(CART_STORAGE_KEY, &body));
        if let Err(e) = result {
            tracing::error!(error = %e, "error saving cart");
        }
    }
}

fn read_cart(storage: &dyn KeyValueStore) -> Result<Option<Cart>, DomainError> {
    let Some(raw) = storage.get_item(CART_STORAGE_KEY)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| DomainError::Persistence(format!("stored cart is corrupt: {e}")))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{TimeZone, Utc};
    use prepper_core::money::Price;
    use prepper_storage::MemoryStore;
    use prepper_test_support::{FailingStore, FixedClock};

    use super::*;
    use crate::domain::events::{CartEventKind, ITEM_ADDED_EVENT_TYPE, ITEM_REMOVED_EVENT_TYPE};

    #[derive(Default)]
    struct RecordingListener {
        seen: Mutex<Vec<CartUpdated>>,
    }

    impl CartListener for Arc<RecordingListener> {
        fn cart_updated(&self, update: &CartUpdated) {
            self.seen.lock().unwrap().push(update.clone());
        }
    }

    fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()))
    }

    fn tent() -> CartProduct {
        CartProduct {
            id: Some(ProductId::from(1)),
            name: Some("Tent".to_owned()),
            price: Some(Price::from_kroner(500).unwrap()),
            ..CartProduct::default()
        }
    }

    #[test]
    fn test_add_item_persists_snapshot_under_cart_key() {
        // Arrange
        let storage = Arc::new(MemoryStore::new());
        let mut store = CartStore::load(storage.clone(), fixed_clock());

        // Act
        store.add_item(&tent(), 1).unwrap();

        // Assert
        let raw = storage.get_item(CART_STORAGE_KEY).unwrap().unwrap();
        let persisted: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted["totalItems"], 1);
        assert_eq!(persisted["totalPrice"], 500);
        assert_eq!(persisted["items"][0]["name"], "Tent");
        assert_eq!(persisted["lastUpdated"], "2026-01-15T10:00:00Z");
    }

    #[test]
    fn test_tent_scenario_yields_single_line_of_three() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = CartStore::load(storage, fixed_clock());

        store.add_item(&tent(), 1).unwrap();
        let cart = store.add_item(&tent(), 2).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.items()[0].subtotal, Price::from_kroner(1500).unwrap());
        assert_eq!(cart.total_price(), Price::from_kroner(1500).unwrap());
    }

    #[test]
    fn test_reload_yields_identical_cart() {
        // Arrange
        let storage = Arc::new(MemoryStore::new());
        let clock = fixed_clock();
        let mut store = CartStore::load(storage.clone(), clock.clone());
        store.add_item(&tent(), 2).unwrap();
        store
            .add_item(
                &CartProduct {
                    id: Some(ProductId::from("filter")),
                    name: Some("Water filter".to_owned()),
                    price: Some(Price::from_minor_units(29_950).unwrap()),
                    ..CartProduct::default()
                },
                1,
            )
            .unwrap();

        // Act
        let reloaded = CartStore::load(storage, clock);

        // Assert
        assert_eq!(reloaded.cart(), store.cart());
        assert_eq!(reloaded.summary(), store.summary());
    }

    #[test]
    fn test_corrupt_snapshot_falls_back_to_empty_cart() {
        let storage = Arc::new(MemoryStore::with_entries([(CART_STORAGE_KEY, "{not json")]));

        let store = CartStore::load(storage, fixed_clock());

        assert!(store.summary().is_empty);
        assert_eq!(store.summary().total_price, Price::ZERO);
    }

    #[test]
    fn test_unreadable_storage_falls_back_to_empty_cart() {
        let store = CartStore::load(Arc::new(FailingStore), fixed_clock());
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_save_failure_keeps_cart_correct_in_memory() {
        let mut store = CartStore::load(Arc::new(FailingStore), fixed_clock());

        store.add_item(&tent(), 2).unwrap();
        let updated = store.update_quantity(&ProductId::from(1), 5);

        assert!(matches!(updated, Ok(true)));
        assert_eq!(store.item_quantity(&ProductId::from(1)), 5);
        assert_eq!(store.summary().total_price, Price::from_kroner(2500).unwrap());
    }

    #[test]
    fn test_validation_error_leaves_storage_untouched() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = CartStore::load(storage.clone(), fixed_clock());

        let result = store.add_item(&CartProduct::default(), 1);

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(storage.get_item(CART_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_rejected_quantity_is_not_persisted() {
        // Arrange
        let storage = Arc::new(MemoryStore::new());
        let mut store = CartStore::load(storage.clone(), fixed_clock());
        store.add_item(&tent(), 2).unwrap();
        let saved = storage.get_item(CART_STORAGE_KEY).unwrap();

        // Act
        let result = store.update_quantity(&ProductId::from(1), 10_000_000_000);

        // Assert
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(store.item_quantity(&ProductId::from(1)), 2);
        assert_eq!(storage.get_item(CART_STORAGE_KEY).unwrap(), saved);
    }

    #[test]
    fn test_largest_cart_reloads_unchanged() {
        // Arrange
        let storage = Arc::new(MemoryStore::new());
        let mut store = CartStore::load(storage.clone(), fixed_clock());
        let unit = Price::MAX.minor_units() / i64::from(MAX_QUANTITY);
        let costly = CartProduct {
            id: Some(ProductId::from(8)),
            name: Some("Shelter".to_owned()),
            price: Some(Price::from_minor_units(unit + 1).unwrap()),
            ..CartProduct::default()
        };
        store.add_item(&costly, MAX_QUANTITY - 1).unwrap();
        store.add_item(&tent(), 1).unwrap();

        // Act
        let reloaded = CartStore::load(storage, fixed_clock());

        // Assert
        assert_eq!(reloaded.cart(), store.cart());
        assert_eq!(reloaded.item_quantity(&ProductId::from(8)), MAX_QUANTITY - 1);
    }

    #[test]
    fn test_remove_absent_item_does_not_persist() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = CartStore::load(storage.clone(), fixed_clock());

        assert!(!store.remove_item(&ProductId::from(1)));
        assert_eq!(storage.get_item(CART_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_clear_persists_empty_cart() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = CartStore::load(storage.clone(), fixed_clock());
        store.add_item(&tent(), 1).unwrap();

        let cart = store.clear();

        assert!(cart.summary().is_empty);
        let raw = storage.get_item(CART_STORAGE_KEY).unwrap().unwrap();
        let persisted: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted["items"].as_array().unwrap().len(), 0);
        assert_eq!(persisted["totalItems"], 0);
    }

    #[test]
    fn test_listeners_receive_one_notification_per_event() {
        // Arrange
        let listener = Arc::new(RecordingListener::default());
        let mut store = CartStore::load(Arc::new(MemoryStore::new()), fixed_clock());
        store.subscribe(Box::new(listener.clone()));

        // Act
        store.add_item(&tent(), 2).unwrap();
        store.remove_item(&ProductId::from(1));
        store.remove_item(&ProductId::from(1));

        // Assert
        let seen = listener.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].event.metadata.event_type, ITEM_ADDED_EVENT_TYPE);
        assert_eq!(seen[0].summary.total_items, 2);
        assert_eq!(seen[1].event.metadata.event_type, ITEM_REMOVED_EVENT_TYPE);
        assert!(seen[1].summary.is_empty);
        match &seen[1].event.kind {
            CartEventKind::ItemRemoved(removed) => assert_eq!(removed.item_id, ProductId::from(1)),
            other => panic!("expected ItemRemoved, got {other:?}"),
        }
        assert_eq!(seen[0].view().occurred_at, "2026-01-15T10:00:00+00:00");
    }
}

//! Aggregate root for the cart.

use chrono::{DateTime, Utc};
use prepper_core::clock::Clock;
use prepper_core::error::DomainError;
use prepper_core::event::EventMetadata;
use prepper_core::money::Price;
use prepper_core::product_id::ProductId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::events::{CartEvent, CartEventKind, ItemAdded, ItemRemoved, QuantityChanged};
use super::product::CartProduct;

/// Largest quantity a single cart line may hold.
pub const MAX_QUANTITY: u32 = 999;

/// One cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product identifier, unique within the cart.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Number of units, at least 1.
    pub quantity: u32,
    /// Image path relative to the asset host.
    #[serde(default)]
    pub image_url: String,
    /// Product slug.
    #[serde(default)]
    pub slug: String,
    /// Category slug.
    #[serde(default)]
    pub category: String,
    /// `price × quantity`.
    pub subtotal: Price,
    /// When the line was first added.
    pub added_at: DateTime<Utc>,
}

/// Cart-wide totals for headers, badges and the summary box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Sum of all line quantities.
    pub total_items: u32,
    /// Sum of all line subtotals.
    pub total_price: Price,
    /// Number of lines.
    pub item_count: usize,
    /// `true` when there are no lines.
    pub is_empty: bool,
}

/// The cart aggregate.
///
/// Serializes to the persisted record
/// `{ items, totalItems, totalPrice, lastUpdated }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
    total_items: u32,
    total_price: Price,
    last_updated: DateTime<Utc>,
    /// Uncommitted events pending notification.
    #[serde(skip)]
    uncommitted_events: Vec<CartEvent>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_price: Price::ZERO,
            last_updated: now,
            uncommitted_events: Vec::new(),
        }
    }

    /// Adds `quantity` units of `product`, producing an `ItemAdded` event.
    ///
    /// An existing line for the same identifier is incremented; name and
    /// price of the existing line are kept.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if identifier, name or price is
    /// missing, if `quantity` is zero, if the line would exceed
    /// [`MAX_QUANTITY`], or if the cart total would exceed [`Price::MAX`].
    /// The cart is unchanged on error.
    pub fn add_item(
        &mut self,
        product: &CartProduct,
        quantity: u32,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        let product = product.validate()?;
        if quantity == 0 {
            return Err(DomainError::Validation(
                "quantity to add must be at least 1".into(),
            ));
        }

        let existing = self.items.iter().position(|i| i.id == *product.id);
        let (previous, unit_price) = existing.map_or((0, product.price), |index| {
            (self.items[index].quantity, self.items[index].price)
        });
        let new_quantity = previous
            .checked_add(quantity)
            .filter(|total| *total <= MAX_QUANTITY)
            .ok_or_else(quantity_too_large)?;
        let subtotal = self.checked_line(product.id, unit_price, new_quantity)?;

        let now = clock.now();
        if let Some(index) = existing {
            let item = &mut self.items[index];
            item.quantity = new_quantity;
            item.subtotal = subtotal;
        } else {
            self.items.push(CartItem {
                id: product.id.clone(),
                name: product.name.to_owned(),
                price: product.price,
                quantity,
                image_url: product.source.image_url.clone(),
                slug: product.source.slug.clone(),
                category: product.source.category.clone(),
                subtotal,
                added_at: now,
            });
        }

        self.recompute_totals();
        self.record(
            CartEventKind::ItemAdded(ItemAdded {
                item_id: product.id.clone(),
                added: quantity,
                quantity: new_quantity,
            }),
            now,
        );
        Ok(())
    }

    /// Removes the line for `id`, producing an `ItemRemoved` event.
    ///
    /// Returns `false`, and changes nothing, if there is no such line.
    pub fn remove_item(&mut self, id: &ProductId, clock: &dyn Clock) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != *id);
        if self.items.len() == before {
            return false;
        }

        self.recompute_totals();
        self.record(
            CartEventKind::ItemRemoved(ItemRemoved {
                item_id: id.clone(),
            }),
            clock.now(),
        );
        true
    }

    /// Sets the quantity of the line for `id`, producing a `QuantityChanged`
    /// event. A quantity of zero or less removes the line.
    ///
    /// Returns `Ok(false)` if there is no such line.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation`, leaving the cart unchanged, if
    /// `quantity` exceeds [`MAX_QUANTITY`] or the cart total would exceed
    /// [`Price::MAX`].
    pub fn update_quantity(
        &mut self,
        id: &ProductId,
        quantity: i64,
        clock: &dyn Clock,
    ) -> Result<bool, DomainError> {
        if quantity <= 0 {
            return Ok(self.remove_item(id, clock));
        }
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q <= MAX_QUANTITY)
            .ok_or_else(quantity_too_large)?;

        let Some(index) = self.items.iter().position(|item| item.id == *id) else {
            return Ok(false);
        };
        let subtotal = self.checked_line(id, self.items[index].price, quantity)?;
        let item = &mut self.items[index];
        item.quantity = quantity;
        item.subtotal = subtotal;

        self.recompute_totals();
        self.record(
            CartEventKind::QuantityChanged(QuantityChanged {
                item_id: id.clone(),
                quantity,
            }),
            clock.now(),
        );
        Ok(true)
    }

    /// Removes every line, producing a `CartCleared` event.
    pub fn clear(&mut self, clock: &dyn Clock) {
        let now = clock.now();
        let pending = std::mem::take(&mut self.uncommitted_events);
        *self = Self::empty(now);
        self.uncommitted_events = pending;
        self.record(CartEventKind::CartCleared, now);
    }

    /// Returns the line for `id`.
    #[must_use]
    pub fn item(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Returns every line in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns `true` if there is a line for `id`.
    #[must_use]
    pub fn is_in_cart(&self, id: &ProductId) -> bool {
        self.item(id).is_some()
    }

    /// Returns the quantity of the line for `id`, or 0.
    #[must_use]
    pub fn item_quantity(&self, id: &ProductId) -> u32 {
        self.item(id).map_or(0, |item| item.quantity)
    }

    /// Returns the cart totals.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            total_items: self.total_items,
            total_price: self.total_price,
            item_count: self.items.len(),
            is_empty: self.items.is_empty(),
        }
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    /// Sum of all line subtotals.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.total_price
    }

    /// When the cart was last persisted.
    #[must_use]
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Stamps the cart with a fresh last-modified time.
    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.last_updated = now;
    }

    /// Rebuilds derived values after loading a persisted snapshot: subtotals
    /// and totals are recomputed; empty, oversized and duplicate lines are
    /// dropped, as are lines that would push the total past [`Price::MAX`].
    pub(crate) fn normalize(&mut self) {
        let mut seen = Vec::with_capacity(self.items.len());
        let mut total = Price::ZERO;
        self.items.retain_mut(|item| {
            if item.quantity == 0 || seen.contains(&item.id) {
                return false;
            }
            let Some((subtotal, running)) = (item.quantity <= MAX_QUANTITY)
                .then(|| item.price.checked_times(item.quantity))
                .flatten()
                .and_then(|subtotal| Some((subtotal, total.checked_add(subtotal)?)))
            else {
                tracing::warn!(
                    item = %item.id,
                    quantity = item.quantity,
                    "dropping cart line out of range"
                );
                return false;
            };
            seen.push(item.id.clone());
            item.subtotal = subtotal;
            total = running;
            true
        });
        self.recompute_totals();
    }

    /// Returns uncommitted events produced by mutations.
    #[must_use]
    pub fn uncommitted_events(&self) -> &[CartEvent] {
        &self.uncommitted_events
    }

    /// Drains uncommitted events after they have been handled.
    pub fn take_uncommitted_events(&mut self) -> Vec<CartEvent> {
        std::mem::take(&mut self.uncommitted_events)
    }

    fn recompute_totals(&mut self) {
        self.total_items = self
            .items
            .iter()
            .fold(0_u32, |sum, item| sum.saturating_add(item.quantity));
        self.total_price = self.items.iter().map(|item| item.subtotal).sum();
    }

    /// Prices a line of `quantity` units and checks the cart total stays in
    /// range with that line in place of any current line for `id`.
    fn checked_line(
        &self,
        id: &ProductId,
        unit_price: Price,
        quantity: u32,
    ) -> Result<Price, DomainError> {
        let subtotal = unit_price
            .checked_times(quantity)
            .ok_or_else(total_too_large)?;
        self.items
            .iter()
            .filter(|item| item.id != *id)
            .try_fold(subtotal, |sum, item| sum.checked_add(item.subtotal))
            .ok_or_else(total_too_large)?;
        Ok(subtotal)
    }

    fn record(&mut self, kind: CartEventKind, now: DateTime<Utc>) {
        self.uncommitted_events.push(CartEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                occurred_at: now,
            },
            kind,
        });
    }
}

fn quantity_too_large() -> DomainError {
    DomainError::Validation(format!("quantity must be at most {MAX_QUANTITY}"))
}

fn total_too_large() -> DomainError {
    DomainError::Validation("cart total is out of range".into())
}

/// Carts compare by content; pending events are not part of the state.
impl PartialEq for Cart {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
            && self.total_items == other.total_items
            && self.total_price == other.total_price
            && self.last_updated == other.last_updated
    }
}

impl Eq for Cart {}

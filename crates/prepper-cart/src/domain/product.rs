//! Product data accepted by the cart.

use prepper_core::error::DomainError;
use prepper_core::money::Price;
use prepper_core::product_id::ProductId;
use serde::Deserialize;

/// The product snapshot handed to `add_item`.
///
/// Identifier, name and price are optional here because callers build this
/// from loosely shaped input; the cart rejects snapshots missing any of them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    /// Product identifier.
    pub id: Option<ProductId>,
    /// Display name.
    pub name: Option<String>,
    /// Unit price.
    pub price: Option<Price>,
    /// Image path relative to the asset host.
    #[serde(default)]
    pub image_url: String,
    /// Product slug, used to link back to the detail page.
    #[serde(default)]
    pub slug: String,
    /// Category slug.
    #[serde(default)]
    pub category: String,
}

/// A `CartProduct` whose required fields are known to be present.
#[derive(Debug)]
pub(crate) struct ValidProduct<'a> {
    pub id: &'a ProductId,
    pub name: &'a str,
    pub price: Price,
    pub source: &'a CartProduct,
}

impl CartProduct {
    /// Checks that identifier, name and price are present.
    pub(crate) fn validate(&self) -> Result<ValidProduct<'_>, DomainError> {
        let id = self.id.as_ref().filter(|id| !id.is_blank());
        let name = self.name.as_deref().filter(|name| !name.trim().is_empty());
        match (id, name, self.price) {
            (Some(id), Some(name), Some(price)) => Ok(ValidProduct {
                id,
                name,
                price,
                source: self,
            }),
            _ => Err(DomainError::Validation(
                "invalid product data - missing required fields".into(),
            )),
        }
    }
}

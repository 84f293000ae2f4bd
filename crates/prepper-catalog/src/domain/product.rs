//! Product records.

use prepper_core::money::Price;
use prepper_core::product_id::ProductId;
use serde::{Deserialize, Serialize};

/// A titled reference the API embeds in products (category, brand).
///
/// List endpoints sometimes send a bare slug or title instead of the object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Titled {
    /// `{ "title": "...", "slug": "..." }`.
    Object {
        /// Display title.
        title: String,
        /// Slug, if sent.
        #[serde(default)]
        slug: Option<String>,
    },
    /// A bare string.
    Plain(String),
}

impl Titled {
    /// The display title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Object { title, .. } | Self::Plain(title) => title,
        }
    }
}

/// A product as returned by the product API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Unit price.
    pub price: Price,
    /// Units in stock; absent or `null` means none.
    #[serde(default, deserialize_with = "stock_or_zero")]
    pub stock: u32,
    /// Short HTML teaser.
    #[serde(default)]
    pub teaser: Option<String>,
    /// Long HTML description.
    #[serde(default)]
    pub description: Option<String>,
    /// Image path relative to the asset host.
    #[serde(default)]
    pub image_url: String,
    /// Category reference.
    #[serde(default)]
    pub category: Option<Titled>,
    /// Brand reference.
    #[serde(default)]
    pub brand: Option<Titled>,
}

fn stock_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_detail_record() {
        let json = serde_json::json!({
            "id": 7,
            "name": "Vandfilter",
            "slug": "vandfilter",
            "price": 299.95,
            "stock": 4,
            "teaser": "<p>Rent vand</p>",
            "description": "<p>Lang tekst</p>",
            "imageUrl": "/images/filter.jpg",
            "category": {"title": "Vand og vandrensning", "slug": "vand-og-vandrensning"},
            "brand": {"title": "LifeStraw"}
        });

        let product: Product = serde_json::from_value(json).unwrap();

        assert_eq!(product.id, ProductId::from(7));
        assert_eq!(product.price.minor_units(), 29_995);
        assert_eq!(product.stock, 4);
        assert_eq!(product.category.as_ref().unwrap().title(), "Vand og vandrensning");
        assert_eq!(product.brand.as_ref().unwrap().title(), "LifeStraw");
    }

    #[test]
    fn test_deserialize_sparse_list_record() {
        let json = serde_json::json!({
            "id": 8,
            "name": "Telt",
            "slug": "telt",
            "price": 500,
            "stock": null,
            "category": "camping"
        });

        let product: Product = serde_json::from_value(json).unwrap();

        assert_eq!(product.stock, 0);
        assert_eq!(product.image_url, "");
        assert_eq!(product.teaser, None);
        assert_eq!(product.category, Some(Titled::Plain("camping".to_owned())));
        assert_eq!(product.brand, None);
    }
}

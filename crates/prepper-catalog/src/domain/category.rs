//! Product categories.

use serde::{Deserialize, Serialize};

/// A category as returned by `GET /categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// URL slug, used as the `category` query value.
    pub slug: String,
    /// Display title.
    pub title: String,
}

impl Category {
    /// The fragment that lists this category's products.
    #[must_use]
    pub fn listing_fragment(&self) -> String {
        format!("/?category={}", self.slug)
    }
}

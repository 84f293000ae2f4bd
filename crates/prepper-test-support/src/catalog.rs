//! Test catalog: a configurable `CatalogApi` and record builders.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use prepper_catalog::api::CatalogApi;
use prepper_catalog::domain::category::Category;
use prepper_catalog::domain::product::{Product, Titled};
use prepper_core::error::DomainError;
use prepper_core::money::Price;
use prepper_core::product_id::ProductId;

/// Builds a product priced in whole kroner.
///
/// # Panics
///
/// Panics if `kroner` is negative.
#[must_use]
pub fn product(id: u64, name: &str, slug: &str, kroner: i64, stock: u32) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_owned(),
        slug: slug.to_owned(),
        price: Price::from_kroner(kroner).unwrap(),
        stock,
        teaser: Some(format!("<p>{name}</p>")),
        description: None,
        image_url: format!("/images/{slug}.jpg"),
        category: None,
        brand: Some(Titled::Plain("Sgt. Prepper".to_owned())),
    }
}

/// Builds a category.
#[must_use]
pub fn category(slug: &str, title: &str) -> Category {
    Category {
        slug: slug.to_owned(),
        title: title.to_owned(),
    }
}

/// A catalog served from memory that records every call.
///
/// Unknown categories list as empty and unknown products are
/// `DomainError::NotFound`. `failing()` turns every call into
/// `DomainError::Network`; `failing_categories()` only the category call.
#[derive(Debug, Default)]
pub struct StubCatalogApi {
    products: HashMap<String, Vec<Product>>,
    categories: Vec<Category>,
    fail_all: bool,
    fail_categories: bool,
    calls: Mutex<Vec<String>>,
}

impl StubCatalogApi {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog whose every call fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Serves `products` under `category`.
    #[must_use]
    pub fn with_products(mut self, category: &str, products: Vec<Product>) -> Self {
        self.products.insert(category.to_owned(), products);
        self
    }

    /// Serves `categories` from the category endpoint.
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Makes the category endpoint fail.
    #[must_use]
    pub fn failing_categories(mut self) -> Self {
        self.fail_categories = true;
        self
    }

    /// Returns the calls made so far, as request paths.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, path: String) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(path);
        if self.fail_all {
            return Err(DomainError::Network("catalog unavailable".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for StubCatalogApi {
    async fn list_products(&self, category: &str) -> Result<Vec<Product>, DomainError> {
        self.record(format!("/products/{category}"))?;
        Ok(self.products.get(category).cloned().unwrap_or_default())
    }

    async fn get_product(&self, category: &str, slug: &str) -> Result<Product, DomainError> {
        self.record(format!("/products/{category}/{slug}"))?;
        self.products
            .get(category)
            .and_then(|products| products.iter().find(|p| p.slug == slug))
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("product {category}/{slug}")))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        self.record("/categories".to_owned())?;
        if self.fail_categories {
            return Err(DomainError::Network("categories unavailable".into()));
        }
        Ok(self.categories.clone())
    }
}

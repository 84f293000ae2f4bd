//! `CatalogApi` over HTTP.

use async_trait::async_trait;
use prepper_catalog::api::CatalogApi;
use prepper_catalog::domain::category::Category;
use prepper_catalog::domain::product::Product;
use prepper_core::error::DomainError;

use crate::client::ApiClient;

/// Reads products and categories from the product API.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    api: ApiClient,
}

impl HttpCatalogApi {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `base_url` is not an absolute
    /// URL, or `DomainError::Network` if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        Ok(Self {
            api: ApiClient::new(base_url)?,
        })
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn list_products(&self, category: &str) -> Result<Vec<Product>, DomainError> {
        self.api
            .get_json(&["products", category], &format!("category {category}"))
            .await
    }

    async fn get_product(&self, category: &str, slug: &str) -> Result<Product, DomainError> {
        self.api
            .get_json(
                &["products", category, slug],
                &format!("product {category}/{slug}"),
            )
            .await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        self.api.get_json(&["categories"], "categories").await
    }
}

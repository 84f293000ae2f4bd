//! Remote catalog port.

use async_trait::async_trait;
use prepper_core::error::DomainError;

use crate::domain::category::Category;
use crate::domain::product::Product;

/// Read access to the remote product API.
///
/// Implementations report transport and decoding failures as
/// `DomainError::Network`, and a missing product as `DomainError::NotFound`.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /products/{category}`.
    async fn list_products(&self, category: &str) -> Result<Vec<Product>, DomainError>;

    /// `GET /products/{category}/{slug}`.
    async fn get_product(&self, category: &str, slug: &str) -> Result<Product, DomainError>;

    /// `GET /categories`.
    async fn list_categories(&self) -> Result<Vec<Category>, DomainError>;
}

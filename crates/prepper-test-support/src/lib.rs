//! Shared test mocks and utilities for the Sgt. Prepper storefront.

mod auth;
mod catalog;
mod clock;
mod storage;

pub use auth::StubAuthApi;
pub use catalog::{StubCatalogApi, category, product};
pub use clock::FixedClock;
pub use storage::FailingStore;

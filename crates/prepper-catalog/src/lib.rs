//! Sgt. Prepper: product catalog.
//!
//! Remote product and category records, the `CatalogApi` port that fetches
//! them, and the mapping into view-ready records with display fields.

pub mod api;
pub mod application;
pub mod domain;

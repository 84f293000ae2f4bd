//! Catalog records as the product API serves them.

pub mod category;
pub mod product;
pub mod stock;

//! Cart application services.

pub mod cart_store;
pub mod listeners;

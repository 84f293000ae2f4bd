//! Sgt. Prepper: shopping cart.
//!
//! The `Cart` aggregate keeps its line items and totals consistent; the
//! `CartStore` owns one cart, persists a snapshot after every mutation and
//! notifies listeners.

pub mod application;
pub mod domain;

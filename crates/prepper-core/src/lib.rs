//! Sgt. Prepper Core: shared domain abstractions.
//!
//! This crate defines the ports and value types every storefront crate
//! depends on: the clock, the key-value storage port, prices, product
//! identifiers and the domain error. It contains no infrastructure code.

pub mod clock;
pub mod error;
pub mod event;
pub mod money;
pub mod product_id;
pub mod storage;

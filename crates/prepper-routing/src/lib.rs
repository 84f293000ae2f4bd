//! Sgt. Prepper: fragment router.
//!
//! Maps a navigation fragment (`#/cart`, `#/?category=tents`,
//! `#/product/camping/tent-1`) to a handler. The table is built once at
//! startup and never changes afterwards.

mod fragment;
mod router;

pub use fragment::RouteState;
pub use router::{Dispatch, Matched, ProductRef, Router, RouterBuilder, RouterError};

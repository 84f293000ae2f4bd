//! Page controllers: read route state, call one remote accessor, map the
//! records and hand them to a view builder.

pub mod cart;
pub mod home;
pub mod layout;
pub mod login;
pub mod logout;
pub mod not_found;
pub mod product_detail;
pub mod products;

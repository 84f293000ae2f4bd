//! Sgt. Prepper: views.
//!
//! View builders are pure functions from view-ready records to a `Node`
//! tree. Interactive elements carry typed `Action` values instead of
//! callbacks; the host renders them as POST forms and dispatches them back to
//! the cart store. `render` turns a tree into HTML.

pub mod action;
pub mod cart;
pub mod layout;
pub mod login;
pub mod modal;
pub mod node;
pub mod product;
pub mod render;

pub use action::{Action, CartActions, CartItemHandlers, Decision};
pub use node::{Element, Form, Node};
pub use render::{document, render};

//! HTTP routes: health, page rendering and form actions.

pub mod actions;
pub mod health;
pub mod pages;

//! Mapping catalog records into view-ready records.

pub mod display;

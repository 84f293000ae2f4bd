//! Key-value store adapters.
//!
//! `FileStore` is the durable store (the cart survives restarts);
//! `MemoryStore` is the session-scoped store (the auth token is gone when the
//! process exits).

mod file_store;
mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

//! Session-scoped persistence for the last successful result set.
//!
//! # Modules
//!
//! - `backend`: [`SessionStore`] key/value abstraction
//! - `json`: JSON file store with atomic writes
//! - `memory`: in-process store
//! - `models`: persisted record types
//! - `cache`: [`ResultCache`] save/restore on top of a store

pub mod backend;
pub mod cache;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::SessionStore;
pub use cache::{ResultCache, RESULTS_KEY};
pub use json::JsonSessionStore;
pub use memory::MemorySessionStore;
pub use models::CachedResultSet;

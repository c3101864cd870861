//! Session store abstraction.
//!
//! The result cache only needs a tiny string key/value surface scoped to one
//! browsing session. [`SessionStore`] captures exactly that so the cache can sit
//! on top of a JSON file, an in-memory map, or a mock in tests.

use crate::domain::error::Result;

/// String key/value persistence scoped to a session.
///
/// # Implementations
///
/// - [`JsonSessionStore`](crate::storage::JsonSessionStore): JSON file with atomic writes
/// - [`MemorySessionStore`](crate::storage::MemorySessionStore): process-local map
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be persisted.
    fn remove(&mut self, key: &str) -> Result<()>;
}

//! Result cache for restoring the results view across navigation.
//!
//! Every successful event query overwrites the cached set. When the explore view
//! is re-entered with the results marker, the cached set is read back once and
//! shown without a network round trip. Entries never expire within a session;
//! the runtime clears the cache when a new session starts.

use crate::domain::error::{Result, TimewheelError};
use crate::domain::EventSummary;
use crate::storage::backend::SessionStore;
use crate::storage::models::{CachedResultSet, RESULT_SET_VERSION};

/// Session store key holding the last successful result set.
pub const RESULTS_KEY: &str = "timewheel.events";

pub struct ResultCache {
    store: Box<dyn SessionStore>,
}

impl ResultCache {
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Overwrites the cached set with `events`.
    ///
    /// # Errors
    ///
    /// Returns an error if the set cannot be serialized or persisted.
    pub fn save(&mut self, events: &[EventSummary]) -> Result<()> {
        let _span = tracing::debug_span!("result_cache_save", count = events.len()).entered();

        let record = CachedResultSet::new(events.to_vec());
        let json = serde_json::to_string(&record)
            .map_err(|e| TimewheelError::Storage(format!("failed to serialize results: {e}")))?;

        self.store.set(RESULTS_KEY, &json)?;
        tracing::debug!("result set cached");
        Ok(())
    }

    /// Reads the cached set back.
    ///
    /// Returns `None` when nothing was cached, or when the entry is unreadable or
    /// from an older layout. Those cases are logged and otherwise ignored.
    pub fn restore(&self) -> Option<Vec<EventSummary>> {
        let _span = tracing::debug_span!("result_cache_restore").entered();

        let raw = match self.store.get(RESULTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("no cached result set");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read cached result set");
                return None;
            }
        };

        match serde_json::from_str::<CachedResultSet>(&raw) {
            Ok(record) if record.version == RESULT_SET_VERSION => {
                tracing::debug!(count = record.events.len(), saved_at = record.saved_at, "restored result set");
                Some(record.events)
            }
            Ok(record) => {
                tracing::debug!(version = record.version, "discarding result set with stale layout");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "cached result set is unreadable");
                None
            }
        }
    }

    /// Drops the cached set.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal cannot be persisted.
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(RESULTS_KEY)
    }
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache").field("key", &RESULTS_KEY).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::backend::MockSessionStore;
    use crate::storage::MemorySessionStore;

    #[test]
    fn save_then_restore_returns_same_events() {
        let mut cache = ResultCache::new(Box::new(MemorySessionStore::new()));
        let events = vec![EventSummary::titled("Fall of Rome"), EventSummary::titled("Hegira")];

        cache.save(&events).unwrap();

        assert_eq!(cache.restore(), Some(events));
    }

    #[test]
    fn later_save_overwrites() {
        let mut cache = ResultCache::new(Box::new(MemorySessionStore::new()));
        cache.save(&[EventSummary::titled("first")]).unwrap();
        cache.save(&[]).unwrap();

        assert_eq!(cache.restore(), Some(vec![]));
    }

    #[test]
    fn empty_store_restores_nothing() {
        let cache = ResultCache::new(Box::new(MemorySessionStore::new()));
        assert_eq!(cache.restore(), None);
    }

    #[test]
    fn store_read_error_restores_nothing() {
        let mut store = MockSessionStore::new();
        store
            .expect_get()
            .withf(|key| key == RESULTS_KEY)
            .times(1)
            .returning(|_| Err(TimewheelError::Storage("disk gone".to_string())));

        let cache = ResultCache::new(Box::new(store));
        assert_eq!(cache.restore(), None);
    }

    #[test]
    fn garbage_entry_restores_nothing() {
        let mut store = MockSessionStore::new();
        store
            .expect_get()
            .returning(|_| Ok(Some("[1, 2, 3]".to_string())));

        let cache = ResultCache::new(Box::new(store));
        assert_eq!(cache.restore(), None);
    }

    #[test]
    fn stale_layout_is_discarded() {
        let mut store = MockSessionStore::new();
        store
            .expect_get()
            .returning(|_| Ok(Some(r#"{"version":0,"saved_at":0,"events":[{"title":"x"}]}"#.to_string())));

        let cache = ResultCache::new(Box::new(store));
        assert_eq!(cache.restore(), None);
    }

    #[test]
    fn clear_removes_cached_set() {
        let mut cache = ResultCache::new(Box::new(MemorySessionStore::new()));
        cache.save(&[EventSummary::titled("Treaty of Westphalia")]).unwrap();

        cache.clear().unwrap();

        assert_eq!(cache.restore(), None);
    }

    #[test]
    fn clear_removes_results_key() {
        let mut store = MockSessionStore::new();
        store
            .expect_remove()
            .withf(|key| key == RESULTS_KEY)
            .times(1)
            .returning(|_| Ok(()));

        let mut cache = ResultCache::new(Box::new(store));
        cache.clear().unwrap();
    }

    #[test]
    fn save_writes_under_results_key() {
        let mut store = MockSessionStore::new();
        store
            .expect_set()
            .withf(|key, value| key == RESULTS_KEY && value.contains("\"Magna Carta\""))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut cache = ResultCache::new(Box::new(store));
        cache.save(&[EventSummary::titled("Magna Carta")]).unwrap();
    }
}

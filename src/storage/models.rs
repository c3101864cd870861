//! Persisted record types.

use crate::domain::EventSummary;
use serde::{Deserialize, Serialize};

/// Current layout of [`CachedResultSet`]. Bump when the shape changes so stale
/// entries are discarded instead of misread.
pub const RESULT_SET_VERSION: u32 = 1;

/// The last successful event query result, as written to the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedResultSet {
    pub version: u32,

    /// Unix timestamp of the save. Informational only; entries never expire.
    pub saved_at: i64,

    #[serde(default)]
    pub events: Vec<EventSummary>,
}

impl CachedResultSet {
    #[must_use]
    pub fn new(events: Vec<EventSummary>) -> Self {
        Self {
            version: RESULT_SET_VERSION,
            saved_at: chrono::Utc::now().timestamp(),
            events,
        }
    }
}

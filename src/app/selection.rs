//! Current filter selections and the free-text search term.
//!
//! [`SelectionStore`] is a plain state container. Each control writes only its own
//! field through a dedicated setter; the query composer reads a [`SelectionState`]
//! snapshot at submit time. Observers are notified synchronously after a field
//! actually changes, so a reader never sees a half-applied user action.

use std::collections::BTreeMap;
use std::fmt;

/// Snapshot of everything the user has picked so far. Any combination of set and
/// unset fields is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub region: Option<String>,
    pub year: Option<i32>,
    pub topic: Option<String>,
    pub search_term: String,
}

/// Which field a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionField {
    Region,
    Year,
    Topic,
    SearchTerm,
    /// Every field was reset at once.
    All,
}

/// Receives selection changes.
pub trait SelectionObserver: Send {
    fn selection_changed(&mut self, state: &SelectionState, field: SelectionField);
}

impl<F> SelectionObserver for F
where
    F: FnMut(&SelectionState, SelectionField) + Send,
{
    fn selection_changed(&mut self, state: &SelectionState, field: SelectionField) {
        self(state, field);
    }
}

/// Handle returned by [`SelectionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct SelectionStore {
    state: SelectionState,
    observers: BTreeMap<SubscriptionId, Box<dyn SelectionObserver>>,
    next_subscription: u64,
}

impl SelectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshot(&self) -> SelectionState {
        self.state.clone()
    }

    /// Borrowed view of the current state.
    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn subscribe(&mut self, observer: Box<dyn SelectionObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.insert(id, observer);
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(&id).is_some()
    }

    pub fn set_region(&mut self, region: Option<String>) -> bool {
        if self.state.region == region {
            return false;
        }
        tracing::debug!(region = ?region, "region selection changed");
        self.state.region = region;
        self.notify(SelectionField::Region);
        true
    }

    pub fn set_year(&mut self, year: Option<i32>) -> bool {
        if self.state.year == year {
            return false;
        }
        tracing::debug!(year = ?year, "year selection changed");
        self.state.year = year;
        self.notify(SelectionField::Year);
        true
    }

    pub fn set_topic(&mut self, topic: Option<String>) -> bool {
        if self.state.topic == topic {
            return false;
        }
        tracing::debug!(topic = ?topic, "topic selection changed");
        self.state.topic = topic;
        self.notify(SelectionField::Topic);
        true
    }

    pub fn set_search_term(&mut self, term: &str) -> bool {
        if self.state.search_term == term {
            return false;
        }
        tracing::trace!(term = %term, "search term changed");
        term.clone_into(&mut self.state.search_term);
        self.notify(SelectionField::SearchTerm);
        true
    }

    /// Resets every field. Observers get a single [`SelectionField::All`].
    pub fn clear(&mut self) {
        if self.state == SelectionState::default() {
            return;
        }
        self.state = SelectionState::default();
        self.notify(SelectionField::All);
    }

    fn notify(&mut self, field: SelectionField) {
        for observer in self.observers.values_mut() {
            observer.selection_changed(&self.state, field);
        }
    }
}

impl fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

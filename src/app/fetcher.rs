//! Query composition and the event request lifecycle.
//!
//! [`EventFetcher`] turns a selection snapshot into an [`EventQuery`], hands out
//! monotonically increasing request tokens, and applies only the response to the
//! most recent submission. Responses for older tokens are dropped on arrival,
//! which gives last-submitted-wins ordering without cancelling any I/O.

use crate::app::selection::SelectionState;
use crate::domain::{events_from_payload, EventSummary};
use serde_json::Value;

/// Parameters of `GET /historical-events`. All three are always sent; unset
/// selections become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub place: String,
    pub year: String,
    pub theme: String,
}

impl EventQuery {
    /// Query pairs in wire order.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("place", self.place.as_str()),
            ("year", self.year.as_str()),
            ("theme", self.theme.as_str()),
        ]
    }
}

impl From<&SelectionState> for EventQuery {
    fn from(selection: &SelectionState) -> Self {
        Self {
            place: selection.region.clone().unwrap_or_default(),
            year: selection.year.map(|y| y.to_string()).unwrap_or_default(),
            theme: selection.topic.clone().unwrap_or_default(),
        }
    }
}

/// Where the most recent event request stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchLifecycle {
    #[default]
    Idle,
    Loading,
    Success(Vec<EventSummary>),
    Failure(String),
}

impl FetchLifecycle {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// A request the runtime should send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRequest {
    pub token: u64,
    pub query: EventQuery,
}

/// What a current response did to the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(Vec<EventSummary>),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct EventFetcher {
    last_token: u64,
    awaiting: Option<u64>,
    lifecycle: FetchLifecycle,
    held: Vec<EventSummary>,
}

impl EventFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn lifecycle(&self) -> &FetchLifecycle {
        &self.lifecycle
    }

    /// Events from the last success or restoration; empty after a failure.
    #[must_use]
    pub fn events(&self) -> &[EventSummary] {
        &self.held
    }

    /// Composes the query for `selection` and moves to `Loading`.
    pub fn submit(&mut self, selection: &SelectionState) -> EventRequest {
        self.last_token += 1;
        self.awaiting = Some(self.last_token);
        self.lifecycle = FetchLifecycle::Loading;

        let query = EventQuery::from(selection);
        tracing::debug!(
            token = self.last_token,
            place = %query.place,
            year = %query.year,
            theme = %query.theme,
            "event query submitted"
        );

        EventRequest {
            token: self.last_token,
            query,
        }
    }

    /// Applies the response for `token`.
    ///
    /// `Ok` carries the decoded JSON body; `Err` carries a transport, status or
    /// decode failure. Returns `None` when the token is not the latest submission.
    pub fn resolve(&mut self, token: u64, response: Result<Value, String>) -> Option<FetchOutcome> {
        if self.awaiting != Some(token) {
            tracing::debug!(token, awaiting = ?self.awaiting, "dropping stale event response");
            return None;
        }
        self.awaiting = None;

        match response {
            Ok(body) => {
                let events = events_from_payload(&body);
                tracing::debug!(token, count = events.len(), "event query succeeded");
                self.held.clone_from(&events);
                self.lifecycle = FetchLifecycle::Success(events.clone());
                Some(FetchOutcome::Loaded(events))
            }
            Err(reason) => {
                tracing::warn!(token, reason = %reason, "event query failed");
                self.held.clear();
                self.lifecycle = FetchLifecycle::Failure(reason.clone());
                Some(FetchOutcome::Failed(reason))
            }
        }
    }

    /// Installs events read back from the result cache.
    pub fn restore(&mut self, events: Vec<EventSummary>) {
        self.awaiting = None;
        self.held.clone_from(&events);
        self.lifecycle = FetchLifecycle::Success(events);
    }

    /// Returns to `Idle` with nothing held. The token counter keeps counting, so
    /// a response to a request issued before the reset is still dropped.
    pub fn reset(&mut self) {
        self.awaiting = None;
        self.lifecycle = FetchLifecycle::Idle;
        self.held.clear();
    }
}

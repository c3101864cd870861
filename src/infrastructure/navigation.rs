//! Navigation locations and the results marker.
//!
//! Locations are path-plus-query strings such as `/event?title=Waterloo&popup=open`.
//! The `popup=open` pair is the marker that tells the explore view to reopen its
//! cached results on entry, and tells the detail view where "back" should go.

use crate::domain::error::{Result, TimewheelError};
use std::fmt;
use url::Url;

/// Query key of the results marker.
pub const MARKER_KEY: &str = "popup";
/// Query value of the results marker.
pub const MARKER_VALUE: &str = "open";

const EXPLORE_PATH: &str = "/";
const EVENT_PATH: &str = "/event";
const CHAT_PATH: &str = "/chatbot";

/// A parsed navigation location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
}

/// Which view a location leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Explore { restore_results: bool },
    Event { title: String, from_results: bool },
    Chat,
    NotFound(String),
}

impl Location {
    /// Parses a relative location such as `/?popup=open`.
    ///
    /// # Errors
    ///
    /// Returns [`TimewheelError::Navigation`] if the string is not a valid
    /// relative reference.
    pub fn parse(raw: &str) -> Result<Self> {
        let base = Url::parse("http://timewheel.invalid/")
            .map_err(|e| TimewheelError::Navigation(e.to_string()))?;
        let url = base
            .join(raw.trim())
            .map_err(|e| TimewheelError::Navigation(format!("{raw}: {e}")))?;

        Ok(Self {
            path: url.path().to_string(),
            query: url.query_pairs().into_owned().collect(),
        })
    }

    #[must_use]
    pub fn explore() -> Self {
        Self::bare(EXPLORE_PATH)
    }

    /// The explore view, reopening cached results.
    #[must_use]
    pub fn explore_with_results() -> Self {
        Self::explore().with_results_marker()
    }

    /// The detail view for `title`. `from_results` carries the marker along so
    /// that going back reopens the results.
    #[must_use]
    pub fn event(title: &str, from_results: bool) -> Self {
        let mut location = Self::bare(EVENT_PATH);
        location.query.push(("title".to_string(), title.to_string()));
        if from_results {
            location = location.with_results_marker();
        }
        location
    }

    #[must_use]
    pub fn chat() -> Self {
        Self::bare(CHAT_PATH)
    }

    fn bare(path: &str) -> Self {
        Self {
            path: path.to_string(),
            query: Vec::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn has_results_marker(&self) -> bool {
        self.query_value(MARKER_KEY) == Some(MARKER_VALUE)
    }

    #[must_use]
    pub fn with_results_marker(mut self) -> Self {
        if !self.has_results_marker() {
            self.query.retain(|(k, _)| k != MARKER_KEY);
            self.query.push((MARKER_KEY.to_string(), MARKER_VALUE.to_string()));
        }
        self
    }

    #[must_use]
    pub fn without_results_marker(mut self) -> Self {
        self.query.retain(|(k, _)| k != MARKER_KEY);
        self
    }

    /// Resolves which view this location shows.
    #[must_use]
    pub fn route(&self) -> Route {
        match self.path.trim_end_matches('/') {
            "" => Route::Explore {
                restore_results: self.has_results_marker(),
            },
            EVENT_PATH => Route::Event {
                title: self.query_value("title").unwrap_or_default().to_string(),
                from_results: self.has_results_marker(),
            },
            CHAT_PATH => Route::Chat,
            other => Route::NotFound(other.to_string()),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::explore()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.query.iter())
                .finish();
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_is_detected() {
        assert!(Location::parse("/?popup=open").unwrap().has_results_marker());
        assert!(!Location::parse("/?popup=closed").unwrap().has_results_marker());
        assert!(!Location::parse("/").unwrap().has_results_marker());
    }

    #[test]
    fn event_location_round_trips_title() {
        let location = Location::event("Storming of the Bastille & aftermath", true);
        let reparsed = Location::parse(&location.to_string()).unwrap();

        assert_eq!(
            reparsed.route(),
            Route::Event {
                title: "Storming of the Bastille & aftermath".to_string(),
                from_results: true,
            }
        );
    }

    #[test]
    fn routes() {
        assert_eq!(
            Location::parse("/").unwrap().route(),
            Route::Explore { restore_results: false }
        );
        assert_eq!(
            Location::explore_with_results().route(),
            Route::Explore { restore_results: true }
        );
        assert_eq!(Location::parse("/chatbot").unwrap().route(), Route::Chat);
        assert_eq!(
            Location::parse("/nowhere").unwrap().route(),
            Route::NotFound("/nowhere".to_string())
        );
    }

    #[test]
    fn marker_can_be_removed() {
        let location = Location::explore_with_results().without_results_marker();
        assert_eq!(location.to_string(), "/");
    }

    #[test]
    fn adding_marker_twice_is_idempotent() {
        let location = Location::explore().with_results_marker().with_results_marker();
        assert_eq!(location.to_string(), "/?popup=open");
    }
}

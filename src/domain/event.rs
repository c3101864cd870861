//! Historical event summaries and their display fallbacks.
//!
//! The backend is loose about the shape of an event: every field may be missing,
//! `year` arrives as either a number or a string, and older deployments report the
//! location under `place` rather than `region`. [`EventSummary`] accepts all of
//! that, and [`EventCard`] turns a summary into display strings with a fixed
//! placeholder for every absent field.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder title for events without one.
pub const UNKNOWN_TITLE: &str = "Unknown Event";
/// Placeholder description for events without one.
pub const UNKNOWN_DESCRIPTION: &str = "No description available.";
/// Placeholder era label.
pub const UNKNOWN_ERA: &str = "Unknown Era";
/// Placeholder year label.
pub const UNKNOWN_YEAR: &str = "N/A";
/// Placeholder category label.
pub const DEFAULT_CATEGORY: &str = "General";
/// Placeholder region label.
pub const UNKNOWN_REGION: &str = "Unknown Location";

/// One historical event as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub era: Option<String>,

    /// Year as reported by the backend. Kept textual since some events carry
    /// ranges or circa markers.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(
        default,
        alias = "place",
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub region: Option<String>,
}

impl EventSummary {
    /// Creates a summary carrying only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Title used for navigation and detail lookups.
    #[must_use]
    pub fn display_title(&self) -> &str {
        present(self.title.as_deref()).unwrap_or(UNKNOWN_TITLE)
    }
}

/// Accepts strings, numbers and booleans; everything else becomes `None`.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.trim().is_empty())
}

/// Extracts the event list from a `/historical-events` response body.
///
/// A missing `events` field, a non-array value, or a body that is not an object
/// all yield an empty list. Individual entries that are not objects are skipped.
#[must_use]
pub fn events_from_payload(payload: &Value) -> Vec<EventSummary> {
    let Some(entries) = payload.get("events").and_then(Value::as_array) else {
        tracing::debug!("response carried no events array");
        return Vec::new();
    };

    entries
        .iter()
        .filter(|entry| entry.is_object())
        .filter_map(|entry| match EventSummary::deserialize(entry) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::debug!(error = %e, "skipping malformed event entry");
                None
            }
        })
        .collect()
}

/// Display-ready event with every fallback applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub title: String,
    pub description: String,
    pub era: String,
    pub year: String,
    pub category: String,
    pub region: String,
}

impl From<&EventSummary> for EventCard {
    fn from(event: &EventSummary) -> Self {
        let or = |field: &Option<String>, fallback: &str| {
            present(field.as_deref()).unwrap_or(fallback).to_string()
        };

        Self {
            title: or(&event.title, UNKNOWN_TITLE),
            description: or(&event.description, UNKNOWN_DESCRIPTION),
            era: or(&event.era, UNKNOWN_ERA),
            year: or(&event.year, UNKNOWN_YEAR),
            category: or(&event.category, DEFAULT_CATEGORY),
            region: or(&event.region, UNKNOWN_REGION),
        }
    }
}

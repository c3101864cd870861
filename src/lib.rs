//! timewheel: explore historical events by place, year and topic.
//!
//! The crate is the client-side core of a history explorer. A user narrows a
//! search by picking a region on a world map, a year on a time wheel and a
//! topic, then asks a history backend for matching events. The results can be
//! reopened without a network round trip after visiting an event's detail
//! page, and a free-text search box offers debounced title suggestions.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  stdin driver (main.rs)                              │
//! └──────────────────────────────────────────────────────┘
//!                          │
//! ┌──────────────────────────────────────────────────────┐
//! │  Runtime (runtime/)                                  │  ← executes actions,
//! │  - spawns requests and debounce timers               │    routes locations
//! └──────────────────────────────────────────────────────┘
//!          │                   │                   │
//! ┌────────────────┐  ┌────────────────┐  ┌────────────────┐
//! │ App (app/)     │  │ Client         │  │ Storage        │
//! │ - state machine│  │ (client/)      │  │ (storage/)     │
//! │ - handle_event │  │ - reqwest HTTP │  │ - result cache │
//! │ - view model   │  │ - suggestions  │  │ - JSON store   │
//! └────────────────┘  └────────────────┘  └────────────────┘
//!          │
//! ┌──────────────────────────────────────────────────────┐
//! │  Domain, infrastructure, observability, ui           │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! All state lives in [`AppState`] and changes only in [`handle_event`], which
//! answers with [`Action`]s. Every request carries a token; a completion whose
//! token has been superseded is dropped when it arrives, so no I/O is ever
//! cancelled explicitly.
//!
//! # Configuration
//!
//! ```toml
//! backend_url = "http://localhost:8000"
//! suggestion_url = "https://en.wikipedia.org/w/api.php"
//! debounce_ms = 300
//! suggestion_limit = 10
//! request_timeout_secs = 10
//! year_min = -3000
//! trace_level = "timewheel=debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use timewheel::{handle_event, initialize, Config, Event};
//!
//! let config = Config::from_map(&BTreeMap::new());
//! let mut state = initialize(&config);
//!
//! handle_event(&mut state, &Event::RegionClicked("FR".to_string()))?;
//! handle_event(&mut state, &Event::YearEntered("1800".to_string()))?;
//! assert_eq!(state.selection().region.as_deref(), Some("France"));
//! assert_eq!(state.selection().year, Some(1800));
//! # Ok::<(), timewheel::TimewheelError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod runtime;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Page, StateSettings, ViewMode};
pub use domain::{EventSummary, Result, TimewheelError};
pub use runtime::Runtime;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Runtime configuration.
///
/// Every field has a default; TOML files and key/value maps only need to name
/// what they change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the history backend.
    pub backend_url: String,

    /// OpenSearch endpoint for search-box suggestions.
    pub suggestion_url: String,

    /// Quiet period after the last keystroke before suggestions are fetched.
    pub debounce_ms: u64,

    /// Most suggestions shown.
    pub suggestion_limit: usize,

    pub request_timeout_secs: u64,

    /// Earliest selectable year (negative for BCE).
    pub year_min: i32,

    /// Latest selectable year. Defaults to the current year.
    pub year_max: i32,

    /// Overrides the platform data directory. `~` is expanded.
    pub data_dir: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: String,

    /// Size at which the trace file rotates.
    pub trace_max_bytes: u64,

    /// Rotated trace files kept.
    pub trace_backups: usize,
}

impl Default for Config {
    fn default() -> Self {
        let settings = StateSettings::default();
        Self {
            backend_url: client::DEFAULT_BACKEND_URL.to_string(),
            suggestion_url: client::DEFAULT_SUGGESTION_URL.to_string(),
            debounce_ms: 300,
            suggestion_limit: 10,
            request_timeout_secs: 10,
            year_min: settings.year_min,
            year_max: settings.year_max,
            data_dir: None,
            trace_level: "info".to_string(),
            trace_max_bytes: 10 * 1024 * 1024,
            trace_backups: 3,
        }
    }
}

impl Config {
    /// Builds a configuration from string pairs such as command-line
    /// `key=value` arguments. Unknown keys are ignored and unparsable values
    /// keep their default.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use timewheel::Config;
    ///
    /// let map = BTreeMap::from([
    ///     ("debounce_ms".to_string(), "150".to_string()),
    ///     ("suggestion_limit".to_string(), "many".to_string()),
    /// ]);
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.debounce_ms, 150);
    /// assert_eq!(config.suggestion_limit, 10);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self::default().merge(map)
    }

    /// Reads a TOML file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TimewheelError::Io`] if the file cannot be read and
    /// [`TimewheelError::Config`] if it is not valid TOML for this struct.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| TimewheelError::Config(format!("{}: {e}", path.display())))
    }

    /// Overrides fields named in `map`.
    #[must_use]
    pub fn merge(mut self, map: &BTreeMap<String, String>) -> Self {
        fn parsed<T: std::str::FromStr>(map: &BTreeMap<String, String>, key: &str, slot: &mut T) {
            if let Some(raw) = map.get(key) {
                match raw.trim().parse() {
                    Ok(value) => *slot = value,
                    Err(_) => tracing::debug!(key, value = %raw, "ignoring unparsable config value"),
                }
            }
        }

        fn text(map: &BTreeMap<String, String>, key: &str, slot: &mut String) {
            if let Some(raw) = map.get(key).map(|s| s.trim()).filter(|s| !s.is_empty()) {
                *slot = raw.to_string();
            }
        }

        text(map, "backend_url", &mut self.backend_url);
        text(map, "suggestion_url", &mut self.suggestion_url);
        text(map, "trace_level", &mut self.trace_level);
        parsed(map, "debounce_ms", &mut self.debounce_ms);
        parsed(map, "suggestion_limit", &mut self.suggestion_limit);
        parsed(map, "request_timeout_secs", &mut self.request_timeout_secs);
        parsed(map, "year_min", &mut self.year_min);
        parsed(map, "year_max", &mut self.year_max);
        parsed(map, "trace_max_bytes", &mut self.trace_max_bytes);
        parsed(map, "trace_backups", &mut self.trace_backups);

        if let Some(dir) = map.get("data_dir").filter(|s| !s.trim().is_empty()) {
            self.data_dir = Some(dir.trim().to_string());
        }
        self
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The parts of the configuration the state machine needs.
    #[must_use]
    pub const fn settings(&self) -> StateSettings {
        StateSettings {
            debounce: Duration::from_millis(self.debounce_ms),
            suggestion_limit: self.suggestion_limit,
            year_min: self.year_min,
            year_max: self.year_max,
        }
    }
}

/// Creates the application state for `config`.
///
/// The state starts on the explore page with nothing selected. Entering a
/// location through the [`Runtime`] is what triggers restoration.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        backend = %config.backend_url,
        year_min = config.year_min,
        year_max = config.year_max,
        "initializing timewheel"
    );
    AppState::new(config.settings())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_field() {
        let config = Config::default();
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.suggestion_limit, 10);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert!(config.year_max >= 2024);
        assert_eq!(
            (config.year_min, config.year_max),
            (StateSettings::default().year_min, StateSettings::default().year_max)
        );
    }

    #[test]
    fn map_values_override_and_blanks_are_ignored() {
        let map = BTreeMap::from([
            ("backend_url".to_string(), " http://history.test ".to_string()),
            ("trace_level".to_string(), "  ".to_string()),
            ("year_min".to_string(), "-500".to_string()),
            ("data_dir".to_string(), "~/tw".to_string()),
        ]);
        let config = Config::from_map(&map);

        assert_eq!(config.backend_url, "http://history.test");
        assert_eq!(config.trace_level, "info");
        assert_eq!(config.year_min, -500);
        assert_eq!(config.data_dir.as_deref(), Some("~/tw"));
    }

    #[test]
    fn toml_file_with_partial_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timewheel.toml");
        std::fs::write(&path, "debounce_ms = 50\nyear_max = 1999\n").unwrap();

        let config = Config::from_toml_file(&path).unwrap();

        assert_eq!(config.debounce_ms, 50);
        assert_eq!(config.year_max, 1999);
        assert_eq!(config.suggestion_limit, 10);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "debounce_ms = \"soon\"").unwrap();

        assert!(matches!(
            Config::from_toml_file(&path),
            Err(TimewheelError::Config(_))
        ));
    }

    #[test]
    fn settings_follow_config() {
        let config = Config {
            debounce_ms: 120,
            year_min: 0,
            year_max: 100,
            ..Config::default()
        };
        let settings = config.settings();

        assert_eq!(settings.debounce, Duration::from_millis(120));
        assert_eq!((settings.year_min, settings.year_max), (0, 100));
    }
}

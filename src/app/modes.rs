//! Page and view mode state machine types.
//!
//! The application shows one [`Page`] at a time. On the explore page the
//! results dialog is either closed ([`ViewMode::Browsing`]) or open
//! ([`ViewMode::ResultsOpen`]); only a successful fetch, a restoration or an
//! explicit open/dismiss moves between the two.

/// Results dialog state on the explore page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Filters are visible, results dialog is closed.
    #[default]
    Browsing,

    /// Results dialog is showing the held events.
    ResultsOpen,
}

/// Which page is mounted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// Map, filters, search box and results dialog.
    #[default]
    Explore,

    /// Detail page for a single event title.
    Event,

    /// Conversation with the history assistant.
    Chat,

    /// Unknown location; carries the path that was requested.
    NotFound(String),
}

/// A surface the pointer can go down on. Dismissible components compare it
/// against the surfaces they own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    SearchInput,
    SuggestionList,
    LocationInput,
    LocationList,
    Map,
    ResultsDialog,
    /// Anything not listed above.
    Background,
}

//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! a renderer. They hold display-ready strings only: every event card already
//! has its fallbacks applied, suggestion lists are already capped, and hidden
//! panels are simply absent.

use crate::app::chat::Speaker;
use crate::app::location::LocationMatch;
use crate::domain::EventCard;

/// Message shown in an empty results dialog.
pub const NO_RESULTS: &str = "No events found for the selected filters.";

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    pub page: PageView,

    /// One-line status such as "Searching..." or a swallowed failure.
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Explore(ExploreView),
    Event(DetailView),
    Chat(ChatView),
    NotFound { path: String },
}

/// The explore page: filters, map tooltip, search box, results dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct ExploreView {
    pub region: Option<String>,
    pub year: Option<i32>,
    /// Years rendered around the selected one, top to bottom.
    pub year_strip: Vec<i32>,
    pub topic: Option<String>,
    pub search_term: String,

    pub map: MapView,

    /// Hovered region name and where to draw it.
    pub tooltip: Option<Tooltip>,

    /// Era banner while the time wheel is being dragged.
    pub era_banner: Option<String>,

    /// Present only while the suggestion list is visible.
    pub suggestions: Option<Vec<String>>,

    pub location: LocationDropdown,

    pub loading: bool,

    /// Present only while the results dialog is open.
    pub results: Option<ResultsDialog>,
}

/// Region identifiers carrying the hover and selection highlights. Every
/// other region is drawn with its base look.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapView {
    pub hovered: Option<String>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub position: Option<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationDropdown {
    pub input: String,
    /// Empty while the dropdown is closed.
    pub matches: Vec<LocationMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsDialog {
    pub cards: Vec<EventCard>,
    /// Set when there is nothing to list.
    pub empty_message: Option<String>,
}

/// The single-event detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub content: String,
    pub image_url: String,
    /// Label of the narration button.
    pub narration: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatView {
    pub lines: Vec<ChatLine>,
    pub waiting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub from_user: bool,
    pub text: String,
}

impl ChatLine {
    #[must_use]
    pub fn new(speaker: Speaker, text: &str) -> Self {
        Self {
            from_user: speaker == Speaker::User,
            text: text.to_string(),
        }
    }
}

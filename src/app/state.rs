//! Application state and view model computation.
//!
//! [`AppState`] owns every component of the explore, detail and chat pages and
//! is mutated only by the event handler. Derived display data is produced on
//! demand by [`AppState::compute_viewmodel`].
//!
//! # State Components
//!
//! - **Selection**: region, year, topic and search term
//! - **Region picker**: map hover/selection and pointer position
//! - **Suggestions**: debounced lookup state for the search box
//! - **Fetcher**: event query lifecycle and held events
//! - **Year control / location picker**: input helpers feeding the selection
//! - **Detail / chat**: state for the other two pages

use super::chat::ChatSession;
use super::detail::{EventDetail, Narration};
use super::fetcher::{EventFetcher, FetchLifecycle};
use super::location::LocationPicker;
use super::modes::{Page, ViewMode};
use super::region_picker::RegionPicker;
use super::selection::{SelectionStore, SelectionState};
use super::suggestions::{SuggestionContext, SuggestionFetcher};
use super::year::YearControl;
use crate::domain::{EventCard, Era};
use crate::ui::viewmodel::{
    ChatLine, ChatView, DetailView, ExploreView, LocationDropdown, MapView, PageView,
    ResultsDialog, Tooltip, UIViewModel, NO_RESULTS,
};
use chrono::Datelike;
use std::time::Duration;

/// Most location matches listed in the dropdown.
const LOCATION_MATCH_LIMIT: usize = 8;

/// Tunables copied from the configuration at startup. The default year range
/// ends at the current year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSettings {
    pub debounce: Duration,
    pub suggestion_limit: usize,
    pub year_min: i32,
    pub year_max: i32,
}

impl Default for StateSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            suggestion_limit: 10,
            year_min: -3000,
            year_max: chrono::Local::now().year(),
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub settings: StateSettings,
    pub page: Page,
    pub view_mode: ViewMode,
    pub selection: SelectionStore,
    pub region_picker: RegionPicker,
    pub suggestions: SuggestionFetcher,
    pub fetcher: EventFetcher,
    pub year: YearControl,
    pub location: LocationPicker,
    pub detail: EventDetail,
    pub chat: ChatSession,

    /// Set between entering the explore page with the results marker and the
    /// cache answering. Restoration happens at most once per entry.
    pub restore_pending: bool,

    /// Last swallowed failure, shown as a status line.
    pub notice: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new(settings: StateSettings) -> Self {
        Self {
            settings,
            page: Page::Explore,
            view_mode: ViewMode::Browsing,
            selection: SelectionStore::new(),
            region_picker: RegionPicker::new(),
            suggestions: SuggestionFetcher::new(settings.suggestion_limit),
            fetcher: EventFetcher::new(),
            year: YearControl::new(settings.year_min, settings.year_max),
            location: LocationPicker::new(),
            detail: EventDetail::default(),
            chat: ChatSession::default(),
            restore_pending: false,
            notice: None,
        }
    }

    /// Resets everything owned by the explore page, as if it were mounted anew.
    /// Observers and request counters survive.
    pub fn reset_explore(&mut self) {
        self.view_mode = ViewMode::Browsing;
        self.selection.clear();
        self.region_picker = RegionPicker::new();
        self.suggestions.reset();
        self.fetcher.reset();
        self.year.release();
        self.location = LocationPicker::new();
        self.restore_pending = false;
        self.notice = None;
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        self.selection.state()
    }

    /// Context sent with suggestion lookups.
    #[must_use]
    pub fn suggestion_context(&self) -> SuggestionContext {
        let selection = self.selection.state();
        SuggestionContext {
            region: selection.region.clone(),
            era: selection.year.map(Era::of_year),
        }
    }

    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let page = match &self.page {
            Page::Explore => PageView::Explore(self.compute_explore()),
            Page::Event => PageView::Event(self.compute_detail()),
            Page::Chat => PageView::Chat(self.compute_chat()),
            Page::NotFound(path) => PageView::NotFound { path: path.clone() },
        };

        UIViewModel {
            page,
            status: self.compute_status(),
        }
    }

    fn compute_explore(&self) -> ExploreView {
        let selection = self.selection.state();

        let tooltip = self.region_picker.hovered_name().map(|name| Tooltip {
            text: name.to_string(),
            position: self.region_picker.pointer(),
        });

        let suggestions = self
            .suggestions
            .is_visible()
            .then(|| self.suggestions.suggestions().to_vec());

        let matches = if self.location.is_open() {
            let mut matches = self.location.matches();
            matches.truncate(LOCATION_MATCH_LIMIT);
            matches
        } else {
            Vec::new()
        };

        let results = (self.view_mode == ViewMode::ResultsOpen).then(|| {
            let cards: Vec<EventCard> = self.fetcher.events().iter().map(EventCard::from).collect();
            let empty_message = cards.is_empty().then(|| NO_RESULTS.to_string());
            ResultsDialog { cards, empty_message }
        });

        ExploreView {
            region: selection.region.clone(),
            year: selection.year,
            year_strip: selection.year.map(|y| self.year.neighbors(y)).unwrap_or_default(),
            topic: selection.topic.clone(),
            search_term: selection.search_term.clone(),
            map: MapView {
                hovered: self.region_picker.hovered().map(str::to_string),
                selected: self.region_picker.selected().map(str::to_string),
            },
            tooltip,
            era_banner: self.year.banner(),
            suggestions,
            location: LocationDropdown {
                input: self.location.input().to_string(),
                matches,
            },
            loading: self.fetcher.lifecycle().is_loading(),
            results,
        }
    }

    fn compute_detail(&self) -> DetailView {
        let narration = match self.detail.narration() {
            Narration::Idle => "Listen",
            Narration::Fetching { .. } => "Preparing audio...",
            Narration::Playing => "Pause",
        };

        DetailView {
            title: self.detail.title().to_string(),
            content: self.detail.content().to_string(),
            image_url: self.detail.image_url().to_string(),
            narration: narration.to_string(),
        }
    }

    fn compute_chat(&self) -> ChatView {
        ChatView {
            lines: self
                .chat
                .messages()
                .iter()
                .map(|m| ChatLine::new(m.speaker, &m.text))
                .collect(),
            waiting: self.chat.awaiting() > 0,
        }
    }

    fn compute_status(&self) -> Option<String> {
        if self.page != Page::Explore {
            return None;
        }
        match self.fetcher.lifecycle() {
            FetchLifecycle::Loading => Some("Searching...".to_string()),
            FetchLifecycle::Failure(_) => self.notice.clone(),
            FetchLifecycle::Idle | FetchLifecycle::Success(_) => None,
        }
    }
}

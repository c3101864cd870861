//! Async runtime carrying out the actions produced by the event handler.
//!
//! The [`Runtime`] is the single writer of [`AppState`]. Events are handled one
//! at a time; network requests and debounce timers run as spawned tasks whose
//! completions come back through an unbounded channel and are handled like any
//! other event. Navigation is resolved here as well: a location is routed to
//! the view-entry event of the page it names.
//!
//! The runtime also owns the map surface: region restyles are applied to a
//! highlight table that hosts read back with [`Runtime::region_highlight`].

use crate::app::region_picker::Highlight;
use crate::app::selection::{SelectionObserver, SubscriptionId};
use crate::app::{handle_event, Action, AppState, Event};
use crate::client::{Executor, HttpBackend, OpenSearchProvider, Request};
use crate::domain::error::Result;
use crate::infrastructure::{get_data_dir, session_file, Location, Route};
use crate::storage::{JsonSessionStore, MemorySessionStore, ResultCache, SessionStore};
use crate::ui::viewmodel::UIViewModel;
use crate::{initialize, Config};
use std::collections::{BTreeMap, VecDeque};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Instrument;

pub struct Runtime {
    state: AppState,
    cache: ResultCache,
    executor: Executor,
    location: Location,
    region_styles: BTreeMap<String, Highlight>,
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    outstanding: usize,
}

impl Runtime {
    #[must_use]
    pub fn new(state: AppState, cache: ResultCache, executor: Executor) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state,
            cache,
            executor,
            location: Location::default(),
            region_styles: BTreeMap::new(),
            tx,
            rx,
            outstanding: 0,
        }
    }

    /// Wires the HTTP clients and the session store from `config`.
    ///
    /// Results cached by an earlier run are dropped, so restoration only sees
    /// result sets from this session. When the JSON store in the data directory
    /// cannot be opened the session is kept in memory instead.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let data_dir = get_data_dir(config.data_dir.as_deref());
        let mut cache = ResultCache::new(session_store(&data_dir));
        if let Err(e) = cache.clear() {
            tracing::warn!(error = %e, "failed to drop results from an earlier session");
        }

        let executor = Executor::new(
            Arc::new(HttpBackend::new(&config.backend_url, config.request_timeout())),
            Arc::new(OpenSearchProvider::new(
                &config.suggestion_url,
                config.request_timeout(),
            )),
            config.suggestion_limit,
            data_dir.join("narration.mp3"),
        );

        Self::new(initialize(config), cache, executor)
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// The location currently shown, including in-place marker rewrites.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Spawned requests and timers whose completions have not been handled.
    #[must_use]
    pub const fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Highlight the map should draw `region_id` with.
    #[must_use]
    pub fn region_highlight(&self, region_id: &str) -> Highlight {
        self.region_styles
            .get(region_id)
            .copied()
            .unwrap_or(Highlight::Base)
    }

    #[must_use]
    pub fn viewmodel(&self) -> UIViewModel {
        self.state.compute_viewmodel()
    }

    pub fn subscribe(&mut self, observer: Box<dyn SelectionObserver>) -> SubscriptionId {
        self.state.selection.subscribe(observer)
    }

    /// Parses `raw` and enters the view it names.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a valid location.
    pub fn navigate(&mut self, raw: &str) -> Result<bool> {
        let location = Location::parse(raw)?;
        self.enter(location)
    }

    /// Handles `event` and everything it synchronously leads to.
    ///
    /// Returns `true` if the view model should be rendered again.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        let mut queue = VecDeque::from([event]);
        let mut redraw = false;

        while let Some(event) = queue.pop_front() {
            let (changed, actions) = handle_event(&mut self.state, &event)?;
            redraw |= changed;
            for action in actions {
                if let Some(follow_up) = self.perform(action) {
                    queue.push_back(follow_up);
                }
            }
        }
        Ok(redraw)
    }

    /// Waits for the next completion from a spawned request or timer.
    pub async fn completion(&mut self) -> Option<Event> {
        let event = self.rx.recv().await?;
        self.outstanding = self.outstanding.saturating_sub(1);
        Some(event)
    }

    /// Handles completions until nothing is outstanding.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub async fn run_until_idle(&mut self) -> Result<bool> {
        let mut redraw = false;
        while self.outstanding > 0 {
            let Some(event) = self.completion().await else {
                break;
            };
            redraw |= self.dispatch(event)?;
        }
        Ok(redraw)
    }

    fn enter(&mut self, location: Location) -> Result<bool> {
        let event = Self::entry_event(&location);
        tracing::debug!(location = %location, "entering view");
        self.location = location;
        self.dispatch(event)
    }

    fn entry_event(location: &Location) -> Event {
        match location.route() {
            Route::Explore { restore_results } => Event::ExploreEntered { restore_results },
            Route::Event {
                title,
                from_results,
            } => Event::DetailEntered {
                title,
                from_results,
            },
            Route::Chat => Event::ChatEntered,
            Route::NotFound(path) => Event::PageNotFound(path),
        }
    }

    /// Executes one action. Returns an event to handle right away, if any.
    fn perform(&mut self, action: Action) -> Option<Event> {
        match action {
            Action::Send(request) => {
                self.spawn_request(request);
                None
            }
            Action::ScheduleSuggestionLookup { generation, delay } => {
                let tx = self.tx.clone();
                self.outstanding += 1;
                tokio::spawn(
                    async move {
                        tokio::time::sleep(delay).await;
                        let _ = tx.send(Event::SuggestionDebounceElapsed { generation });
                    }
                    .instrument(tracing::trace_span!("suggestion_debounce", generation)),
                );
                None
            }
            Action::PersistResults(events) => {
                if let Err(e) = self.cache.save(&events) {
                    tracing::warn!(error = %e, "failed to cache results");
                }
                None
            }
            Action::RestoreResults => Some(Event::ResultsRestored(self.cache.restore())),
            Action::ReplaceLocation(location) => {
                tracing::debug!(location = %location, "location replaced");
                self.location = location;
                None
            }
            Action::Navigate(location) => {
                let event = Self::entry_event(&location);
                tracing::debug!(location = %location, "navigating");
                self.location = location;
                Some(event)
            }
            Action::RestyleRegions(restyles) => {
                for restyle in restyles {
                    tracing::trace!(region = %restyle.region_id, highlight = ?restyle.highlight, "restyle region");
                    if restyle.highlight == Highlight::Base {
                        self.region_styles.remove(&restyle.region_id);
                    } else {
                        self.region_styles.insert(restyle.region_id, restyle.highlight);
                    }
                }
                None
            }
            Action::StopNarration => {
                tracing::debug!(file = %self.executor.narration_file().display(), "narration stopped");
                None
            }
        }
    }

    fn spawn_request(&mut self, request: Request) {
        let span = tracing::debug_span!("request", kind = request.kind(), token = request.token());
        let executor = self.executor.clone();
        let tx = self.tx.clone();
        self.outstanding += 1;

        tokio::spawn(
            async move {
                let event = executor.execute(request).await;
                let _ = tx.send(event);
            }
            .instrument(span),
        );
    }
}

fn session_store(data_dir: &Path) -> Box<dyn SessionStore> {
    match JsonSessionStore::open(session_file(data_dir)) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, dir = %data_dir.display(), "session store unavailable, keeping results in memory");
            Box::new(MemorySessionStore::new())
        }
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("location", &self.location)
            .field("outstanding", &self.outstanding)
            .field("page", &self.state.page)
            .finish_non_exhaustive()
    }
}

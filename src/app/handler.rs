//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place application state changes. It receives
//! user input, view entries produced by the router, and completions of
//! requests the runtime performed, and answers with a redraw flag plus the
//! [`Action`]s the runtime should carry out next.
//!
//! # Event Types
//!
//! - **View entry**: `ExploreEntered`, `DetailEntered`, `ChatEntered`, `PageNotFound`
//! - **Explore input**: map, year, topic, location and search events
//! - **Completions**: `EventsResolved`, `SuggestionsResolved`, `ResultsRestored`,
//!   `DetailLoaded`, `NarrationReady`, `ChatAnswered`
//!
//! Completions carry the token of the request that produced them. The component
//! owning the request decides whether the token is still current; superseded
//! completions change nothing and request no redraw.

use crate::app::detail::{Narration, NarrationCommand};
use crate::app::fetcher::FetchOutcome;
use crate::app::modes::{Page, Surface, ViewMode};
use crate::app::region_picker::Restyle;
use crate::app::suggestions::TermChange;
use crate::app::year::YearEntry;
use crate::app::{Action, AppState};
use crate::client::Request;
use crate::domain::error::Result;
use crate::domain::{EventSummary, Topic};
use crate::infrastructure::Location;
use serde_json::Value;
use std::time::Instant;

/// Everything that can happen to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The explore view was mounted. `restore_results` is set when the location
    /// carried the results marker.
    ExploreEntered {
        restore_results: bool,
    },
    /// The result cache answered a `RestoreResults` action.
    ResultsRestored(Option<Vec<EventSummary>>),
    /// Opens the results dialog with whatever is currently held.
    OpenResults,
    DismissResults,
    /// An entry of the results dialog was chosen.
    EventChosen(usize),

    /// Pointer entered a map region, or left the map (`None`).
    RegionHovered(Option<String>),
    PointerMoved {
        x: f64,
        y: f64,
    },
    RegionClicked(String),

    /// Raw text from the year input.
    YearEntered(String),
    YearScrolled {
        delta: i32,
        at: Instant,
    },
    WheelDragged {
        degrees: f64,
    },
    WheelReleased,
    /// The "go" gesture on the time wheel: releases it and searches.
    WheelConfirmed,

    /// `None` selects all topics.
    TopicChosen(Option<String>),

    LocationTyped(String),
    LocationFocused,
    LocationChosen(String),

    SearchTermChanged(String),
    SuggestionDebounceElapsed {
        generation: u64,
    },
    SuggestionsResolved {
        token: u64,
        result: std::result::Result<Vec<String>, String>,
    },
    SuggestionAccepted(usize),
    SearchFocused,
    /// The pointer went down on a surface; components not owning it close.
    PointerDown(Surface),
    /// Enter in the search box.
    SearchSubmitted,
    /// The search button.
    FindEvents,
    EventsResolved {
        token: u64,
        result: std::result::Result<Value, String>,
    },

    DetailEntered {
        title: String,
        from_results: bool,
    },
    DetailLoaded {
        token: u64,
        content: std::result::Result<String, String>,
        image_url: std::result::Result<String, String>,
    },
    NarrationToggled,
    NarrationReady {
        token: u64,
        result: std::result::Result<(), String>,
    },
    NarrationFinished,
    DetailBack,

    ChatEntered,
    ChatSubmitted(String),
    ChatAnswered {
        token: u64,
        result: std::result::Result<String, String>,
    },

    PageNotFound(String),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the view model may have changed and should be
/// rendered again.
///
/// # Errors
///
/// Currently every event is handled in place; the `Result` leaves room for
/// handlers that need to propagate storage or navigation failures.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::ExploreEntered { restore_results } => {
            let mut actions = silence_narration(state);
            state.page = Page::Explore;
            state.reset_explore();

            if *restore_results {
                tracing::debug!("explore entered with results marker");
                state.restore_pending = true;
                actions.push(Action::RestoreResults);
            }
            Ok((true, actions))
        }
        Event::ResultsRestored(cached) => {
            if !state.restore_pending {
                tracing::debug!("ignoring unexpected restoration");
                return Ok((false, vec![]));
            }
            state.restore_pending = false;

            match cached {
                Some(events) => {
                    tracing::debug!(count = events.len(), "results restored from cache");
                    state.fetcher.restore(events.clone());
                    state.view_mode = ViewMode::ResultsOpen;
                    Ok((true, vec![]))
                }
                None => {
                    tracing::debug!("nothing cached, dropping results marker");
                    Ok((false, vec![Action::ReplaceLocation(Location::explore())]))
                }
            }
        }
        Event::OpenResults => {
            if state.page != Page::Explore {
                return Ok((false, vec![]));
            }
            state.view_mode = ViewMode::ResultsOpen;
            Ok((true, vec![]))
        }
        Event::DismissResults => {
            if state.view_mode == ViewMode::Browsing {
                return Ok((false, vec![]));
            }
            state.view_mode = ViewMode::Browsing;
            Ok((true, vec![Action::ReplaceLocation(Location::explore())]))
        }
        Event::EventChosen(index) => {
            let Some(chosen) = state.fetcher.events().get(*index) else {
                tracing::debug!(index, "no event at index");
                return Ok((false, vec![]));
            };
            let title = chosen.display_title().to_string();
            tracing::debug!(title = %title, "event chosen from results");
            Ok((false, vec![Action::Navigate(Location::event(&title, true))]))
        }

        Event::RegionHovered(region) => {
            let restyles = state.region_picker.on_hover(region.as_deref());
            Ok((true, restyle_action(restyles)))
        }
        Event::PointerMoved { x, y } => {
            state.region_picker.on_pointer_move(*x, *y);
            Ok((state.region_picker.hovered().is_some(), vec![]))
        }
        Event::RegionClicked(region_id) => {
            let (name, restyles) = state.region_picker.on_select(region_id);
            state.location.mirror(&name);
            state.selection.set_region(Some(name));
            Ok((true, restyle_action(restyles)))
        }

        Event::YearEntered(text) => match state.year.enter(text) {
            YearEntry::Accepted(year) => {
                state.selection.set_year(year);
                Ok((true, vec![]))
            }
            YearEntry::Rejected => Ok((true, vec![])),
        },
        Event::YearScrolled { delta, at } => {
            let current = state.selection.state().year;
            let Some(year) = state.year.scroll(*delta, current, *at) else {
                return Ok((false, vec![]));
            };
            Ok((state.selection.set_year(Some(year)), vec![]))
        }
        Event::WheelDragged { degrees } => {
            let current = state.selection.state().year;
            if let Some(step) = state.year.drag(*degrees, current) {
                if let Some(era) = step.crossed {
                    tracing::debug!(year = step.year, era = %era, "crossed into new era");
                }
                state.selection.set_year(Some(step.year));
            }
            Ok((true, vec![]))
        }
        Event::WheelReleased => {
            state.year.release();
            Ok((true, vec![]))
        }
        Event::WheelConfirmed => {
            state.year.release();
            Ok((true, vec![submit_events(state)]))
        }

        Event::TopicChosen(label) => match label {
            None => Ok((state.selection.set_topic(None), vec![])),
            Some(label) => match label.parse::<Topic>() {
                Ok(topic) => Ok((
                    state.selection.set_topic(Some(topic.label().to_string())),
                    vec![],
                )),
                Err(e) => {
                    tracing::debug!(error = %e, "ignoring unknown topic");
                    Ok((false, vec![]))
                }
            },
        },

        Event::LocationTyped(text) => {
            state.location.type_input(text);
            Ok((true, vec![]))
        }
        Event::LocationFocused => {
            state.location.open();
            Ok((true, vec![]))
        }
        Event::LocationChosen(name) => {
            let name = state.location.choose(name);
            state.selection.set_region(Some(name));
            Ok((true, vec![]))
        }

        Event::SearchTermChanged(term) => {
            state.selection.set_search_term(term);
            match state.suggestions.term_changed(term) {
                TermChange::Debounce { generation } => Ok((
                    true,
                    vec![Action::ScheduleSuggestionLookup {
                        generation,
                        delay: state.settings.debounce,
                    }],
                )),
                TermChange::Cleared => Ok((true, vec![])),
            }
        }
        Event::SuggestionDebounceElapsed { generation } => {
            let term = state.selection.state().search_term.clone();
            let context = state.suggestion_context();
            let actions = state
                .suggestions
                .debounce_elapsed(*generation, &term, context)
                .map(|request| Action::Send(Request::Suggestions(request)))
                .into_iter()
                .collect();
            Ok((false, actions))
        }
        Event::SuggestionsResolved { token, result } => {
            Ok((state.suggestions.resolve(*token, result.clone()), vec![]))
        }
        Event::SuggestionAccepted(index) => {
            let Some(title) = state.suggestions.accept(*index) else {
                return Ok((false, vec![]));
            };
            tracing::debug!(title = %title, "suggestion accepted");
            state.selection.set_search_term(&title);
            Ok((true, vec![submit_events(state)]))
        }
        Event::SearchFocused => {
            state.suggestions.reveal();
            Ok((true, vec![]))
        }
        Event::PointerDown(surface) => {
            let mut changed = false;
            if !matches!(surface, Surface::SearchInput | Surface::SuggestionList)
                && state.suggestions.is_visible()
            {
                state.suggestions.dismiss();
                changed = true;
            }
            if !matches!(surface, Surface::LocationInput | Surface::LocationList)
                && state.location.is_open()
            {
                state.location.close();
                changed = true;
            }
            Ok((changed, vec![]))
        }
        Event::SearchSubmitted => {
            let term = state.selection.state().search_term.trim().to_string();
            if term.is_empty() {
                return Ok((false, vec![]));
            }
            state.suggestions.dismiss();
            tracing::debug!(term = %term, "search submitted, opening detail");
            Ok((true, vec![Action::Navigate(Location::event(&term, false))]))
        }
        Event::FindEvents => Ok((true, vec![submit_events(state)])),
        Event::EventsResolved { token, result } => {
            match state.fetcher.resolve(*token, result.clone()) {
                None => Ok((false, vec![])),
                Some(FetchOutcome::Loaded(events)) => {
                    state.notice = None;
                    state.view_mode = ViewMode::ResultsOpen;
                    Ok((
                        true,
                        vec![
                            Action::PersistResults(events),
                            Action::ReplaceLocation(Location::explore_with_results()),
                        ],
                    ))
                }
                Some(FetchOutcome::Failed(reason)) => {
                    state.notice = Some(format!("Could not load events: {reason}"));
                    Ok((true, vec![]))
                }
            }
        }

        Event::DetailEntered {
            title,
            from_results,
        } => {
            let mut actions = silence_narration(state);
            leave_explore(state);
            state.page = Page::Event;
            let request = state.detail.open(title, *from_results);
            actions.push(Action::Send(Request::EventDetail(request)));
            Ok((true, actions))
        }
        Event::DetailLoaded {
            token,
            content,
            image_url,
        } => Ok((
            state
                .detail
                .loaded(*token, content.clone(), image_url.clone()),
            vec![],
        )),
        Event::NarrationToggled => {
            if state.page != Page::Event {
                return Ok((false, vec![]));
            }
            let action = match state.detail.toggle_narration() {
                NarrationCommand::Fetch { token, text } => Action::Send(Request::Speech { token, text }),
                NarrationCommand::Stop => Action::StopNarration,
            };
            Ok((true, vec![action]))
        }
        Event::NarrationReady { token, result } => {
            let before = state.detail.narration();
            state.detail.narration_ready(*token, result.clone());
            Ok((state.detail.narration() != before, vec![]))
        }
        Event::NarrationFinished => {
            state.detail.narration_finished();
            Ok((true, vec![]))
        }
        Event::DetailBack => {
            let mut actions = silence_narration(state);
            actions.push(Action::Navigate(state.detail.back_location()));
            Ok((false, actions))
        }

        Event::ChatEntered => {
            let actions = silence_narration(state);
            leave_explore(state);
            state.page = Page::Chat;
            Ok((true, actions))
        }
        Event::ChatSubmitted(text) => {
            let Some(question) = state.chat.send(text) else {
                return Ok((false, vec![]));
            };
            Ok((true, vec![Action::Send(Request::Chat(question))]))
        }
        Event::ChatAnswered { token, result } => {
            Ok((state.chat.answer(*token, result.clone()), vec![]))
        }

        Event::PageNotFound(path) => {
            let actions = silence_narration(state);
            leave_explore(state);
            tracing::debug!(path = %path, "no route");
            state.page = Page::NotFound(path.clone());
            Ok((true, actions))
        }
    }
}

/// Submits the current selection as an event query.
fn submit_events(state: &mut AppState) -> Action {
    state.suggestions.dismiss();
    let selection = state.selection.snapshot();
    Action::Send(Request::HistoricalEvents(state.fetcher.submit(&selection)))
}

/// Abandons explore-page requests so their completions are dropped.
fn leave_explore(state: &mut AppState) {
    state.restore_pending = false;
    state.fetcher.reset();
    state.suggestions.reset();
}

fn restyle_action(restyles: Vec<Restyle>) -> Vec<Action> {
    if restyles.is_empty() {
        return vec![];
    }
    tracing::trace!(count = restyles.len(), "map restyle");
    vec![Action::RestyleRegions(restyles)]
}

fn silence_narration(state: &mut AppState) -> Vec<Action> {
    if state.detail.narration() == Narration::Idle {
        return vec![];
    }
    state.detail.toggle_narration();
    vec![Action::StopNarration]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fetcher::FetchLifecycle;
    use crate::app::region_picker::Highlight;
    use crate::app::state::StateSettings;
    use crate::domain::EventCard;
    use serde_json::json;

    fn state() -> AppState {
        let mut state = AppState::new(StateSettings::default());
        handle_event(&mut state, &Event::ExploreEntered { restore_results: false }).unwrap();
        state
    }

    fn sent(actions: &[Action]) -> Vec<&Request> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::Send(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    fn event_token(actions: &[Action]) -> u64 {
        match sent(actions).as_slice() {
            [Request::HistoricalEvents(request)] => request.token,
            other => panic!("expected one event request, got {other:?}"),
        }
    }

    #[test]
    fn later_submission_wins() {
        let mut state = state();
        let (_, first) = handle_event(&mut state, &Event::FindEvents).unwrap();
        let (_, second) = handle_event(&mut state, &Event::FindEvents).unwrap();
        let a = event_token(&first);
        let b = event_token(&second);

        let resolved_b = Event::EventsResolved {
            token: b,
            result: Ok(json!({"events": [{"title": "B"}]})),
        };
        let resolved_a = Event::EventsResolved {
            token: a,
            result: Ok(json!({"events": [{"title": "A"}]})),
        };
        handle_event(&mut state, &resolved_b).unwrap();
        let (redraw, actions) = handle_event(&mut state, &resolved_a).unwrap();

        assert!(!redraw);
        assert!(actions.is_empty());
        assert_eq!(state.fetcher.events()[0].display_title(), "B");
    }

    #[test]
    fn short_terms_never_schedule_lookups() {
        let mut state = state();
        for term in ["", "a", "ab", " ab "] {
            let (_, actions) =
                handle_event(&mut state, &Event::SearchTermChanged(term.to_string())).unwrap();
            assert!(actions.is_empty(), "term {term:?} scheduled {actions:?}");
        }
    }

    #[test]
    fn only_latest_debounce_issues_a_request() {
        let mut state = state();
        let mut generations = Vec::new();
        for term in ["nap", "napo", "napol"] {
            let (_, actions) =
                handle_event(&mut state, &Event::SearchTermChanged(term.to_string())).unwrap();
            if let [Action::ScheduleSuggestionLookup { generation, .. }] = actions.as_slice() {
                generations.push(*generation);
            }
        }

        let issued: usize = generations
            .iter()
            .map(|&generation| {
                let (_, actions) = handle_event(
                    &mut state,
                    &Event::SuggestionDebounceElapsed { generation },
                )
                .unwrap();
                sent(&actions).len()
            })
            .sum();

        assert_eq!(generations.len(), 3);
        assert_eq!(issued, 1);
    }

    #[test]
    fn title_only_event_renders_with_fallbacks() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::FindEvents).unwrap();
        let token = event_token(&actions);
        handle_event(
            &mut state,
            &Event::EventsResolved {
                token,
                result: Ok(json!({"events": [{"title": "X"}]})),
            },
        )
        .unwrap();

        let card = EventCard::from(&state.fetcher.events()[0]);
        assert_eq!(card.title, "X");
        assert_eq!(card.description, "No description available.");
        assert_eq!(card.era, "Unknown Era");
        assert_eq!(card.year, "N/A");
        assert_eq!(card.category, "General");
        assert_eq!(card.region, "Unknown Location");
    }

    #[test]
    fn empty_body_is_success_with_no_events() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::FindEvents).unwrap();
        let token = event_token(&actions);
        let (_, actions) = handle_event(
            &mut state,
            &Event::EventsResolved {
                token,
                result: Ok(json!({})),
            },
        )
        .unwrap();

        assert_eq!(state.fetcher.lifecycle(), &FetchLifecycle::Success(vec![]));
        assert_eq!(state.view_mode, ViewMode::ResultsOpen);
        assert!(actions.contains(&Action::PersistResults(vec![])));
    }

    #[test]
    fn last_clicked_region_is_the_only_selection() {
        let mut state = state();
        for id in ["FR", "DE", "EG"] {
            handle_event(&mut state, &Event::RegionClicked(id.to_string())).unwrap();
        }

        assert_eq!(state.region_picker.selected(), Some("EG"));
        assert_eq!(state.selection().region.as_deref(), Some("Egypt"));
    }

    #[test]
    fn out_of_range_year_keeps_last_valid_value() {
        let mut state = state();
        handle_event(&mut state, &Event::YearEntered("1800".to_string())).unwrap();
        handle_event(&mut state, &Event::YearEntered("5000".to_string())).unwrap();
        assert_eq!(state.selection().year, Some(1800));

        handle_event(&mut state, &Event::YearEntered("-4000".to_string())).unwrap();
        handle_event(&mut state, &Event::YearEntered("MDCCC".to_string())).unwrap();
        assert_eq!(state.selection().year, Some(1800));
    }

    #[test]
    fn hover_moving_on_restores_previous_region() {
        let mut state = state();
        handle_event(&mut state, &Event::RegionHovered(Some("FR".to_string()))).unwrap();
        let (_, actions) =
            handle_event(&mut state, &Event::RegionHovered(Some("ES".to_string()))).unwrap();

        assert_eq!(
            actions,
            vec![Action::RestyleRegions(vec![
                Restyle {
                    region_id: "FR".to_string(),
                    highlight: Highlight::Base,
                },
                Restyle {
                    region_id: "ES".to_string(),
                    highlight: Highlight::Hovered,
                },
            ])]
        );
    }

    #[test]
    fn clicking_a_region_restyles_old_and_new_selection() {
        let mut state = state();
        handle_event(&mut state, &Event::RegionClicked("FR".to_string())).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::RegionClicked("DE".to_string())).unwrap();

        assert_eq!(
            actions,
            vec![Action::RestyleRegions(vec![
                Restyle {
                    region_id: "FR".to_string(),
                    highlight: Highlight::Base,
                },
                Restyle {
                    region_id: "DE".to_string(),
                    highlight: Highlight::Selected,
                },
            ])]
        );
        let view = match state.compute_viewmodel().page {
            crate::ui::PageView::Explore(view) => view,
            other => panic!("expected explore page, got {other:?}"),
        };
        assert_eq!(view.map.selected.as_deref(), Some("DE"));
    }

    #[test]
    fn restoration_opens_results_without_network() {
        let mut state = AppState::new(StateSettings::default());
        let (_, entry) =
            handle_event(&mut state, &Event::ExploreEntered { restore_results: true }).unwrap();
        let cached = vec![EventSummary::titled("One"), EventSummary::titled("Two")];
        let (_, restored) =
            handle_event(&mut state, &Event::ResultsRestored(Some(cached.clone()))).unwrap();

        assert_eq!(entry, vec![Action::RestoreResults]);
        assert!(sent(&restored).is_empty());
        assert_eq!(state.view_mode, ViewMode::ResultsOpen);
        assert_eq!(state.fetcher.events(), cached.as_slice());
    }

    #[test]
    fn restoration_is_consumed_once() {
        let mut state = AppState::new(StateSettings::default());
        handle_event(&mut state, &Event::ExploreEntered { restore_results: true }).unwrap();
        handle_event(&mut state, &Event::ResultsRestored(None)).unwrap();
        let (redraw, _) = handle_event(
            &mut state,
            &Event::ResultsRestored(Some(vec![EventSummary::titled("late")])),
        )
        .unwrap();

        assert!(!redraw);
        assert_eq!(state.view_mode, ViewMode::Browsing);
    }

    #[test]
    fn france_1800_war_round_trip() {
        let mut state = state();
        handle_event(&mut state, &Event::RegionClicked("FR".to_string())).unwrap();
        handle_event(&mut state, &Event::YearEntered("1800".to_string())).unwrap();
        handle_event(&mut state, &Event::TopicChosen(Some("war".to_string()))).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::FindEvents).unwrap();
        let request = match sent(&actions).as_slice() {
            [Request::HistoricalEvents(request)] => (*request).clone(),
            other => panic!("unexpected requests {other:?}"),
        };
        assert_eq!(
            request.query.pairs(),
            [("place", "France"), ("year", "1800"), ("theme", "War")]
        );

        handle_event(
            &mut state,
            &Event::EventsResolved {
                token: request.token,
                result: Ok(json!({"events": [{"title": "A"}, {"title": "B"}]})),
            },
        )
        .unwrap();
        let titles: Vec<_> = state.fetcher.events().iter().map(EventSummary::display_title).collect();
        assert_eq!(titles, ["A", "B"]);
        assert_eq!(state.view_mode, ViewMode::ResultsOpen);

        let before = state.selection.snapshot();
        handle_event(&mut state, &Event::DismissResults).unwrap();
        assert_eq!(state.view_mode, ViewMode::Browsing);
        assert_eq!(state.selection.snapshot(), before);
    }

    #[test]
    fn failed_fetch_keeps_results_closed() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::FindEvents).unwrap();
        let token = event_token(&actions);
        let (_, actions) = handle_event(
            &mut state,
            &Event::EventsResolved {
                token,
                result: Err("HTTP 500".to_string()),
            },
        )
        .unwrap();

        assert!(actions.is_empty());
        assert_eq!(state.view_mode, ViewMode::Browsing);
        assert!(matches!(state.fetcher.lifecycle(), FetchLifecycle::Failure(_)));
        assert!(state.notice.is_some());
    }

    #[test]
    fn filter_changes_leave_results_open() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenResults).unwrap();
        handle_event(&mut state, &Event::RegionHovered(Some("IT".to_string()))).unwrap();
        handle_event(&mut state, &Event::RegionClicked("IT".to_string())).unwrap();
        handle_event(&mut state, &Event::SearchTermChanged("rome".to_string())).unwrap();

        assert_eq!(state.view_mode, ViewMode::ResultsOpen);
    }

    #[test]
    fn search_submission_goes_straight_to_detail() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchTermChanged("Battle of Hastings".to_string()))
            .unwrap();
        let (_, actions) = handle_event(&mut state, &Event::SearchSubmitted).unwrap();

        assert_eq!(
            actions,
            vec![Action::Navigate(Location::event("Battle of Hastings", false))]
        );
        assert!(sent(&actions).is_empty());
    }

    #[test]
    fn pointer_down_outside_hides_suggestions_but_keeps_term() {
        let mut state = state();
        let (_, actions) =
            handle_event(&mut state, &Event::SearchTermChanged("rome".to_string())).unwrap();
        let generation = match actions.as_slice() {
            [Action::ScheduleSuggestionLookup { generation, .. }] => *generation,
            other => panic!("unexpected {other:?}"),
        };
        handle_event(&mut state, &Event::SuggestionDebounceElapsed { generation }).unwrap();
        handle_event(
            &mut state,
            &Event::SuggestionsResolved {
                token: generation,
                result: Ok(vec!["Roman Empire".to_string()]),
            },
        )
        .unwrap();
        assert!(state.suggestions.is_visible());

        handle_event(&mut state, &Event::PointerDown(Surface::Map)).unwrap();

        assert!(!state.suggestions.is_visible());
        assert_eq!(state.selection().search_term, "rome");
    }

    #[test]
    fn unknown_topic_is_ignored() {
        let mut state = state();
        handle_event(&mut state, &Event::TopicChosen(Some("Art".to_string()))).unwrap();
        handle_event(&mut state, &Event::TopicChosen(Some("Cooking".to_string()))).unwrap();

        assert_eq!(state.selection().topic.as_deref(), Some("Art"));
    }

    #[test]
    fn detail_back_returns_to_results_when_entered_from_them() {
        let mut state = state();
        handle_event(
            &mut state,
            &Event::DetailEntered {
                title: "Battle of Waterloo".to_string(),
                from_results: true,
            },
        )
        .unwrap();
        let (_, actions) = handle_event(&mut state, &Event::DetailBack).unwrap();

        assert_eq!(actions, vec![Action::Navigate(Location::explore_with_results())]);
    }

    #[test]
    fn leaving_detail_stops_narration() {
        let mut state = state();
        handle_event(
            &mut state,
            &Event::DetailEntered {
                title: "Moon landing".to_string(),
                from_results: false,
            },
        )
        .unwrap();
        let (_, actions) = handle_event(&mut state, &Event::NarrationToggled).unwrap();
        let token = match actions.as_slice() {
            [Action::Send(Request::Speech { token, .. })] => *token,
            other => panic!("unexpected {other:?}"),
        };
        handle_event(&mut state, &Event::NarrationReady { token, result: Ok(()) }).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::DetailBack).unwrap();

        assert_eq!(actions[0], Action::StopNarration);
        assert_eq!(state.detail.narration(), Narration::Idle);
    }

    #[test]
    fn chat_question_is_sent() {
        let mut state = state();
        handle_event(&mut state, &Event::ChatEntered).unwrap();
        let (_, actions) =
            handle_event(&mut state, &Event::ChatSubmitted("Who was Ramses II?".to_string()))
                .unwrap();

        assert!(matches!(sent(&actions).as_slice(), [Request::Chat(q)] if q.text == "Who was Ramses II?"));
    }
}

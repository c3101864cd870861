//! Application layer: explore, detail and chat state plus the event handler.
//!
//! ```text
//! Input / Router → Event → handle_event → AppState mutations → Actions → Runtime
//!                              ↑                                          ↓
//!                              └──────────── request completions ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`selection`]: region/year/topic/search-term store with observers
//! - [`region_picker`]: map hover and selection
//! - [`suggestions`]: debounced suggestion lookups
//! - [`fetcher`]: event query composition and lifecycle
//! - [`year`], [`location`]: year control, time wheel and location picker
//! - [`detail`], [`chat`]: the single-event and assistant pages
//! - [`handler`], [`actions`], [`modes`], [`state`]: the state machine itself
//!
//! # Example
//!
//! ```rust
//! use timewheel::app::{handle_event, Action, AppState, Event, StateSettings};
//!
//! let mut state = AppState::new(StateSettings::default());
//! let (_, actions) = handle_event(&mut state, &Event::ExploreEntered { restore_results: true })?;
//! assert_eq!(actions, vec![Action::RestoreResults]);
//! # Ok::<(), timewheel::TimewheelError>(())
//! ```

pub mod actions;
pub mod chat;
pub mod detail;
pub mod fetcher;
pub mod handler;
pub mod location;
pub mod modes;
pub mod region_picker;
pub mod selection;
pub mod state;
pub mod suggestions;
pub mod year;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Page, Surface, ViewMode};
pub use selection::{SelectionField, SelectionObserver, SelectionState, SelectionStore};
pub use state::{AppState, StateSettings};

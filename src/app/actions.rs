//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never performs I/O itself. It
//! returns a list of actions that the runtime executes in order: network
//! requests, timers, result cache access, map restyles and navigation.

use crate::app::region_picker::Restyle;
use crate::client::Request;
use crate::domain::EventSummary;
use crate::infrastructure::Location;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Performs a network request; its completion comes back as an event.
    Send(Request),

    /// Fires `SuggestionDebounceElapsed { generation }` after `delay`.
    ScheduleSuggestionLookup {
        generation: u64,
        delay: Duration,
    },

    /// Overwrites the cached result set.
    PersistResults(Vec<EventSummary>),

    /// Reads the cached result set back; answered with `ResultsRestored`.
    RestoreResults,

    /// Rewrites the current location in place without entering a new view.
    /// Used to add or drop the results marker.
    ReplaceLocation(Location),

    /// Moves to another view.
    Navigate(Location),

    /// Highlight changes for map regions, in the order they must be applied.
    RestyleRegions(Vec<Restyle>),

    /// Stops narration playback.
    StopNarration,
}

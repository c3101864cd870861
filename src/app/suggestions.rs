//! Debounced, supersedable suggestion lookups for the free-text search box.
//!
//! Every keystroke bumps a generation counter. The runtime schedules a timer
//! tagged with that generation; when the timer fires for a generation that is
//! still current, one request is issued with the same number as its token. A
//! response is applied only if its token is still the current generation, so
//! neither stale timers nor stale responses can touch the list.

use crate::domain::Era;

/// Terms this short (in characters) never trigger a lookup.
pub const MIN_TERM_CHARS: usize = 2;

/// Optional context sent along with a term to narrow results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionContext {
    pub region: Option<String>,
    pub era: Option<Era>,
}

/// A lookup the runtime should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub token: u64,
    pub term: String,
    pub context: SuggestionContext,
}

/// Outcome of a term change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermChange {
    /// Start (or restart) the debounce timer for this generation.
    Debounce { generation: u64 },
    /// Term too short; list cleared and hidden without a lookup.
    Cleared,
}

#[derive(Debug, Clone)]
pub struct SuggestionFetcher {
    generation: u64,
    in_flight: Option<u64>,
    suggestions: Vec<String>,
    visible: bool,
    limit: usize,
}

impl SuggestionFetcher {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            generation: 0,
            in_flight: None,
            suggestions: Vec::new(),
            visible: false,
            limit,
        }
    }

    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// Records a new term. Any pending timer or in-flight lookup is superseded.
    pub fn term_changed(&mut self, term: &str) -> TermChange {
        self.generation += 1;
        self.in_flight = None;

        if is_too_short(term) {
            self.clear();
            return TermChange::Cleared;
        }

        TermChange::Debounce {
            generation: self.generation,
        }
    }

    /// Called when the debounce timer for `generation` fires.
    ///
    /// Returns the request to issue, or `None` if a newer keystroke superseded
    /// the timer or the term is too short.
    pub fn debounce_elapsed(
        &mut self,
        generation: u64,
        term: &str,
        context: SuggestionContext,
    ) -> Option<SuggestionRequest> {
        if generation != self.generation {
            tracing::trace!(generation, current = self.generation, "stale debounce timer");
            return None;
        }
        if is_too_short(term) {
            return None;
        }

        self.in_flight = Some(generation);
        tracing::debug!(token = generation, term = %term, "issuing suggestion lookup");

        Some(SuggestionRequest {
            token: generation,
            term: term.to_string(),
            context,
        })
    }

    /// Applies a lookup result. Returns `true` if it was current and applied.
    ///
    /// Failures empty and hide the list; they are never surfaced otherwise.
    pub fn resolve(&mut self, token: u64, result: Result<Vec<String>, String>) -> bool {
        if self.in_flight != Some(token) || token != self.generation {
            tracing::debug!(token, current = self.generation, "dropping superseded suggestions");
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(mut titles) => {
                titles.truncate(self.limit);
                tracing::debug!(count = titles.len(), "suggestions updated");
                self.visible = !titles.is_empty();
                self.suggestions = titles;
            }
            Err(reason) => {
                tracing::warn!(reason = %reason, "suggestion lookup failed");
                self.clear();
            }
        }
        true
    }

    /// Takes the suggestion at `index`, hiding the list.
    pub fn accept(&mut self, index: usize) -> Option<String> {
        let chosen = self.suggestions.get(index).cloned()?;
        self.generation += 1;
        self.in_flight = None;
        self.clear();
        Some(chosen)
    }

    /// Hides the list without clearing the term or the fetched entries.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Shows the list again if it has entries (e.g. when the input regains focus).
    pub fn reveal(&mut self) {
        self.visible = !self.suggestions.is_empty();
    }

    /// Forgets everything but keeps the generation counter monotonic.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.in_flight = None;
        self.clear();
    }

    fn clear(&mut self) {
        self.suggestions.clear();
        self.visible = false;
    }
}

fn is_too_short(term: &str) -> bool {
    term.trim().chars().count() <= MIN_TERM_CHARS
}

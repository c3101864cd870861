//! Typed location entry with a fuzzy-filtered dropdown.
//!
//! The dropdown opens when the user types or focuses the input and closes when
//! a location is chosen or the pointer goes down outside of it. Matching uses
//! the Skim fuzzy matcher; each match carries the character ranges to highlight.

use crate::domain::known_locations;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// A location offered in the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationMatch {
    pub name: &'static str,
    /// Matched `(start, end)` character ranges, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct LocationPicker {
    input: String,
    open: bool,
    locations: Vec<&'static str>,
}

impl Default for LocationPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationPicker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: String::new(),
            open: false,
            locations: known_locations(),
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn type_input(&mut self, text: &str) {
        text.clone_into(&mut self.input);
        self.open = true;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Picks `name` and closes the dropdown. Returns the name to store as the
    /// region selection.
    pub fn choose(&mut self, name: &str) -> String {
        name.clone_into(&mut self.input);
        self.open = false;
        self.input.clone()
    }

    /// Reflects a region picked elsewhere (e.g. on the map) without opening.
    pub fn mirror(&mut self, name: &str) {
        name.clone_into(&mut self.input);
    }

    /// Locations matching the current input, best first. Empty input lists all.
    #[must_use]
    pub fn matches(&self) -> Vec<LocationMatch> {
        let query = self.input.trim();
        if query.is_empty() {
            return self
                .locations
                .iter()
                .map(|&name| LocationMatch {
                    name,
                    highlight_ranges: Vec::new(),
                })
                .collect();
        }

        let matcher = SkimMatcherV2::default().ignore_case();
        let mut scored: Vec<(i64, usize, LocationMatch)> = self
            .locations
            .iter()
            .enumerate()
            .filter_map(|(position, &name)| {
                matcher.fuzzy_indices(name, query).map(|(score, indices)| {
                    (
                        score,
                        position,
                        LocationMatch {
                            name,
                            highlight_ranges: coalesce_ranges(&indices),
                        },
                    )
                })
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        scored.into_iter().map(|(_, _, m)| m).collect()
    }
}

/// Folds sorted match indices into contiguous `(start, end)` ranges.
#[must_use]
pub fn coalesce_ranges(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut current: Option<(usize, usize)> = None;

    for &idx in indices {
        current = match current {
            Some((start, end)) if idx == end => Some((start, idx + 1)),
            Some(range) => {
                ranges.push(range);
                Some((idx, idx + 1))
            }
            None => Some((idx, idx + 1)),
        };
    }

    if let Some(range) = current {
        ranges.push(range);
    }
    ranges
}

//! Hover and selection tracking for the world map's hit regions.
//!
//! The map itself is an external collaborator that reports which region the
//! pointer is over and which region was clicked. [`RegionPicker`] turns those
//! reports into the highlight each region should carry and the tooltip text, and
//! resolves a clicked region to the location name written into the selection.

use crate::domain::resolve_region_name;

/// Visual state a single region should be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Base,
    Hovered,
    Selected,
}

/// A highlight change the map should apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restyle {
    pub region_id: String,
    pub highlight: Highlight,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionPicker {
    hovered: Option<String>,
    selected: Option<String>,
    pointer: Option<(f64, f64)>,
    /// Last hovered region that is not selected and still carries the hover
    /// highlight. Holds at most one region.
    lingering: Option<String>,
}

impl RegionPicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub const fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    /// Display name of the hovered region, for the tooltip.
    #[must_use]
    pub fn hovered_name(&self) -> Option<&str> {
        self.hovered.as_deref().map(resolve_region_name)
    }

    /// Records the pointer entering `region_id`, or leaving the map with `None`.
    ///
    /// Returns the restyles to apply: the previously lingering region goes back
    /// to its base look, the new one (unless selected) gets the hover look.
    pub fn on_hover(&mut self, region_id: Option<&str>) -> Vec<Restyle> {
        self.hovered = region_id.map(str::to_string);
        if region_id.is_none() {
            self.pointer = None;
        }

        let mut restyles = Vec::new();
        if self.lingering.as_deref() == region_id {
            return restyles;
        }

        if let Some(previous) = self.lingering.take() {
            restyles.push(Restyle {
                highlight: self.highlight(&previous),
                region_id: previous,
            });
        }

        if let Some(id) = region_id {
            if self.selected.as_deref() != Some(id) {
                self.lingering = Some(id.to_string());
                restyles.push(Restyle {
                    region_id: id.to_string(),
                    highlight: Highlight::Hovered,
                });
            }
        }

        restyles
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    /// Selects `region_id`, deselecting the previous selection.
    ///
    /// Returns the resolved location name together with the restyles to apply.
    pub fn on_select(&mut self, region_id: &str) -> (String, Vec<Restyle>) {
        let mut restyles = Vec::new();

        let previous = self.selected.replace(region_id.to_string());
        if let Some(previous) = previous.filter(|p| p != region_id) {
            restyles.push(Restyle {
                highlight: self.highlight(&previous),
                region_id: previous,
            });
        }

        if self.lingering.as_deref() == Some(region_id) {
            self.lingering = None;
        }

        restyles.push(Restyle {
            region_id: region_id.to_string(),
            highlight: Highlight::Selected,
        });

        let name = resolve_region_name(region_id).to_string();
        tracing::debug!(region_id = %region_id, region_name = %name, "region selected");
        (name, restyles)
    }

    /// Highlight for `region_id` given the current hover and selection.
    #[must_use]
    pub fn highlight(&self, region_id: &str) -> Highlight {
        if self.selected.as_deref() == Some(region_id) {
            Highlight::Selected
        } else if self.hovered.as_deref() == Some(region_id) {
            Highlight::Hovered
        } else {
            Highlight::Base
        }
    }
}

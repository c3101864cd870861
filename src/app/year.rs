//! Year selection: typed entry, throttled scroll stepping, and the time wheel.
//!
//! Typed years outside the configured range are rejected; scroll and wheel
//! steps are clamped to it. The wheel
//! accumulates drag rotation and steps by [`YEAR_STEP`] once enough rotation has
//! built up, showing an era banner for as long as the drag lasts.

use crate::domain::Era;
use std::time::{Duration, Instant};

/// Minimum time between two scroll steps.
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(300);
/// Years moved per wheel step.
pub const YEAR_STEP: i32 = 5;
/// Scale applied to drag degrees before accumulating.
pub const ROTATION_SENSITIVITY: f64 = 0.4;
/// Accumulated rotation needed for one wheel step.
pub const ROTATION_THRESHOLD: f64 = 5.0;

/// Result of typing a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearEntry {
    /// Store this value (`None` clears the year).
    Accepted(Option<i32>),
    /// Input was not a year; keep the last valid value.
    Rejected,
}

/// One wheel drag update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelStep {
    pub year: i32,
    /// Set when this step moved the year into a different era.
    pub crossed: Option<Era>,
}

#[derive(Debug, Clone)]
pub struct YearControl {
    min: i32,
    max: i32,
    last_scroll: Option<Instant>,
    accumulated: f64,
    banner: Option<Era>,
}

impl YearControl {
    /// `max` below `min` is treated as `min`.
    #[must_use]
    pub fn new(min: i32, max: i32) -> Self {
        Self {
            min,
            max: max.max(min),
            last_scroll: None,
            accumulated: 0.0,
            banner: None,
        }
    }

    #[must_use]
    pub const fn bounds(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn clamp(&self, year: i32) -> i32 {
        year.clamp(self.min, self.max)
    }

    /// Parses typed input. Empty input clears the year; anything that is not a
    /// signed integer inside the range is rejected.
    #[must_use]
    pub fn enter(&self, text: &str) -> YearEntry {
        let text = text.trim();
        if text.is_empty() {
            return YearEntry::Accepted(None);
        }
        match text.parse::<i32>() {
            Ok(year) if (self.min..=self.max).contains(&year) => YearEntry::Accepted(Some(year)),
            Ok(year) => {
                tracing::debug!(year, min = self.min, max = self.max, "typed year out of range");
                YearEntry::Rejected
            }
            Err(e) => {
                tracing::debug!(input = %text, error = %e, "rejected year input");
                YearEntry::Rejected
            }
        }
    }

    /// Steps one year in the direction of `delta` unless the previous step was
    /// less than [`SCROLL_THROTTLE`] ago. Returns the new year, or `None` when
    /// throttled or `delta` is zero.
    pub fn scroll(&mut self, delta: i32, current: Option<i32>, now: Instant) -> Option<i32> {
        if delta == 0 {
            return None;
        }
        if let Some(last) = self.last_scroll {
            if now.saturating_duration_since(last) < SCROLL_THROTTLE {
                return None;
            }
        }
        self.last_scroll = Some(now);

        let base = current.unwrap_or(self.max);
        Some(self.clamp(base.saturating_add(delta.signum())))
    }

    /// Feeds `degrees` of drag rotation. Returns a step once the accumulated
    /// rotation crosses the threshold in either direction.
    pub fn drag(&mut self, degrees: f64, current: Option<i32>) -> Option<WheelStep> {
        let base = current.unwrap_or(self.max);
        if self.banner.is_none() {
            self.banner = Some(Era::of_year(base));
        }

        self.accumulated += degrees * ROTATION_SENSITIVITY;
        if self.accumulated.abs() < ROTATION_THRESHOLD {
            return None;
        }

        let direction = if self.accumulated > 0.0 { 1 } else { -1 };
        self.accumulated = 0.0;

        let year = self.clamp(base.saturating_add(YEAR_STEP * direction));
        let crossed = Era::crossed(base, year);
        self.banner = Some(Era::of_year(year));

        Some(WheelStep { year, crossed })
    }

    /// Ends a drag, dropping partial rotation and the banner.
    pub fn release(&mut self) {
        self.accumulated = 0.0;
        self.banner = None;
    }

    /// Era banner text while the wheel is being dragged.
    #[must_use]
    pub fn banner(&self) -> Option<String> {
        self.banner.map(Era::banner)
    }

    /// The years shown around `current`: one above, the current one, one below,
    /// restricted to the range.
    #[must_use]
    pub fn neighbors(&self, current: i32) -> Vec<i32> {
        [current.saturating_add(1), current, current.saturating_sub(1)]
            .into_iter()
            .filter(|y| (self.min..=self.max).contains(y))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control() -> YearControl {
        YearControl::new(-3000, 2025)
    }

    #[test]
    fn typed_years_outside_range_are_rejected() {
        let control = control();
        assert_eq!(control.enter("1800"), YearEntry::Accepted(Some(1800)));
        assert_eq!(control.enter("-3000"), YearEntry::Accepted(Some(-3000)));
        assert_eq!(control.enter("2025"), YearEntry::Accepted(Some(2025)));
        assert_eq!(control.enter("-5000"), YearEntry::Rejected);
        assert_eq!(control.enter("99999"), YearEntry::Rejected);
    }

    #[test]
    fn invalid_input_is_rejected_and_empty_clears() {
        let control = control();
        assert_eq!(control.enter("eighteen hundred"), YearEntry::Rejected);
        assert_eq!(control.enter("18.5"), YearEntry::Rejected);
        assert_eq!(control.enter("   "), YearEntry::Accepted(None));
    }

    #[test]
    fn scroll_is_throttled() {
        let mut control = control();
        let start = Instant::now();

        assert_eq!(control.scroll(1, Some(1900), start), Some(1901));
        assert_eq!(control.scroll(1, Some(1901), start + Duration::from_millis(100)), None);
        assert_eq!(
            control.scroll(-3, Some(1901), start + Duration::from_millis(350)),
            Some(1900)
        );
    }

    #[test]
    fn scroll_from_unset_starts_at_upper_bound() {
        let mut control = control();
        assert_eq!(control.scroll(1, None, Instant::now()), Some(2025));
    }

    #[test]
    fn wheel_steps_after_enough_rotation() {
        let mut control = control();
        assert_eq!(control.drag(10.0, Some(1900)), None);
        let step = control.drag(3.0, Some(1900)).unwrap();

        assert_eq!(step.year, 1905);
        assert_eq!(step.crossed, None);
        assert_eq!(control.banner().as_deref(), Some("1900s Era"));
    }

    #[test]
    fn wheel_reports_era_crossing() {
        let mut control = control();
        let step = control.drag(-20.0, Some(1802)).unwrap();

        assert_eq!(step.year, 1797);
        assert_eq!(step.crossed, Some(Era::EarlyModern));
        assert_eq!(control.banner().as_deref(), Some("Early Modern Era"));
    }

    #[test]
    fn release_hides_banner_and_drops_partial_rotation() {
        let mut control = control();
        control.drag(10.0, Some(1500));
        control.release();

        assert_eq!(control.banner(), None);
        assert_eq!(control.drag(3.0, Some(1500)), None);
    }

    #[test]
    fn neighbors_respect_bounds() {
        let control = control();
        assert_eq!(control.neighbors(2025), vec![2025, 2024]);
        assert_eq!(control.neighbors(1800), vec![1801, 1800, 1799]);
    }
}

//! Single-event detail view: summary text, illustration, and narration.

use crate::infrastructure::Location;

pub const LOADING_CONTENT: &str = "Loading event details...";
pub const MISSING_CONTENT: &str = "No details available.";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

/// Narration playback state. Audio output itself happens outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Narration {
    #[default]
    Idle,
    Fetching { token: u64 },
    Playing,
}

/// What toggling narration asks the runtime to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrationCommand {
    Fetch { token: u64, text: String },
    Stop,
}

/// Text and image lookups for a newly opened title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub token: u64,
    pub title: String,
}

#[derive(Debug, Clone, Default)]
pub struct EventDetail {
    title: String,
    from_results: bool,
    content: String,
    image_url: String,
    narration: Narration,
    token: u64,
    speech_token: u64,
}

impl EventDetail {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[must_use]
    pub const fn narration(&self) -> Narration {
        self.narration
    }

    /// Shows `title` with loading placeholders and returns the lookups to run.
    pub fn open(&mut self, title: &str, from_results: bool) -> DetailRequest {
        self.token += 1;
        title.clone_into(&mut self.title);
        self.from_results = from_results;
        self.content = LOADING_CONTENT.to_string();
        self.image_url = PLACEHOLDER_IMAGE.to_string();
        self.narration = Narration::Idle;

        DetailRequest {
            token: self.token,
            title: self.title.clone(),
        }
    }

    /// Applies lookup results for `token`. Empty or failed lookups fall back to
    /// the placeholders. Returns `false` for a stale token.
    pub fn loaded(
        &mut self,
        token: u64,
        content: Result<String, String>,
        image_url: Result<String, String>,
    ) -> bool {
        if token != self.token {
            tracing::debug!(token, current = self.token, "dropping stale detail response");
            return false;
        }

        self.content = match content {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => MISSING_CONTENT.to_string(),
            Err(reason) => {
                tracing::warn!(reason = %reason, "event info lookup failed");
                MISSING_CONTENT.to_string()
            }
        };
        self.image_url = match image_url {
            Ok(url) if !url.trim().is_empty() => url,
            Ok(_) => PLACEHOLDER_IMAGE.to_string(),
            Err(reason) => {
                tracing::warn!(reason = %reason, "event image lookup failed");
                PLACEHOLDER_IMAGE.to_string()
            }
        };
        true
    }

    /// Play/pause button. Stops playback when playing or fetching, otherwise
    /// requests speech for the title followed by the content.
    pub fn toggle_narration(&mut self) -> NarrationCommand {
        match self.narration {
            Narration::Playing | Narration::Fetching { .. } => {
                self.speech_token += 1;
                self.narration = Narration::Idle;
                NarrationCommand::Stop
            }
            Narration::Idle => {
                self.speech_token += 1;
                self.narration = Narration::Fetching { token: self.speech_token };
                NarrationCommand::Fetch {
                    token: self.speech_token,
                    text: format!("{}. {}", self.title, self.content),
                }
            }
        }
    }

    /// Speech for `token` arrived (or failed). Returns `true` if playback starts.
    pub fn narration_ready(&mut self, token: u64, result: Result<(), String>) -> bool {
        if self.narration != (Narration::Fetching { token }) {
            return false;
        }
        match result {
            Ok(()) => {
                self.narration = Narration::Playing;
                true
            }
            Err(reason) => {
                tracing::warn!(reason = %reason, "speech lookup failed");
                self.narration = Narration::Idle;
                false
            }
        }
    }

    pub fn narration_finished(&mut self) {
        if self.narration == Narration::Playing {
            self.narration = Narration::Idle;
        }
    }

    /// Where "back" leads: the reopened results when the view was entered from
    /// them, the plain explore view otherwise.
    #[must_use]
    pub fn back_location(&self) -> Location {
        if self.from_results {
            Location::explore_with_results()
        } else {
            Location::explore()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_shows_placeholders() {
        let mut detail = EventDetail::default();
        let request = detail.open("Battle of Waterloo", true);

        assert_eq!(request.title, "Battle of Waterloo");
        assert_eq!(detail.content(), LOADING_CONTENT);
        assert_eq!(detail.image_url(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn failed_or_empty_lookups_fall_back() {
        let mut detail = EventDetail::default();
        let request = detail.open("Waterloo", false);

        assert!(detail.loaded(request.token, Ok("  ".to_string()), Err("404".to_string())));

        assert_eq!(detail.content(), MISSING_CONTENT);
        assert_eq!(detail.image_url(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn stale_detail_is_dropped() {
        let mut detail = EventDetail::default();
        let first = detail.open("A", false);
        detail.open("B", false);

        assert!(!detail.loaded(first.token, Ok("about A".to_string()), Ok("/a.jpg".to_string())));
        assert_eq!(detail.content(), LOADING_CONTENT);
    }

    #[test]
    fn narration_toggles() {
        let mut detail = EventDetail::default();
        let request = detail.open("Hastings", false);
        detail.loaded(request.token, Ok("Norman conquest.".to_string()), Ok("/h.jpg".to_string()));

        let NarrationCommand::Fetch { token, text } = detail.toggle_narration() else {
            panic!("expected a fetch");
        };
        assert_eq!(text, "Hastings. Norman conquest.");

        assert!(detail.narration_ready(token, Ok(())));
        assert_eq!(detail.narration(), Narration::Playing);

        assert_eq!(detail.toggle_narration(), NarrationCommand::Stop);
        assert_eq!(detail.narration(), Narration::Idle);
    }

    #[test]
    fn speech_arriving_after_stop_is_ignored() {
        let mut detail = EventDetail::default();
        detail.open("Hastings", false);
        let NarrationCommand::Fetch { token, .. } = detail.toggle_narration() else {
            panic!("expected a fetch");
        };
        detail.toggle_narration();

        assert!(!detail.narration_ready(token, Ok(())));
        assert_eq!(detail.narration(), Narration::Idle);
    }

    #[test]
    fn back_respects_marker() {
        let mut detail = EventDetail::default();
        detail.open("x", true);
        assert!(detail.back_location().has_results_marker());

        detail.open("x", false);
        assert!(!detail.back_location().has_results_marker());
    }
}

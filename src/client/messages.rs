//! Outbound request types handed from the event handler to the runtime.
//!
//! Each request carries the token its response must echo back, so the state
//! machine can recognise and drop responses that were superseded while in
//! flight.

use crate::app::chat::ChatQuestion;
use crate::app::detail::DetailRequest;
use crate::app::fetcher::EventRequest;
use crate::app::suggestions::SuggestionRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `GET /historical-events`.
    HistoricalEvents(EventRequest),

    /// Open-text lookup against the suggestion provider.
    Suggestions(SuggestionRequest),

    /// `GET /eventinfo` and `GET /get_event_image` for one title.
    EventDetail(DetailRequest),

    /// `GET /tts` for the narration text.
    Speech {
        token: u64,
        text: String,
    },

    /// `GET /chatbot`.
    Chat(ChatQuestion),
}

impl Request {
    /// Short name used in span and log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::HistoricalEvents(_) => "historical_events",
            Self::Suggestions(_) => "suggestions",
            Self::EventDetail(_) => "event_detail",
            Self::Speech { .. } => "speech",
            Self::Chat(_) => "chat",
        }
    }

    #[must_use]
    pub const fn token(&self) -> u64 {
        match self {
            Self::HistoricalEvents(r) => r.token,
            Self::Suggestions(r) => r.token,
            Self::EventDetail(r) => r.token,
            Self::Speech { token, .. } => *token,
            Self::Chat(q) => q.token,
        }
    }
}

//! Request execution.
//!
//! [`Executor::execute`] performs one [`Request`] against the configured
//! backends and turns the outcome into the completion [`Event`] the state
//! machine expects. Failures never escape as errors: they are logged here and
//! delivered as the `Err` side of the completion.

use crate::app::Event;
use crate::client::backend::HistoryBackend;
use crate::client::messages::Request;
use crate::client::suggestions::SuggestionProvider;
use crate::domain::error::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared handles to everything a request may need.
#[derive(Clone)]
pub struct Executor {
    history: Arc<dyn HistoryBackend>,
    suggestions: Arc<dyn SuggestionProvider>,
    suggestion_limit: usize,
    narration_file: PathBuf,
}

impl Executor {
    #[must_use]
    pub fn new(
        history: Arc<dyn HistoryBackend>,
        suggestions: Arc<dyn SuggestionProvider>,
        suggestion_limit: usize,
        narration_file: PathBuf,
    ) -> Self {
        Self {
            history,
            suggestions,
            suggestion_limit,
            narration_file,
        }
    }

    /// Where fetched narration audio is written before playback.
    #[must_use]
    pub fn narration_file(&self) -> &PathBuf {
        &self.narration_file
    }

    /// Logs the outcome of `operation` and flattens errors to their message.
    fn handle_result<T>(operation: &str, result: Result<T>) -> std::result::Result<T, String> {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "request successful");
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "request failed");
                Err(format!("{operation}: {e}"))
            }
        }
    }

    pub async fn execute(&self, request: Request) -> Event {
        match request {
            Request::HistoricalEvents(request) => {
                let result = self.history.historical_events(&request.query).await;
                Event::EventsResolved {
                    token: request.token,
                    result: Self::handle_result("historical events", result),
                }
            }
            Request::Suggestions(request) => {
                let result = self
                    .suggestions
                    .suggest(&request.term, &request.context, self.suggestion_limit)
                    .await;
                Event::SuggestionsResolved {
                    token: request.token,
                    result: Self::handle_result("suggestions", result),
                }
            }
            Request::EventDetail(request) => {
                let (content, image_url) = tokio::join!(
                    self.history.event_info(&request.title),
                    self.history.event_image(&request.title)
                );
                Event::DetailLoaded {
                    token: request.token,
                    content: Self::handle_result("event info", content),
                    image_url: Self::handle_result("event image", image_url),
                }
            }
            Request::Speech { token, text } => {
                let result = match self.history.speech(&text).await {
                    Ok(audio) => tokio::fs::write(&self.narration_file, audio)
                        .await
                        .map_err(Into::into),
                    Err(e) => Err(e),
                };
                Event::NarrationReady {
                    token,
                    result: Self::handle_result("speech", result),
                }
            }
            Request::Chat(question) => {
                let result = self.history.ask(&question.text).await;
                Event::ChatAnswered {
                    token: question.token,
                    result: Self::handle_result("assistant", result),
                }
            }
        }
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("suggestion_limit", &self.suggestion_limit)
            .field("narration_file", &self.narration_file)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fetcher::{EventQuery, EventRequest};
    use crate::app::suggestions::{SuggestionContext, SuggestionRequest};
    use crate::domain::error::TimewheelError;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct Canned;

    #[async_trait]
    impl HistoryBackend for Canned {
        async fn historical_events(&self, query: &EventQuery) -> Result<Value> {
            Ok(json!({"events": [{"title": query.place.clone()}]}))
        }
        async fn event_info(&self, _title: &str) -> Result<String> {
            Ok("Summary".to_string())
        }
        async fn event_image(&self, _title: &str) -> Result<String> {
            Err(TimewheelError::Status {
                endpoint: "/get_event_image".to_string(),
                status: 404,
            })
        }
        async fn speech(&self, text: &str) -> Result<Vec<u8>> {
            Ok(text.as_bytes().to_vec())
        }
        async fn ask(&self, _question: &str) -> Result<String> {
            Ok("42".to_string())
        }
    }

    #[async_trait]
    impl SuggestionProvider for Canned {
        async fn suggest(
            &self,
            term: &str,
            _context: &SuggestionContext,
            limit: usize,
        ) -> Result<Vec<String>> {
            Ok(std::iter::repeat(term.to_string()).take(limit + 5).collect())
        }
    }

    fn executor(dir: &std::path::Path) -> Executor {
        Executor::new(Arc::new(Canned), Arc::new(Canned), 3, dir.join("narration.mp3"))
    }

    #[tokio::test]
    async fn event_request_echoes_token() {
        let dir = tempfile::tempdir().unwrap();
        let event = executor(dir.path())
            .execute(Request::HistoricalEvents(EventRequest {
                token: 7,
                query: EventQuery {
                    place: "Egypt".to_string(),
                    ..EventQuery::default()
                },
            }))
            .await;

        assert_eq!(
            event,
            Event::EventsResolved {
                token: 7,
                result: Ok(json!({"events": [{"title": "Egypt"}]})),
            }
        );
    }

    #[tokio::test]
    async fn detail_failures_are_reported_per_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let event = executor(dir.path())
            .execute(Request::EventDetail(crate::app::detail::DetailRequest {
                token: 2,
                title: "Pompeii".to_string(),
            }))
            .await;

        let Event::DetailLoaded {
            token,
            content,
            image_url,
        } = event
        else {
            panic!("unexpected completion");
        };
        assert_eq!(token, 2);
        assert_eq!(content, Ok("Summary".to_string()));
        assert!(image_url.unwrap_err().contains("404"));
    }

    #[tokio::test]
    async fn narration_audio_lands_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let executor = executor(dir.path());
        let event = executor
            .execute(Request::Speech {
                token: 4,
                text: "Pompeii. Buried.".to_string(),
            })
            .await;

        assert_eq!(event, Event::NarrationReady { token: 4, result: Ok(()) });
        assert_eq!(
            std::fs::read(executor.narration_file()).unwrap(),
            b"Pompeii. Buried."
        );
    }

    #[tokio::test]
    async fn suggestion_request_passes_limit() {
        let dir = tempfile::tempdir().unwrap();
        let event = executor(dir.path())
            .execute(Request::Suggestions(SuggestionRequest {
                token: 9,
                term: "rome".to_string(),
                context: SuggestionContext::default(),
            }))
            .await;

        let Event::SuggestionsResolved { token, result } = event else {
            panic!("unexpected completion");
        };
        assert_eq!(token, 9);
        assert_eq!(result.unwrap().len(), 8);
    }
}

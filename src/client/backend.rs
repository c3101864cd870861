//! History backend: event search, event details, speech and the assistant.

use crate::app::fetcher::EventQuery;
use crate::domain::error::{Result, TimewheelError};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Operations the history backend offers.
///
/// Implementations return raw payloads; interpreting them (fallbacks, empty
/// lists, lifecycle changes) is left to the application layer.
#[async_trait]
pub trait HistoryBackend: Send + Sync {
    /// `GET /historical-events`. Returns the decoded JSON body.
    async fn historical_events(&self, query: &EventQuery) -> Result<Value>;

    /// `GET /eventinfo`. Returns the summary text for `title`.
    async fn event_info(&self, title: &str) -> Result<String>;

    /// `GET /get_event_image`. Returns an image URL for `title`.
    async fn event_image(&self, title: &str) -> Result<String>;

    /// `GET /tts`. Returns encoded audio.
    async fn speech(&self, text: &str) -> Result<Vec<u8>>;

    /// `GET /chatbot`. Returns the assistant's answer.
    async fn ask(&self, question: &str) -> Result<String>;
}

#[derive(Deserialize)]
struct TextReply {
    #[serde(default)]
    response: Option<String>,
}

#[derive(Deserialize)]
struct ImageReply {
    #[serde(default)]
    image_url: Option<String>,
}

/// [`HistoryBackend`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Response> {
        let response = self
            .client
            .get(format!("{}{endpoint}", self.base_url))
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TimewheelError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let body = self.get(endpoint, query).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL, Duration::from_secs(10))
    }
}

#[async_trait]
impl HistoryBackend for HttpBackend {
    async fn historical_events(&self, query: &EventQuery) -> Result<Value> {
        self.get_json("/historical-events", &query.pairs()).await
    }

    async fn event_info(&self, title: &str) -> Result<String> {
        let reply: TextReply = self.get_json("/eventinfo", &[("question", title)]).await?;
        Ok(reply.response.unwrap_or_default())
    }

    async fn event_image(&self, title: &str) -> Result<String> {
        let reply: ImageReply = self
            .get_json("/get_event_image", &[("event_name", title)])
            .await?;
        Ok(reply.image_url.unwrap_or_default())
    }

    async fn speech(&self, text: &str) -> Result<Vec<u8>> {
        let audio = self.get("/tts", &[("text", text)]).await?.bytes().await?;
        Ok(audio.to_vec())
    }

    async fn ask(&self, question: &str) -> Result<String> {
        let reply: TextReply = self.get_json("/chatbot", &[("question", question)]).await?;
        Ok(reply.response.unwrap_or_default())
    }
}

//! Suggestion provider for the free-text search box.

use crate::app::suggestions::SuggestionContext;
use crate::domain::error::{Result, TimewheelError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_SUGGESTION_URL: &str = "https://en.wikipedia.org/w/api.php";

#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Titles matching `term`, best first.
    async fn suggest(&self, term: &str, context: &SuggestionContext, limit: usize)
        -> Result<Vec<String>>;
}

/// Provider speaking the OpenSearch suggestions format
/// (`[query, [titles...], [descriptions...], [urls...]]`).
#[derive(Debug, Clone)]
pub struct OpenSearchProvider {
    client: Client,
    endpoint: String,
}

impl OpenSearchProvider {
    #[must_use]
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }
}

impl Default for OpenSearchProvider {
    fn default() -> Self {
        Self::new(DEFAULT_SUGGESTION_URL, Duration::from_secs(10))
    }
}

#[async_trait]
impl SuggestionProvider for OpenSearchProvider {
    async fn suggest(
        &self,
        term: &str,
        context: &SuggestionContext,
        limit: usize,
    ) -> Result<Vec<String>> {
        let search = search_text(term, context);
        let limit = limit.to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("action", "opensearch"),
                ("search", search.as_str()),
                ("limit", limit.as_str()),
                ("namespace", "0"),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TimewheelError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body: Value = serde_json::from_slice(&response.bytes().await?)?;
        parse_opensearch(&body)
    }
}

/// Joins the term with whatever context is known.
#[must_use]
pub fn search_text(term: &str, context: &SuggestionContext) -> String {
    let mut search = term.trim().to_string();
    if let Some(region) = context.region.as_deref() {
        search.push(' ');
        search.push_str(region);
    }
    if let Some(era) = context.era {
        search.push(' ');
        search.push_str(era.label());
    }
    search
}

/// Extracts the title list (index 1) of an OpenSearch reply. Non-string
/// entries are skipped.
///
/// # Errors
///
/// Returns [`TimewheelError::Decode`] when the reply has no title list.
pub fn parse_opensearch(body: &Value) -> Result<Vec<String>> {
    let titles = body
        .get(1)
        .and_then(Value::as_array)
        .ok_or_else(|| TimewheelError::Decode("opensearch reply without title list".to_string()))?;

    Ok(titles
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Era;
    use serde_json::json;

    #[test]
    fn titles_come_from_second_element() {
        let body = json!(["napo", ["Napoleon", "Napoleonic Wars", 7], [], []]);
        assert_eq!(
            parse_opensearch(&body).unwrap(),
            vec!["Napoleon".to_string(), "Napoleonic Wars".to_string()]
        );
    }

    #[test]
    fn reply_without_titles_is_a_decode_error() {
        assert!(matches!(
            parse_opensearch(&json!({"error": "nope"})),
            Err(TimewheelError::Decode(_))
        ));
    }

    #[test]
    fn context_is_appended_to_term() {
        let context = SuggestionContext {
            region: Some("France".to_string()),
            era: Some(Era::NineteenthCentury),
        };
        assert_eq!(search_text(" revolution ", &context), "revolution France 1800s");
        assert_eq!(search_text("plague", &SuggestionContext::default()), "plague");
    }
}

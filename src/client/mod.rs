//! Network side of the application: the history backend, the suggestion
//! provider, and the executor that turns [`Request`]s into completion events.

pub mod backend;
pub mod handler;
pub mod messages;
pub mod suggestions;

pub use backend::{HistoryBackend, HttpBackend, DEFAULT_BACKEND_URL};
pub use handler::Executor;
pub use messages::Request;
pub use suggestions::{parse_opensearch, OpenSearchProvider, SuggestionProvider, DEFAULT_SUGGESTION_URL};

//! Error types for timewheel.
//!
//! All fallible operations in the crate return [`Result`], whose error side is
//! [`TimewheelError`]. Most of these errors never reach the presentation layer:
//! the fetchers translate them into lifecycle states and log them instead.

use thiserror::Error;

/// The main error type for timewheel operations.
///
/// Variants wrap the transport, decoding and persistence failures that can occur
/// while talking to the history backend, the suggestion provider or the session
/// store.
#[derive(Debug, Error)]
pub enum TimewheelError {
    /// Session storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP request could not be sent or timed out.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("Unexpected status {status} from {endpoint}")]
    Status {
        /// Endpoint path that produced the status.
        endpoint: String,
        /// HTTP status code returned.
        status: u16,
    },

    /// The response body did not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A navigation location could not be parsed.
    #[error("Navigation error: {0}")]
    Navigation(String),
}

impl From<serde_json::Error> for TimewheelError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// A specialized `Result` type for timewheel operations.
pub type Result<T> = std::result::Result<T, TimewheelError>;

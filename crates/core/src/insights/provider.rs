//! Text-generation provider abstraction.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a text-generation backend.
#[derive(Debug, Error)]
pub enum InsightError {
    /// HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// Request never got a response.
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status.
    #[error("provider returned {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// Backend is throttling us.
    #[error("provider rate limit exceeded")]
    RateLimited,

    /// Response body did not have the expected shape.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

/// A backend that turns a prompt into free text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for `prompt`. `Ok(None)` means the backend answered
    /// without any text.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, InsightError>;

    /// Short provider name for logs.
    fn name(&self) -> &'static str;
}

//! Unified error type for the embeddings client and generator.

use reqwest::StatusCode;
use services::env::EnvError;
use thiserror::Error;

/// Top-level error for embed-service operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EmbedError {
    /// Missing or malformed environment configuration.
    #[error(transparent)]
    Env(#[from] EnvError),

    /// Invalid client configuration (key, endpoint, model).
    #[error("embedding config error: {0}")]
    Config(String),

    /// Underlying HTTP transport error.
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-success HTTP status.
    #[error("HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        status: StatusCode,
        url: String,
        /// Short trimmed excerpt of the response body.
        snippet: String,
    },

    /// Response payload could not be decoded as expected.
    #[error("decode error: {0}")]
    Decode(String),

    /// A returned vector does not match the configured dimension.
    #[error("vector size mismatch: got {got}, want {want}")]
    VectorSizeMismatch { got: usize, want: usize },

    /// The provider returned a different number of vectors than inputs.
    #[error("embedding count mismatch: got {got}, want {want}")]
    CountMismatch { got: usize, want: usize },
}

/// Clamps an upstream error body to a log-friendly one-line snippet.
pub(crate) fn make_snippet(body: &str) -> String {
    const MAX: usize = 200;
    let mut line = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if line.len() > MAX {
        let mut end = MAX;
        while end > 0 && !line.is_char_boundary(end) {
            end -= 1;
        }
        line.truncate(end);
        line.push('…');
    }
    line
}

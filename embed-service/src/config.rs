//! Embedding client configuration, loaded strictly from the environment.

use services::env::{env_opt, env_opt_usize, must_env};

use crate::errors::EmbedError;

/// Default OpenAI-compatible API base.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";

/// Vector dimension of the configured embedding model.
pub const EMBEDDING_DIM: usize = 1536;

/// Configuration for the embeddings client.
#[derive(Clone, Debug)]
pub struct EmbeddingConfig {
    /// Bearer token for the embeddings API.
    pub api_key: String,
    /// API base URL; `/v1/embeddings` is appended.
    pub endpoint: String,
    /// Embedding model identifier.
    pub model: String,
    /// Expected vector dimension; every response vector is checked.
    pub dimension: usize,
    /// Optional request timeout in seconds (default 60).
    pub timeout_secs: Option<u64>,
}

impl EmbeddingConfig {
    /// Loads the configuration from the environment.
    ///
    /// # Env
    /// - `OPENAI_API_KEY` (required)
    /// - `EMBEDDING_MODEL` (required)
    /// - `OPENAI_API_URL` (optional, default [`DEFAULT_ENDPOINT`])
    /// - `EMBEDDING_DIM` (optional, default [`EMBEDDING_DIM`])
    ///
    /// # Errors
    /// Returns [`EmbedError::Env`] for missing or malformed variables.
    pub fn from_env() -> Result<Self, EmbedError> {
        Ok(Self {
            api_key: must_env("OPENAI_API_KEY")?,
            endpoint: env_opt("OPENAI_API_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            model: must_env("EMBEDDING_MODEL")?,
            dimension: env_opt_usize("EMBEDDING_DIM")?.unwrap_or(EMBEDDING_DIM),
            timeout_secs: None,
        })
    }
}

//! Unified error type for the store crate.

use services::env::EnvError;
use thiserror::Error;

/// Top-level error for vector-store operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// Missing or malformed environment configuration.
    #[error(transparent)]
    Env(#[from] EnvError),

    /// Invalid or unsupported configuration.
    #[error("store config error: {0}")]
    Config(String),

    /// Qdrant client errors (wrapped).
    #[error("qdrant error: {0}")]
    Qdrant(String),

    /// Mismatch between a document vector and the collection dimension.
    #[error("vector size mismatch: got {got}, want {want}")]
    VectorSizeMismatch { got: usize, want: usize },
}

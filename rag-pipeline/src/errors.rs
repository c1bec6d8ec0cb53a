//! Unified error type for the pipeline.

use embed_service::EmbedError;
use services::env::EnvError;
use thiserror::Error;
use vector_store::StoreError;

/// Top-level error for ingestion and retrieval operations.
///
/// Per-URL scrape failures never appear here: the fetcher absorbs them
/// into the empty-content signal.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Missing or malformed environment configuration.
    #[error(transparent)]
    Env(#[from] EnvError),

    /// Embedding generation failures.
    #[error(transparent)]
    Embed(#[from] EmbedError),

    /// Vector store failures.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Generic error from an anyhow chain.
    #[error("internal: {0}")]
    Internal(#[from] anyhow::Error),
}

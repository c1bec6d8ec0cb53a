//! Pipeline configuration assembly.
//!
//! Components receive explicit configuration structs owned by the
//! process entry point; there is no ambient client state.

use embed_service::EmbeddingConfig;
use vector_store::StoreConfig;

use crate::errors::PipelineError;

/// Everything the ingestion run and the retrieval path need.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub embedding: EmbeddingConfig,
    pub store: StoreConfig,
}

impl PipelineConfig {
    /// Loads the full configuration from the environment.
    ///
    /// The store inherits its vector dimension from the embedding config
    /// so the two cannot drift apart.
    ///
    /// # Errors
    /// Returns [`PipelineError`] for missing or malformed variables.
    pub fn from_env() -> Result<Self, PipelineError> {
        let embedding = EmbeddingConfig::from_env()?;
        let store = StoreConfig::from_env(embedding.dimension)?;
        Ok(Self { embedding, store })
    }
}

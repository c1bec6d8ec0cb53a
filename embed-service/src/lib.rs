//! Embedding generation for ingestion and retrieval.
//!
//! - [`OpenAiEmbedder`] is a thin client for an OpenAI-compatible
//!   `/v1/embeddings` endpoint.
//! - [`EmbeddingsProvider`] is the seam the pipeline depends on, so the
//!   batch generator is testable without a network.
//! - [`embed_all`] / [`embed_query`] implement the order-preserving
//!   batch policy (groups of 10) and the single-item retrieval mode,
//!   both under the shared retry-with-backoff policy.

mod config;
mod errors;
mod generator;
mod open_ai;
mod provider;

pub use config::{DEFAULT_ENDPOINT, EMBEDDING_DIM, EmbeddingConfig};
pub use errors::EmbedError;
pub use generator::{EMBED_BATCH_SIZE, embed_all, embed_query};
pub use open_ai::OpenAiEmbedder;
pub use provider::EmbeddingsProvider;

//! Ingestion pipeline and answer-time retrieval.
//!
//! Ingestion path (offline, sequential):
//! URL list → fetch → normalize → chunk → embed → persist.
//!
//! Retrieval path (online, per request):
//! query → single-item embed → nearest-neighbor search → context block.
//!
//! Every stage is a plain function boundary connected by data values, so
//! each is unit-testable on its own; scheduling decisions live here, not
//! in the components.

mod chunker;
mod config;
mod errors;
mod ingest;
mod normalize;
mod retrieve;

pub use chunker::{CHUNK_OVERLAP, CHUNK_SIZE, TextChunk, split_into_chunks};
pub use config::PipelineConfig;
pub use errors::PipelineError;
pub use ingest::{IngestReport, SEED_URLS, UrlSummary, ingest_urls};
pub use normalize::{MIN_CONTENT_CHARS, normalize_content};
pub use retrieve::{CONTEXT_RESULT_LIMIT, build_context, context_or_empty, render_context};

//! End-to-end ingestion: fetch → normalize → chunk → embed → persist.
//!
//! The run is strictly sequential over the URL list. A fatal setup
//! failure (collection creation) aborts the run; any per-URL failure is
//! logged, contributes zero documents, and the run continues.

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};

use embed_service::{EmbeddingsProvider, embed_all};
use site_scraper::{PageRenderer, fetch_page};
use vector_store::{Document, DocumentStore};

use crate::chunker::split_into_chunks;
use crate::errors::PipelineError;
use crate::normalize::normalize_content;

/// Pages loaded by the ingestion run.
pub const SEED_URLS: &[&str] = &[
    "https://en.wikipedia.org/wiki/Formula_One",
    "https://www.skysports.com/f1",
    "https://www.formula1.com/",
    "https://www.espn.com/f1/",
];

/// Outcome for one URL.
#[derive(Clone, Debug)]
pub struct UrlSummary {
    pub url: String,
    pub documents: usize,
}

/// Outcome of a whole ingestion run.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub summaries: Vec<UrlSummary>,
    /// URLs that failed after the fetch stage (embedding or persistence).
    pub failures: usize,
}

impl IngestReport {
    /// Documents written across all URLs.
    pub fn total_documents(&self) -> usize {
        self.summaries.iter().map(|s| s.documents).sum()
    }
}

/// Runs the ingestion pipeline over `urls`.
///
/// Ensures the collection exists once, then processes URLs one at a
/// time. Per-URL failures are absorbed into the report; only setup
/// failures abort.
///
/// # Errors
/// Returns [`PipelineError::Store`] when collection creation fails for
/// any reason other than "already exists".
pub async fn ingest_urls(
    urls: &[&str],
    renderer: &dyn PageRenderer,
    provider: &dyn EmbeddingsProvider,
    store: &dyn DocumentStore,
) -> Result<IngestReport, PipelineError> {
    store.ensure_collection().await?;

    let pb = ProgressBar::new(urls.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})",
        )
        .expect("progress template")
        .progress_chars("##-"),
    );

    let mut report = IngestReport::default();
    for url in urls.iter().copied() {
        match ingest_one(url, renderer, provider, store).await {
            Ok(documents) => {
                info!(url, documents, "url ingested");
                report.summaries.push(UrlSummary {
                    url: url.to_string(),
                    documents,
                });
            }
            Err(err) => {
                error!(url, %err, "ingestion failed for url, continuing");
                report.failures += 1;
                report.summaries.push(UrlSummary {
                    url: url.to_string(),
                    documents: 0,
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("ingestion complete");

    Ok(report)
}

/// Processes a single URL; any error here is per-URL, not fatal.
async fn ingest_one(
    url: &str,
    renderer: &dyn PageRenderer,
    provider: &dyn EmbeddingsProvider,
    store: &dyn DocumentStore,
) -> Result<usize, PipelineError> {
    let raw = fetch_page(renderer, url).await;
    let content = normalize_content(&raw);
    if content.is_empty() {
        info!(url, "no usable content");
        return Ok(0);
    }

    let chunks = split_into_chunks(&content, url);
    let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
    let vectors = embed_all(provider, &texts).await?;

    let timestamp = Utc::now().to_rfc3339();
    let documents: Vec<Document> = chunks
        .into_iter()
        .zip(vectors)
        .map(|(chunk, vector)| Document {
            vector,
            text: chunk.text,
            source: chunk.source_url,
            timestamp: timestamp.clone(),
        })
        .collect();

    let written = store.insert_batch(&documents).await?;
    Ok(written)
}

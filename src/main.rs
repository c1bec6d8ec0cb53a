use std::error::Error;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use embed_service::OpenAiEmbedder;
use rag_pipeline::{PipelineConfig, SEED_URLS, ingest_urls};
use site_scraper::HttpRenderer;
use vector_store::QdrantStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; deployments may pass variables directly.
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // Clients are created once here and passed down; components hold no
    // ambient state.
    let cfg = PipelineConfig::from_env()?;
    let renderer = HttpRenderer::new()?;
    let embedder = OpenAiEmbedder::new(cfg.embedding.clone())?;
    let store = QdrantStore::new(cfg.store.clone())?;

    let report = ingest_urls(SEED_URLS, &renderer, &embedder, &store).await?;

    for summary in &report.summaries {
        info!(url = %summary.url, documents = summary.documents, "ingestion summary");
    }
    info!(
        total = report.total_documents(),
        failed_urls = report.failures,
        "data loading completed"
    );

    Ok(())
}

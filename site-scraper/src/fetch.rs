//! Fault-isolating page fetcher.

use tracing::{error, info};

use crate::profiles::resolve_profile;
use crate::renderer::PageRenderer;

/// Fetches `url` through `renderer` and returns the extracted text.
///
/// Contract: never propagates a failure. Navigation timeouts, missing
/// selectors, and renderer crashes are logged and yield the empty string
/// so the batch continues with the next URL.
pub async fn fetch_page(renderer: &dyn PageRenderer, url: &str) -> String {
    let profile = resolve_profile(url);
    let request = profile.extraction_request();

    match renderer.fetch_rendered_text(url, &request).await {
        Ok(text) => {
            info!(url, chars = text.len(), "page extracted");
            text
        }
        Err(err) => {
            error!(url, %err, "scrape failed, skipping");
            String::new()
        }
    }
}

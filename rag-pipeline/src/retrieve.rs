//! Answer-time retrieval: query → vector search → context block.

use tracing::{debug, warn};

use embed_service::{EmbeddingsProvider, embed_query};
use vector_store::{DocumentStore, RetrievalMatch};

use crate::errors::PipelineError;

/// Matches pulled into the context block.
pub const CONTEXT_RESULT_LIMIT: u64 = 5;

const CONTEXT_SEPARATOR: &str = "\n\n";

/// Builds the context string for `query`.
///
/// When context is not requested, or the query is blank, returns the
/// empty string without invoking the embedding or the search call. Zero
/// hits also yield the empty string; neither case is an error.
///
/// # Errors
/// Surfaces embedding or search failures once their retries are
/// exhausted; see [`context_or_empty`] for the degrading wrapper.
pub async fn build_context(
    query: &str,
    use_context: bool,
    provider: &dyn EmbeddingsProvider,
    store: &dyn DocumentStore,
) -> Result<String, PipelineError> {
    if !use_context || query.trim().is_empty() {
        return Ok(String::new());
    }

    let vector = embed_query(provider, query).await?;
    let matches = store.search(vector, CONTEXT_RESULT_LIMIT).await?;
    debug!(hits = matches.len(), "retrieval completed");

    Ok(render_context(&matches))
}

/// Like [`build_context`], but a retrieval failure degrades to the empty
/// context instead of failing the user-facing request.
pub async fn context_or_empty(
    query: &str,
    use_context: bool,
    provider: &dyn EmbeddingsProvider,
    store: &dyn DocumentStore,
) -> String {
    match build_context(query, use_context, provider, store).await {
        Ok(context) => context,
        Err(err) => {
            warn!(%err, "retrieval failed, answering without context");
            String::new()
        }
    }
}

/// Joins matches into one context block, highest-similarity first
/// (store order).
pub fn render_context(matches: &[RetrievalMatch]) -> String {
    matches
        .iter()
        .map(|m| format!("Title: {}\nContent: {}\nURL: {}", m.title, m.content, m.url))
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(title: &str, content: &str, url: &str) -> RetrievalMatch {
        RetrievalMatch {
            score: 0.9,
            title: title.into(),
            content: content.into(),
            url: url.into(),
        }
    }

    #[test]
    fn renders_matches_in_store_order() {
        let matches = vec![
            hit("en.wikipedia.org", "First fact.", "https://en.wikipedia.org/a"),
            hit("www.formula1.com", "Second fact.", "https://www.formula1.com/b"),
        ];
        let context = render_context(&matches);
        assert_eq!(
            context,
            "Title: en.wikipedia.org\nContent: First fact.\nURL: https://en.wikipedia.org/a\n\n\
             Title: www.formula1.com\nContent: Second fact.\nURL: https://www.formula1.com/b"
        );
    }

    #[test]
    fn zero_matches_render_to_empty() {
        assert_eq!(render_context(&[]), "");
    }
}

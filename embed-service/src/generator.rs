//! Order-preserving batch embedding on top of any provider.

use services::retry::with_retry;
use tracing::debug;

use crate::errors::EmbedError;
use crate::provider::EmbeddingsProvider;

/// Inputs per embedding request.
pub const EMBED_BATCH_SIZE: usize = 10;

/// Embeds every text in `texts`, batching into groups of
/// [`EMBED_BATCH_SIZE`] and concatenating results in submission order.
///
/// Groups are issued strictly sequentially; each group call runs under
/// the shared retry policy. `output[i]` is the vector for `texts[i]`
/// regardless of batch boundaries.
///
/// # Errors
/// Propagates the final error of a group whose retries were exhausted,
/// aborting the remaining groups.
pub async fn embed_all(
    provider: &dyn EmbeddingsProvider,
    texts: &[String],
) -> Result<Vec<Vec<f32>>, EmbedError> {
    let mut vectors = Vec::with_capacity(texts.len());
    for group in texts.chunks(EMBED_BATCH_SIZE) {
        let batch = with_retry("embeddings batch", || provider.embed_batch(group)).await?;
        if batch.len() != group.len() {
            return Err(EmbedError::CountMismatch {
                got: batch.len(),
                want: group.len(),
            });
        }
        vectors.extend(batch);
    }
    debug!(texts = texts.len(), "embedded all chunks");
    Ok(vectors)
}

/// Embeds exactly one query string (retrieval path), same retry policy.
///
/// # Errors
/// Propagates the provider error once retries are exhausted.
pub async fn embed_query(
    provider: &dyn EmbeddingsProvider,
    query: &str,
) -> Result<Vec<f32>, EmbedError> {
    let input = [query.to_string()];
    let mut batch = with_retry("query embedding", || provider.embed_batch(&input)).await?;
    if batch.len() != 1 {
        return Err(EmbedError::CountMismatch {
            got: batch.len(),
            want: 1,
        });
    }
    Ok(batch.remove(0))
}

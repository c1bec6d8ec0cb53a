use std::{future::Future, pin::Pin};

use crate::errors::EmbedError;

/// Provider interface for embedding generation.
///
/// Implementations must preserve order and count: `output[i]` is the
/// vector for `inputs[i]`. Async because real providers perform HTTP
/// requests.
pub trait EmbeddingsProvider: Send + Sync {
    fn embed_batch<'a>(
        &'a self,
        inputs: &'a [String],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Vec<f32>>, EmbedError>> + Send + 'a>>;
}

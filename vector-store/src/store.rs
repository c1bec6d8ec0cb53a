use std::{future::Future, pin::Pin};

use crate::errors::StoreError;
use crate::record::{Document, RetrievalMatch};

/// The two-and-a-half operations the core needs from a vector store.
///
/// Keeping this seam narrow makes the pipeline testable against a fake
/// store with no network dependency.
pub trait DocumentStore: Send + Sync {
    /// Idempotently creates the target collection.
    ///
    /// An existing collection is success; any other creation failure is
    /// fatal to the run.
    fn ensure_collection<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + 'a>>;

    /// Persists documents in insertion order, batching internally.
    ///
    /// Returns the number of documents written.
    fn insert_batch<'a>(
        &'a self,
        documents: &'a [Document],
    ) -> Pin<Box<dyn Future<Output = Result<usize, StoreError>> + Send + 'a>>;

    /// Nearest-neighbor search, ranked by the store.
    fn search<'a>(
        &'a self,
        vector: Vec<f32>,
        limit: u64,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RetrievalMatch>, StoreError>> + Send + 'a>>;
}

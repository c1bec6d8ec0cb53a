//! Persisted and retrieved record shapes.

use serde::{Deserialize, Serialize};

/// Canonical record persisted per chunk.
///
/// Immutable once created. `vector` length must equal the collection
/// dimension; `text` has already passed the length-floor filter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Document {
    pub vector: Vec<f32>,
    pub text: String,
    /// Origin URL of the scraped page.
    pub source: String,
    /// ISO-8601 creation time.
    pub timestamp: String,
}

/// A single retrieval hit, ranked by similarity.
#[derive(Clone, Debug)]
pub struct RetrievalMatch {
    pub score: f32,
    pub title: String,
    pub content: String,
    pub url: String,
}

/// Derives a display title from a source URL (its host).
///
/// Stored documents carry no separate title field, so retrieval titles
/// come from the origin.
pub fn title_from_source(source: &str) -> String {
    let without_scheme = source
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(source);
    without_scheme
        .split('/')
        .next()
        .unwrap_or(without_scheme)
        .to_string()
}

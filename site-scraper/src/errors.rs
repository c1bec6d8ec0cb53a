//! Error type for page acquisition.

use thiserror::Error;

/// Errors raised while fetching or extracting a page.
///
/// Callers above the fetch boundary never see these: the per-URL fetcher
/// converts them into the empty-string "no content" signal.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport failure, timeout, or non-success HTTP status.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A profile carried a selector the DOM engine cannot parse.
    #[error("invalid selector `{0}`")]
    Selector(String),
}

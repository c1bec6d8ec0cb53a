//! Rendering seam between the pipeline and the page-rendering collaborator.
//!
//! The pipeline only ever talks to [`PageRenderer`]; the shipped
//! [`HttpRenderer`] fetches raw HTML over HTTP and evaluates the
//! extraction request statically. An interactive (browser-driven)
//! renderer can implement the same trait and honor the readiness and
//! scroll budgets of the request.

use std::future::Future;
use std::pin::Pin;

use tracing::debug;

use crate::errors::ScrapeError;
use crate::extract::{ExtractionRequest, NAVIGATION_TIMEOUT, extract_rendered_text};

const USER_AGENT: &str = concat!("f1-rag-backend/", env!("CARGO_PKG_VERSION"));

/// Renders one page and returns the extracted visible text.
///
/// A session is scoped to one invocation and must be released on every
/// path, success or failure.
pub trait PageRenderer: Send + Sync {
    fn fetch_rendered_text<'a>(
        &'a self,
        url: &'a str,
        request: &'a ExtractionRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<String, ScrapeError>> + Send + 'a>>;
}

/// Static renderer: plain HTTP fetch plus DOM evaluation.
///
/// No JavaScript runs, so the scroll budget of the request does not
/// apply; the navigation timeout bounds the whole fetch.
pub struct HttpRenderer {
    client: reqwest::Client,
}

impl HttpRenderer {
    /// Builds the renderer with its preconfigured HTTP client.
    ///
    /// # Errors
    /// Returns [`ScrapeError::Http`] if the client cannot be built.
    pub fn new() -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(NAVIGATION_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    async fn render(
        &self,
        url: &str,
        request: &ExtractionRequest<'_>,
    ) -> Result<String, ScrapeError> {
        debug!(url, "fetching page");
        let response = self
            .client
            .get(url)
            .timeout(request.nav_timeout)
            .send()
            .await?
            .error_for_status()?;
        let html = response.text().await?;
        debug!(url, bytes = html.len(), "page fetched");
        extract_rendered_text(&html, request)
    }
}

impl PageRenderer for HttpRenderer {
    fn fetch_rendered_text<'a>(
        &'a self,
        url: &'a str,
        request: &'a ExtractionRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<String, ScrapeError>> + Send + 'a>> {
        Box::pin(self.render(url, request))
    }
}

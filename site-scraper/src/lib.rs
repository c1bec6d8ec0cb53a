//! Page acquisition for the ingestion pipeline.
//!
//! This crate turns a URL into extracted visible text:
//! - [`profiles`] maps a URL onto site-specific scraping parameters
//! - [`extract`] evaluates a declarative extraction request over a DOM
//! - [`renderer`] defines the rendering seam and ships an HTTP renderer
//! - [`fetch`] is the fault-isolating entry point used per URL
//!
//! One bad URL never aborts a batch: [`fetch::fetch_page`] maps every
//! failure to the empty string and logs it.

mod errors;
mod extract;
mod fetch;
mod profiles;
mod renderer;

pub use errors::ScrapeError;
pub use extract::{ExtractionRequest, extract_rendered_text};
pub use fetch::fetch_page;
pub use profiles::{SiteProfile, resolve_profile};
pub use renderer::{HttpRenderer, PageRenderer};

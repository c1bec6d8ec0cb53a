//! Declarative text extraction over a parsed DOM.
//!
//! The extraction request replaces in-browser callback closures: it names
//! the selectors to strip, the region to read, the readiness selector,
//! and the lazy-load scroll budget. Any renderer implementation evaluates
//! the same request; this module is the static (non-interactive)
//! evaluation shared by tests and the HTTP renderer.

use std::collections::HashSet;
use std::time::Duration;

use scraper::{Html, Node, Selector};

use crate::errors::ScrapeError;
use crate::profiles::SiteProfile;

/// Upper bound for one page navigation.
pub const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Upper bound for the readiness wait.
pub const READY_TIMEOUT: Duration = Duration::from_secs(30);

/// Wall-clock budget for the lazy-load scroll phase.
pub const SCROLL_BUDGET: Duration = Duration::from_secs(10);

// Never rendered, so never part of visible text even inside the region.
const INVISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// One extraction job handed to a [`crate::PageRenderer`].
#[derive(Clone, Debug)]
pub struct ExtractionRequest<'a> {
    /// Region whose rendered text is the result.
    pub content_selector: &'a str,
    /// Readiness signal; no match means "no content", not an error.
    pub wait_selector: &'a str,
    /// Elements removed from the DOM before reading the region.
    pub remove_selectors: &'a [&'a str],
    /// Navigation deadline for the renderer.
    pub nav_timeout: Duration,
    /// Readiness deadline for interactive renderers.
    pub ready_timeout: Duration,
    /// Scroll budget for interactive renderers; static renderers have no
    /// scroll phase and ignore it.
    pub scroll_budget: Duration,
}

impl SiteProfile {
    /// Builds the extraction request for this profile with the standard
    /// timeout and scroll budgets.
    pub fn extraction_request(&self) -> ExtractionRequest<'static> {
        ExtractionRequest {
            content_selector: self.content_selector,
            wait_selector: self.wait_selector,
            remove_selectors: self.noise_selectors,
            nav_timeout: NAVIGATION_TIMEOUT,
            ready_timeout: READY_TIMEOUT,
            scroll_budget: SCROLL_BUDGET,
        }
    }
}

/// Evaluates `request` against raw HTML and returns the region's visible
/// text with whitespace collapsed.
///
/// Returns the empty string when the readiness selector or the content
/// region matches nothing — the "no content" signal, not an error.
///
/// # Errors
/// Returns [`ScrapeError::Selector`] if a profile selector fails to parse.
pub fn extract_rendered_text(
    html: &str,
    request: &ExtractionRequest<'_>,
) -> Result<String, ScrapeError> {
    let document = Html::parse_document(html);

    let wait = parse_selector(request.wait_selector)?;
    if document.select(&wait).next().is_none() {
        return Ok(String::new());
    }

    // Ids of every node scheduled for removal; subtrees under these ids
    // are skipped during text collection.
    let mut removed = HashSet::new();
    for raw in request.remove_selectors {
        let selector = parse_selector(raw)?;
        for element in document.select(&selector) {
            removed.insert(element.id());
        }
    }

    let content = parse_selector(request.content_selector)?;
    let Some(region) = document.select(&content).next() else {
        return Ok(String::new());
    };

    let mut raw_text = String::new();
    for child in region.children() {
        append_visible_text(child, &removed, &mut raw_text);
    }

    Ok(collapse_whitespace(&raw_text))
}

fn parse_selector(raw: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(raw).map_err(|_| ScrapeError::Selector(raw.to_string()))
}

fn append_visible_text(
    node: scraper::ego_tree::NodeRef<'_, Node>,
    removed: &HashSet<scraper::ego_tree::NodeId>,
    out: &mut String,
) {
    if removed.contains(&node.id()) {
        return;
    }
    match node.value() {
        Node::Element(element) if INVISIBLE_TAGS.contains(&element.name()) => {}
        Node::Element(_) => {
            for child in node.children() {
                append_visible_text(child, removed, out);
            }
        }
        Node::Text(text) => {
            out.push_str(text);
            out.push(' ');
        }
        _ => {}
    }
}

fn collapse_whitespace(input: &str) -> String {
    let mut buf = String::with_capacity(input.len());
    let mut last_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !last_space && !buf.is_empty() {
                buf.push(' ');
            }
            last_space = true;
        } else {
            buf.push(ch);
            last_space = false;
        }
    }
    buf.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request<'a>(
        content: &'a str,
        wait: &'a str,
        remove: &'a [&'a str],
    ) -> ExtractionRequest<'a> {
        ExtractionRequest {
            content_selector: content,
            wait_selector: wait,
            remove_selectors: remove,
            nav_timeout: NAVIGATION_TIMEOUT,
            ready_timeout: READY_TIMEOUT,
            scroll_budget: SCROLL_BUDGET,
        }
    }

    #[test]
    fn extracts_region_text_and_collapses_whitespace() {
        let html = r#"<html><body>
            <main><p>Race   results
            for the    season</p></main>
            <footer>ignored</footer>
        </body></html>"#;
        let text = extract_rendered_text(html, &request("main", "body", &[])).unwrap();
        assert_eq!(text, "Race results for the season");
    }

    #[test]
    fn strips_noise_elements_inside_region() {
        let html = r#"<html><body><main>
            <p>Keep this paragraph.</p>
            <nav>menu menu menu</nav>
            <div class="promo">subscribe now</div>
        </main></body></html>"#;
        let text =
            extract_rendered_text(html, &request("main", "body", &["nav", ".promo"])).unwrap();
        assert_eq!(text, "Keep this paragraph.");
    }

    #[test]
    fn script_and_style_are_never_visible() {
        let html = r#"<html><body><main>
            <p>Visible.</p><script>var x = 1;</script><style>p{}</style>
        </main></body></html>"#;
        let text = extract_rendered_text(html, &request("main", "body", &[])).unwrap();
        assert_eq!(text, "Visible.");
    }

    #[test]
    fn missing_content_region_yields_empty_string() {
        let html = "<html><body><div>no main element</div></body></html>";
        let text = extract_rendered_text(html, &request("main", "body", &[])).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn missing_wait_selector_yields_empty_string() {
        let html = "<html><body><main>content</main></body></html>";
        let text = extract_rendered_text(html, &request("main", "#app-ready", &[])).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn comma_separated_content_selector_picks_first_match() {
        let html = r#"<html><body><div id="content">fallback region text</div></body></html>"#;
        let text = extract_rendered_text(
            html,
            &request("main, #content, .article-content", "body", &[]),
        )
        .unwrap();
        assert_eq!(text, "fallback region text");
    }

    #[test]
    fn invalid_selector_is_an_error() {
        let html = "<html><body><main>x</main></body></html>";
        let err = extract_rendered_text(html, &request("main", ":::", &[])).unwrap_err();
        assert!(matches!(err, ScrapeError::Selector(_)));
    }
}

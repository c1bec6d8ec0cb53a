//! Content normalization and usefulness filtering.

use std::sync::LazyLock;

use regex::Regex;

/// Pages whose normalized content is shorter than this are not useful.
pub const MIN_CONTENT_CHARS: usize = 100;

static BOILERPLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)cookie policy|accept cookies|privacy policy|advertisement|sponsored content|share this article|follow us",
    )
    .expect("boilerplate pattern compiles")
});

/// Normalizes scraped text: collapses whitespace, strips boilerplate
/// phrases, and applies the length floor.
///
/// Returns the empty string for content below [`MIN_CONTENT_CHARS`] —
/// the "not useful" signal, which callers treat as zero documents.
///
/// Stripping can splice two halves of a phrase together, so it runs to a
/// fixpoint; the function is idempotent.
pub fn normalize_content(raw: &str) -> String {
    let mut text = collapse_whitespace(raw);
    loop {
        let stripped = collapse_whitespace(&BOILERPLATE.replace_all(&text, ""));
        if stripped == text {
            break;
        }
        text = stripped;
    }

    if text.chars().count() < MIN_CONTENT_CHARS {
        String::new()
    } else {
        text
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

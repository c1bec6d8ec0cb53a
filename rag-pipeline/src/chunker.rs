//! Sliding-window chunking with overlap.

/// Target chunk size, in characters.
pub const CHUNK_SIZE: usize = 512;

/// Characters shared between consecutive chunks.
pub const CHUNK_OVERLAP: usize = 50;

// A cut prefers the last whitespace in the final quarter of the window.
const BOUNDARY_WINDOW: usize = CHUNK_SIZE * 3 / 4;

/// One ordered passage of normalized content.
#[derive(Clone, Debug)]
pub struct TextChunk {
    pub text: String,
    /// Origin URL, carried into the persisted document.
    pub source_url: String,
    /// Position within the source page; ordering is significant.
    pub sequence_index: usize,
}

/// Splits normalized text into overlapping chunks of at most
/// [`CHUNK_SIZE`] characters.
///
/// Consecutive chunks share exactly [`CHUNK_OVERLAP`] characters, so
/// dropping the first `CHUNK_OVERLAP` characters of every chunk after
/// the first reconstructs the input. Cuts land on a whitespace boundary
/// where one exists in the final quarter of the window, never mid-char.
pub fn split_into_chunks(text: &str, source_url: &str) -> Vec<TextChunk> {
    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();
    if total == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut start = 0usize;
    let mut sequence_index = 0usize;

    loop {
        let mut end = (start + CHUNK_SIZE).min(total);
        if end < total {
            // Walk back to the nearest whitespace; split after it.
            if let Some(ws) = (start + BOUNDARY_WINDOW..end)
                .rev()
                .find(|&i| chars[i].is_whitespace())
            {
                end = ws + 1;
            }
        }

        chunks.push(TextChunk {
            text: chars[start..end].iter().collect(),
            source_url: source_url.to_string(),
            sequence_index,
        });
        sequence_index += 1;

        if end == total {
            break;
        }
        start = end - CHUNK_OVERLAP;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prose(chars: usize) -> String {
        "lights out and away we go into turn one of the grand prix "
            .chars()
            .cycle()
            .take(chars)
            .collect()
    }

    fn reconstruct(chunks: &[TextChunk]) -> String {
        let mut out = String::new();
        for (i, chunk) in chunks.iter().enumerate() {
            if i == 0 {
                out.push_str(&chunk.text);
            } else {
                out.extend(chunk.text.chars().skip(CHUNK_OVERLAP));
            }
        }
        out
    }

    #[test]
    fn no_chunk_exceeds_the_target_size() {
        let text = prose(3000);
        for chunk in split_into_chunks(&text, "https://example.org") {
            assert!(chunk.text.chars().count() <= CHUNK_SIZE);
        }
    }

    #[test]
    fn overlap_removal_reconstructs_the_input() {
        let text = prose(1700);
        let chunks = split_into_chunks(&text, "https://example.org");
        assert!(chunks.len() > 2);
        assert_eq!(reconstruct(&chunks), text);
    }

    #[test]
    fn twelve_hundred_chars_yield_three_chunks() {
        let text = prose(1200);
        let chunks = split_into_chunks(&text, "https://example.org");
        assert_eq!(chunks.len(), 3);
        assert_eq!(reconstruct(&chunks), text);
    }

    #[test]
    fn sequence_indexes_are_dense_and_ordered() {
        let chunks = split_into_chunks(&prose(1700), "https://example.org/a");
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.sequence_index, i);
            assert_eq!(chunk.source_url, "https://example.org/a");
        }
    }

    #[test]
    fn cuts_avoid_mid_word_splits_in_prose() {
        let text = prose(1200);
        let chunks = split_into_chunks(&text, "https://example.org");
        for chunk in &chunks[..chunks.len() - 1] {
            assert!(
                chunk.text.ends_with(char::is_whitespace),
                "chunk should end on a word boundary: {:?}",
                &chunk.text[chunk.text.len().saturating_sub(16)..]
            );
        }
    }

    #[test]
    fn short_text_is_a_single_chunk() {
        let chunks = split_into_chunks("short passage", "https://example.org");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "short passage");
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        assert!(split_into_chunks("", "https://example.org").is_empty());
    }

    #[test]
    fn unbroken_text_still_makes_progress() {
        let text: String = "x".repeat(1200);
        let chunks = split_into_chunks(&text, "https://example.org");
        assert!(chunks.len() >= 3);
        assert_eq!(reconstruct(&chunks), text);
        for chunk in chunks {
            assert!(chunk.text.chars().count() <= CHUNK_SIZE);
        }
    }
}

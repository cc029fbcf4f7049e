//! Fixed-size corpus chunking.
//!
//! Chunks partition the corpus with no overlap and no gap: concatenating
//! them in order reconstructs the input exactly. Sizes are counted in
//! characters, not bytes, so boundaries always fall on char boundaries.

/// Characters sent to the model per request.
pub const DEFAULT_CHUNK_SIZE: usize = 5000;

/// Split `text` into consecutive chunks of at most `chunk_size` characters.
///
/// The last chunk may be shorter. An empty input produces no chunks.
pub fn split_chunks(text: &str, chunk_size: usize) -> Vec<&str> {
    assert!(chunk_size > 0, "chunk_size must be positive");

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == chunk_size {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_no_chunks() {
        assert!(split_chunks("", 5).is_empty());
    }

    #[test]
    fn exact_size_yields_one_chunk() {
        let text = "a".repeat(8);
        let chunks = split_chunks(&text, 8);
        assert_eq!(chunks, vec![text.as_str()]);
    }

    #[test]
    fn one_over_yields_two_chunks() {
        let text = "a".repeat(9);
        let chunks = split_chunks(&text, 8);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), 8);
        assert_eq!(chunks[1], "a");
    }

    #[test]
    fn chunks_reconstruct_the_input() {
        let text = "The quick brown fox jumps over the lazy dog. \
                    Pack my box with five dozen liquor jugs.";
        for size in [1, 2, 3, 7, 50, 1000] {
            let chunks = split_chunks(text, size);
            assert_eq!(chunks.concat(), text, "size {}", size);
            assert!(chunks.iter().all(|c| c.chars().count() <= size));
        }
    }

    #[test]
    fn boundaries_respect_multibyte_chars() {
        let text = "héllo wörld ünïcode ✓✓✓";
        for size in 1..=text.chars().count() {
            let chunks = split_chunks(text, size);
            assert_eq!(chunks.concat(), text);
            assert!(chunks.iter().all(|c| c.chars().count() <= size));
        }
    }
}

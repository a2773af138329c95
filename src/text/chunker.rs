//! Transcript chunking for long inputs.
//!
//! Sentence ranking is quadratic in sentence count, so callers with very long
//! transcripts split them into bounded chunks first and summarize each chunk
//! separately.

/// Split text into chunks of at most `max_chars` characters, breaking only at
/// sentence boundaries. A single sentence longer than `max_chars` is kept
/// whole rather than truncated; no content is ever dropped.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for piece in split_raw(text) {
        let piece_len = piece.chars().count();
        // +1 for the joining space
        if current_len > 0 && current_len + 1 + piece_len > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(&piece);
        current_len += piece_len;
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Split into sentence-sized pieces without any noise filtering. Unlike the
/// segmenter this keeps every fragment, so chunking is lossless.
fn split_raw(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') && chars.peek().map_or(true, |c| c.is_whitespace()) {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                pieces.push(trimmed.to_string());
            }
            current.clear();
        }
    }
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        pieces.push(trimmed.to_string());
    }

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_chunk() {
        let chunks = chunk_text("Short text.", 100);
        assert_eq!(chunks, vec!["Short text."]);
    }

    #[test]
    fn test_exact_boundary_single_chunk() {
        let text = "x".repeat(100);
        let chunks = chunk_text(&text, 100);
        assert_eq!(chunks, vec![text]);
    }

    #[test]
    fn test_splits_at_sentence_boundaries() {
        let text = "First sentence here. Second sentence here. Third sentence here.";
        let chunks = chunk_text(text, 45);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 45);
            assert!(chunk.ends_with('.'));
        }
    }

    #[test]
    fn test_oversized_sentence_kept_whole() {
        let long = format!("{}.", "word ".repeat(30).trim());
        let text = format!("Short one. {}", long);
        let chunks = chunk_text(&text, 40);
        assert!(chunks.contains(&long));
    }

    #[test]
    fn test_never_drops_content() {
        let text = "Alpha beta gamma. Ok. Delta epsilon zeta. Hm. Eta theta iota.";
        let chunks = chunk_text(text, 20);
        let rejoined = chunks.join(" ");
        for word in ["Alpha", "Ok.", "Hm.", "iota."] {
            assert!(rejoined.contains(word));
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(chunk_text("", 100).is_empty());
        assert!(chunk_text("   ", 100).is_empty());
    }
}

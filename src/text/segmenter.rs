//! Sentence segmentation for raw transcript text.

/// Fragments at or below this length are treated as noise (filler words,
/// stray punctuation from the transcriber) and dropped.
const MIN_SENTENCE_CHARS: usize = 10;

/// Split raw text into sentences.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace (or end of
/// input), so decimals like "3.14" and dates stay intact. Fragments of 10
/// characters or fewer are discarded.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') && chars.peek().map_or(true, |c| c.is_whitespace()) {
            push_sentence(&mut sentences, &mut current);
        }
    }
    push_sentence(&mut sentences, &mut current);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if trimmed.chars().count() > MIN_SENTENCE_CHARS {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let sentences = split_sentences("This is the first sentence. And here is the second one!");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "This is the first sentence.");
        assert_eq!(sentences[1], "And here is the second one!");
    }

    #[test]
    fn test_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_drops_short_fragments() {
        let sentences = split_sentences("Ok. Sure. This sentence is long enough to keep.");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0], "This sentence is long enough to keep.");
    }

    #[test]
    fn test_decimal_not_split() {
        let sentences = split_sentences("Revenue grew by 3.5 percent this quarter. Margins held steady.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("3.5"));
    }

    #[test]
    fn test_trailing_text_without_punctuation() {
        let sentences = split_sentences("A complete sentence here. and a trailing clause with no period");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1], "and a trailing clause with no period");
    }

    #[test]
    fn test_question_and_exclamation() {
        let sentences = split_sentences("When will the new hire start? That was a great launch!");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].ends_with('?'));
    }
}

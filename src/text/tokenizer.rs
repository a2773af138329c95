//! Word tokenization and frequency counting.

use std::collections::HashMap;

/// Tokens at or below this length carry no signal and are dropped.
const MIN_TOKEN_CHARS: usize = 2;

/// Common English function words excluded from every frequency computation.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can",
    "had", "has", "have", "her", "his", "him", "its", "our", "out", "she",
    "they", "them", "their", "there", "this", "that", "these", "those", "was",
    "were", "will", "with", "what", "when", "where", "which", "while", "who",
    "whom", "why", "how", "about", "above", "after", "again", "against",
    "because", "been", "before", "being", "below", "between", "both", "does",
    "doing", "down", "during", "each", "few", "from", "further", "here",
    "into", "just", "more", "most", "once", "only", "other", "over", "own",
    "same", "should", "some", "such", "than", "then", "too", "under", "until",
    "very", "would", "could", "also", "may", "might", "must", "shall", "did",
    "done", "get", "got", "going", "like", "said", "say", "see", "well",
    "yeah", "okay", "really", "think", "know", "one",
];

/// Lowercase and tokenize text into content words.
///
/// Strips everything that is not a word character or whitespace, splits on
/// whitespace, and drops short tokens and stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .collect::<String>()
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_TOKEN_CHARS && !is_stop_word(w))
        .map(String::from)
        .collect()
}

/// Check whether a lowercased token is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Count token occurrences.
pub fn word_frequency(tokens: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_strips() {
        let tokens = tokenize("Revenue GREW by 15% last quarter!");
        assert_eq!(tokens, vec!["revenue", "grew", "last", "quarter"]);
    }

    #[test]
    fn test_tokenize_drops_short_and_stop_words() {
        let tokens = tokenize("it is the budget and the plan");
        assert_eq!(tokens, vec!["budget", "plan"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("a an it").is_empty());
    }

    #[test]
    fn test_word_frequency() {
        let tokens = tokenize("budget budget report budget report plan");
        let freq = word_frequency(&tokens);
        assert_eq!(freq.get("budget"), Some(&3));
        assert_eq!(freq.get("report"), Some(&2));
        assert_eq!(freq.get("plan"), Some(&1));
    }

    #[test]
    fn test_is_stop_word() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("should"));
        assert!(!is_stop_word("platform"));
    }
}

//! Frequency-ranked keyword extraction.

use std::collections::HashSet;

use crate::text::{tokenize, word_frequency};

/// Extract the `top_n` most frequent content words from a text.
///
/// Ties are broken by first-encounter order, so output is deterministic for
/// a given input. Empty text yields an empty list.
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<String> {
    let tokens = tokenize(text);
    if tokens.is_empty() || top_n == 0 {
        return Vec::new();
    }

    let counts = word_frequency(&tokens);

    // Distinct tokens in first-seen order; the stable sort below preserves
    // this order among equal counts.
    let mut seen = HashSet::new();
    let mut ranked: Vec<String> = Vec::new();
    for token in tokens {
        if seen.insert(token.clone()) {
            ranked.push(token);
        }
    }
    ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));
    ranked.truncate(top_n);

    ranked
}

//! Lexicon-based sentiment scoring with negation handling.
//!
//! Scores are the mean polarity of matched lexicon words, clamped to
//! [-1, 1]. A negation word flips only the immediately following sentiment
//! word (1-word lookahead); any other intervening word disarms it.

mod lexicon;

use lexicon::{NEGATION_WORDS, NEGATIVE_WORDS, POSITIVE_WORDS};

/// Score the sentiment of a text in [-1, 1].
///
/// Returns 0.0 when the text contains no sentiment words, including for
/// empty input. Matching is case-insensitive.
pub fn analyze_sentiment(text: &str) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    let mut negated = false;

    for word in sentiment_words(text) {
        let word = word.as_str();
        if NEGATION_WORDS.contains(&word) {
            negated = true;
            continue;
        }

        if POSITIVE_WORDS.contains(&word) {
            sum += if negated { -1.0 } else { 1.0 };
            count += 1;
        } else if NEGATIVE_WORDS.contains(&word) {
            sum += if negated { 1.0 } else { -1.0 };
            count += 1;
        }
        negated = false;
    }

    (sum / count.max(1) as f64).clamp(-1.0, 1.0)
}

/// Score each text independently. Output has the same length as the input.
pub fn analyze_sentiment_batch(texts: &[String]) -> Vec<f64> {
    texts.iter().map(|t| analyze_sentiment(t)).collect()
}

/// Case-folded word split that preserves apostrophes, so contractions like
/// "don't" survive as single tokens for the negation table.
fn sentiment_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

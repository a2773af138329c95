//! Static sentiment lexicons.
//!
//! Fixed English word lists; not configuration. The positive and negative
//! tables are disjoint, and the negation table is consulted before either.

pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "awesome", "fantastic",
    "wonderful", "love", "loved", "happy", "glad", "pleased", "excited",
    "exciting", "positive", "success", "successful", "win", "winning", "won",
    "improve", "improved", "improvement", "progress", "achieve", "achieved",
    "achievement", "perfect", "best", "better", "strong", "stronger",
    "growth", "grow", "grew", "gain", "gained", "benefit", "beneficial",
    "effective", "efficient", "productive", "agree", "agreed", "support",
    "confident", "clear", "helpful", "valuable", "opportunity", "promising",
    "optimistic", "smooth", "solid", "impressive", "outstanding", "superb",
    "delighted", "thrilled", "brilliant", "nice", "enjoy", "enjoyed",
    "satisfied", "satisfying", "works", "worked", "resolved", "ahead",
    "boost",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "poor", "worse", "worst", "fail",
    "failed", "failure", "failing", "problem", "problems", "issue", "issues",
    "concern", "concerned", "concerning", "worry", "worried", "worrying",
    "risk", "risky", "danger", "dangerous", "delay", "delayed", "delays",
    "block", "blocked", "blocker", "bug", "bugs", "broken", "breaking",
    "difficult", "difficulty", "struggle", "struggling", "confused",
    "confusing", "confusion", "unclear", "wrong", "mistake", "mistakes",
    "error", "errors", "loss", "lost", "lose", "losing", "decline",
    "declined", "drop", "dropped", "missed", "missing", "unhappy", "angry",
    "frustrated", "frustrating", "frustration", "disappointed",
    "disappointing", "disappointment", "negative", "cancel", "cancelled",
    "behind", "slow",
];

pub const NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "none", "neither", "nor", "cannot", "can't",
    "don't", "doesn't", "didn't", "won't", "wouldn't", "couldn't",
    "shouldn't", "isn't", "aren't", "wasn't", "weren't", "hardly", "barely",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lexicons_are_disjoint() {
        let positive: HashSet<_> = POSITIVE_WORDS.iter().collect();
        let negative: HashSet<_> = NEGATIVE_WORDS.iter().collect();
        assert!(positive.is_disjoint(&negative));
    }

    #[test]
    fn test_lexicons_are_lowercase() {
        for word in POSITIVE_WORDS.iter().chain(NEGATIVE_WORDS).chain(NEGATION_WORDS) {
            assert_eq!(*word, word.to_lowercase());
        }
    }
}

//! Summary assembly: orchestrates ranking, extraction, and sentiment into
//! one `Summary`.

use crate::extract::RuleExtractor;
use crate::sentiment::analyze_sentiment_batch;
use crate::text::split_sentences;

use super::models::Summary;
use super::textrank::text_rank;

const TLDR_SENTENCES: usize = 5;
const KEY_POINT_SENTENCES: usize = 10;

/// Summarize a transcript, splitting sentiment segments naively on periods.
///
/// Total for any input: an empty or degenerate transcript yields a `Summary`
/// whose sequences are all empty.
pub fn summarize(transcript: &str, user_name: &str) -> Summary {
    let segments: Vec<String> = transcript
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    summarize_with_segments(transcript, user_name, &segments)
}

/// Summarize a transcript, scoring sentiment over caller-supplied segment
/// texts (speaker turns, paragraphs, or whatever boundaries the caller has).
pub fn summarize_with_segments(
    transcript: &str,
    user_name: &str,
    segments: &[String],
) -> Summary {
    let sentences = split_sentences(transcript);
    let extractor = RuleExtractor::new();

    let tldr = select_in_order(&sentences, TLDR_SENTENCES);
    let key_points = select_in_order(&sentences, KEY_POINT_SENTENCES);

    let decisions = extractor.extract_decisions(&sentences);
    let action_items = extractor.extract_action_items(&sentences, user_name);
    let open_questions = extractor.extract_open_questions(&sentences);

    let topics = extractor.derive_topics(transcript);
    let highlights = extractor.extract_highlights(&sentences);
    let follow_ups = extractor.generate_follow_ups(&topics);

    let sentiment_by_segment = analyze_sentiment_batch(segments);

    log::debug!(
        "summarized transcript: {} sentences, {} decisions, {} action items, {} questions",
        sentences.len(),
        decisions.len(),
        action_items.len(),
        open_questions.len(),
    );

    Summary {
        tldr,
        key_points,
        decisions,
        action_items,
        open_questions,
        topics,
        highlights,
        follow_ups,
        sentiment_by_segment,
    }
}

/// Rank sentences, then restore reading order for presentation.
fn select_in_order(sentences: &[String], top_n: usize) -> Vec<String> {
    let mut indices = text_rank(sentences, top_n);
    indices.sort_unstable();
    indices.into_iter().map(|i| sentences[i].clone()).collect()
}

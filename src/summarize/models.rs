//! Structured summary model.

use serde::{Deserialize, Serialize};

use crate::extract::ActionItem;

/// Structured output of transcript summarization.
///
/// Every sequence is always present (possibly empty) — consumers never see a
/// missing field. Sentence-derived sequences are in original reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Top-ranked sentences, at most 5.
    #[serde(default)]
    pub tldr: Vec<String>,
    /// Top-ranked sentences, at most 10.
    #[serde(default)]
    pub key_points: Vec<String>,
    /// Sentences matching a decision cue.
    #[serde(default)]
    pub decisions: Vec<String>,
    /// Tasks with owner and optional due cue.
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
    /// Sentences ending in a question mark.
    #[serde(default)]
    pub open_questions: Vec<String>,
    /// Capitalized frequency-ranked terms.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Ranked sentences in reading order, fragments removed.
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Generated follow-up questions, one per leading topic.
    #[serde(default)]
    pub follow_ups: Vec<String>,
    /// One score in [-1, 1] per logical segment.
    #[serde(default)]
    pub sentiment_by_segment: Vec<f64>,
}

impl Summary {
    /// True when nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.tldr.is_empty()
            && self.key_points.is_empty()
            && self.decisions.is_empty()
            && self.action_items.is_empty()
            && self.open_questions.is_empty()
            && self.topics.is_empty()
            && self.highlights.is_empty()
            && self.follow_ups.is_empty()
    }
}

//! Rule-based extraction of decisions, action items, and open questions.

use std::collections::HashSet;

use regex::Regex;

use super::cues::{
    CapturePattern, ACTION_CUES, DECISION_CUES, DUE_CUES, FOLLOW_UP_STARTERS, OWNER_PATTERN,
};
use super::models::ActionItem;
use crate::summarize::{extract_keywords, text_rank};

const MAX_DECISIONS: usize = 10;
const MAX_QUESTIONS: usize = 10;
const MAX_TOPICS: usize = 10;
const MAX_FOLLOW_UPS: usize = 5;
const MAX_HIGHLIGHTS: usize = 10;

/// Keyword pool size scanned before topic-length filtering.
const TOPIC_POOL: usize = 50;

/// Minimum characters for a captured task to count as an action item.
const MIN_TASK_CHARS: usize = 5;

/// Highlights shorter than this read as fragments and are dropped.
const MIN_HIGHLIGHT_CHARS: usize = 20;

/// Extractor over the static cue tables. Compiles every pattern once; the
/// compiled set is immutable and shareable across threads.
pub struct RuleExtractor {
    decision_cues: Vec<(&'static str, Regex)>,
    action_cues: Vec<(&'static str, Regex, usize)>,
    due_cues: Vec<(Regex, usize)>,
    owner_re: Regex,
}

impl RuleExtractor {
    pub fn new() -> Self {
        let compile = |c: &CapturePattern| {
            (
                Regex::new(c.pattern).expect("invalid cue pattern"),
                c.group,
            )
        };
        Self {
            decision_cues: DECISION_CUES
                .iter()
                .map(|c| (c.label, Regex::new(c.pattern).expect("invalid cue pattern")))
                .collect(),
            action_cues: ACTION_CUES
                .iter()
                .map(|c| {
                    let (re, group) = compile(c);
                    (c.label, re, group)
                })
                .collect(),
            due_cues: DUE_CUES.iter().map(compile).collect(),
            owner_re: Regex::new(OWNER_PATTERN).expect("invalid owner pattern"),
        }
    }

    /// Sentences that contain any decision cue, in encounter order.
    pub fn extract_decisions(&self, sentences: &[String]) -> Vec<String> {
        sentences
            .iter()
            .filter(|s| self.decision_cues.iter().any(|(_, re)| re.is_match(s)))
            .take(MAX_DECISIONS)
            .cloned()
            .collect()
    }

    /// Action items with owner and optional due cue. The first matching cue
    /// wins per sentence; tasks are deduplicated case-insensitively.
    pub fn extract_action_items(&self, sentences: &[String], user_name: &str) -> Vec<ActionItem> {
        let mut items = Vec::new();
        let mut seen = HashSet::new();

        for sentence in sentences {
            // Questions are open questions, not obligations.
            if sentence.trim().ends_with('?') {
                continue;
            }
            let Some(task) = self.capture_task(sentence) else {
                continue;
            };
            if task.chars().count() < MIN_TASK_CHARS {
                continue;
            }
            if !seen.insert(task.to_lowercase()) {
                continue;
            }

            let owner = self.detect_owner(sentence).unwrap_or_else(|| user_name.to_string());
            let due = self.detect_due(sentence);
            items.push(ActionItem::new(owner, task).with_due(due));
        }

        items
    }

    /// Sentences whose trimmed text ends with a question mark.
    pub fn extract_open_questions(&self, sentences: &[String]) -> Vec<String> {
        sentences
            .iter()
            .filter(|s| s.trim().ends_with('?'))
            .take(MAX_QUESTIONS)
            .cloned()
            .collect()
    }

    /// Frequency-ranked topics from the whole text: keywords longer than 3
    /// characters, capitalized, capped at 10.
    pub fn derive_topics(&self, text: &str) -> Vec<String> {
        extract_keywords(text, TOPIC_POOL)
            .into_iter()
            .filter(|w| w.chars().count() > 3)
            .take(MAX_TOPICS)
            .map(|w| capitalize(&w))
            .collect()
    }

    /// Follow-up questions for up to 5 topics. Starters cycle round-robin by
    /// topic index, so output is deterministic and no starter repeats before
    /// all eight have been used.
    pub fn generate_follow_ups(&self, topics: &[String]) -> Vec<String> {
        topics
            .iter()
            .take(MAX_FOLLOW_UPS)
            .enumerate()
            .map(|(i, topic)| {
                let starter = FOLLOW_UP_STARTERS[i % FOLLOW_UP_STARTERS.len()];
                format!("{} {}?", starter, topic)
            })
            .collect()
    }

    /// Top-ranked sentences in original reading order, fragments dropped.
    pub fn extract_highlights(&self, sentences: &[String]) -> Vec<String> {
        let mut indices = text_rank(sentences, MAX_HIGHLIGHTS);
        indices.sort_unstable();
        indices
            .into_iter()
            .map(|i| sentences[i].clone())
            .filter(|s| s.chars().count() >= MIN_HIGHLIGHT_CHARS)
            .collect()
    }

    fn capture_task(&self, sentence: &str) -> Option<String> {
        for (_, re, group) in &self.action_cues {
            if let Some(caps) = re.captures(sentence) {
                let task = caps
                    .get(*group)
                    .map(|m| m.as_str().trim().trim_end_matches(['.', '!', '?']).trim())
                    .unwrap_or_default();
                if task.is_empty() {
                    return None;
                }
                return Some(task.to_string());
            }
        }
        None
    }

    fn detect_owner(&self, sentence: &str) -> Option<String> {
        let caps = self.owner_re.captures(sentence)?;
        let subject = caps.get(1)?.as_str();
        match subject.to_lowercase().as_str() {
            "i" | "we" => None,
            _ => Some(subject.to_string()),
        }
    }

    fn detect_due(&self, sentence: &str) -> Option<String> {
        for (re, group) in &self.due_cues {
            if let Some(caps) = re.captures(sentence) {
                if let Some(m) = caps.get(*group) {
                    return Some(m.as_str().to_string());
                }
            }
        }
        None
    }
}

impl Default for RuleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

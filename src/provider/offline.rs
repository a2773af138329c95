//! Offline provider backed by this crate's deterministic algorithms.

use async_trait::async_trait;

use crate::flashcards::{synthesize_flashcards, FlashcardDraft};
use crate::summarize::{extract_keywords, summarize, text_rank, Summary};
use crate::text::split_sentences;

use super::{Result, SummaryProvider};

/// Owner name used when flashcards are generated without a caller-supplied
/// user context.
const FALLBACK_OWNER: &str = "You";

/// Longest title returned, in characters; truncation happens at a word
/// boundary.
const MAX_TITLE_CHARS: usize = 60;

/// Fully local `SummaryProvider`. Never fails on valid string input, which
/// makes it the fallback when a remote provider errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProvider;

impl OfflineProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SummaryProvider for OfflineProvider {
    async fn summarize(&self, transcript: &str, user_name: &str) -> Result<Summary> {
        Ok(summarize(transcript, user_name))
    }

    async fn generate_flashcards(
        &self,
        transcript: &str,
        summary: Option<&Summary>,
    ) -> Result<Vec<FlashcardDraft>> {
        let drafts = match summary {
            Some(summary) => synthesize_flashcards(summary),
            None => synthesize_flashcards(&summarize(transcript, FALLBACK_OWNER)),
        };
        log::debug!("synthesized {} flashcard drafts", drafts.len());
        Ok(drafts)
    }

    async fn generate_title(&self, transcript: &str) -> String {
        let sentences = split_sentences(transcript);
        if let Some(&best) = text_rank(&sentences, 1).first() {
            return truncate_title(&sentences[best]);
        }

        // No usable sentence; fall back to the leading keywords.
        let keywords = extract_keywords(transcript, 3);
        keywords
            .iter()
            .map(|w| capitalize(w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Trim to at most `MAX_TITLE_CHARS` characters at a word boundary and drop
/// trailing sentence punctuation.
fn truncate_title(sentence: &str) -> String {
    let cleaned = sentence.trim().trim_end_matches(['.', '!', '?']);
    if cleaned.chars().count() <= MAX_TITLE_CHARS {
        return cleaned.to_string();
    }

    let mut title = String::new();
    for word in cleaned.split_whitespace() {
        let next_len = title.chars().count() + word.chars().count() + usize::from(!title.is_empty());
        if next_len > MAX_TITLE_CHARS {
            break;
        }
        if !title.is_empty() {
            title.push(' ');
        }
        title.push_str(word);
    }
    title
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

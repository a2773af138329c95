//! mneme: offline transcript intelligence.
//!
//! Extracts structured meaning from plain-text transcripts without any
//! network access or ML model, and schedules long-term review of the facts
//! it finds:
//! - Extractive summarization (sentence ranking, keywords, rule-based
//!   decision/action/question extraction, lexicon sentiment)
//! - Flashcard synthesis (QA, cloze, and term-definition cards)
//! - SM-2 variant spaced repetition scheduling
//!
//! Every function is pure and total over string input; callers own storage,
//! capture, and presentation. The async [`SummaryProvider`] contract lets a
//! network-backed implementation substitute for the offline one without
//! changing call sites.

pub mod extract;
pub mod flashcards;
pub mod provider;
pub mod sentiment;
pub mod summarize;
pub mod text;

// Re-exports for convenience
pub use extract::{ActionItem, RuleExtractor};
pub use flashcards::{
    calculate_next_review, filter_due_cards, synthesize_flashcards, CardType, Flashcard,
    FlashcardDraft, ReviewResult, ReviewState,
};
pub use provider::{provider_for, OfflineProvider, ProviderError, ProviderKind, SummaryProvider};
pub use sentiment::{analyze_sentiment, analyze_sentiment_batch};
pub use summarize::{extract_keywords, summarize, summarize_with_segments, text_rank, Summary};
pub use text::{chunk_text, split_sentences, tokenize, word_frequency};

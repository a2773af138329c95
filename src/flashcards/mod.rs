//! Flashcard synthesis and spaced repetition
//!
//! This module provides:
//! - Flashcard synthesis from a summary (four card strategies)
//! - SM-2 variant spaced repetition algorithm
//! - Review state tracking and due filtering

pub mod algorithm;
pub mod models;
mod synthesizer;

pub use algorithm::{
    calculate_next_review, filter_due_cards, format_interval, preview_intervals, ReviewResult,
    MIN_EASE_FACTOR,
};
pub use models::{CardType, Flashcard, FlashcardDraft, ReviewState};
pub use synthesizer::synthesize_flashcards;

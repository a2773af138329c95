//! Data models for the flashcard system

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::algorithm::ReviewResult;

/// Type of flashcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardType {
    /// Simple question and answer
    Qa,
    /// Fill-in-the-blank style
    Cloze,
    /// Front asks for the definition of a term
    TermDef,
    /// Front shows the definition, back names the term
    DefTerm,
}

impl Default for CardType {
    fn default() -> Self {
        Self::Qa
    }
}

/// A card as produced by a synthesis strategy, before it is given identity
/// and review state. This is the provider-contract output shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardDraft {
    #[serde(default)]
    pub card_type: CardType,
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl FlashcardDraft {
    pub fn new(card_type: CardType, front: String, back: String) -> Self {
        Self {
            card_type,
            front,
            back,
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Current spaced repetition state for a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    /// Perceived difficulty, 1 (easy) to 5 (hard)
    #[serde(default = "default_difficulty")]
    pub difficulty: i32,
    /// Current interval in days
    #[serde(default)]
    pub interval: i64,
    /// Consecutive successful reviews
    #[serde(default)]
    pub repetitions: i32,
    /// SM-2 ease factor (default 2.5, never below 1.3)
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f64,
    /// When the card is due for review
    pub due_date: DateTime<Utc>,
}

fn default_difficulty() -> i32 {
    3
}

fn default_ease_factor() -> f64 {
    2.5
}

impl ReviewState {
    /// Fresh state: due immediately, never reviewed.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            difficulty: default_difficulty(),
            interval: 0,
            repetitions: 0,
            ease_factor: default_ease_factor(),
            due_date: now,
        }
    }

    /// Check if the card is due for review. Inclusive: a card due exactly
    /// at `now` counts.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due_date <= now
    }
}

/// A flashcard with question (front) and answer (back)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: Uuid,
    #[serde(default)]
    pub card_type: CardType,
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub state: ReviewState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Flashcard {
    pub fn new(card_type: CardType, front: String, back: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            card_type,
            front,
            back,
            tags: Vec::new(),
            state: ReviewState::new(now),
            created_at: now,
            updated_at: now,
        }
    }

    /// Promote a synthesized draft into a reviewable card with default
    /// review state.
    pub fn from_draft(draft: FlashcardDraft) -> Self {
        let mut card = Self::new(draft.card_type, draft.front, draft.back);
        card.tags = draft.tags;
        card
    }

    /// Apply the outcome of a review. The caller persists the card after.
    pub fn apply_review(&mut self, result: &ReviewResult, now: DateTime<Utc>) {
        self.state.difficulty = result.difficulty;
        self.state.interval = result.interval;
        self.state.repetitions = result.repetitions;
        self.state.ease_factor = result.ease_factor;
        self.state.due_date = result.due_date;
        self.updated_at = now;
    }
}

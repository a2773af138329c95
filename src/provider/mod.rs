//! Provider contract for summarization and flashcard generation.
//!
//! The offline implementation in this crate and any network-backed
//! alternative share one async interface, so call sites stay unchanged when
//! a deployment swaps implementations. Fallback-on-failure is the caller's
//! responsibility; this crate has no knowledge of it.

mod offline;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flashcards::FlashcardDraft;
use crate::summarize::Summary;

pub use offline::OfflineProvider;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("provider request failed: {0}")]
    Request(String),

    #[error("provider returned a malformed response: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, ProviderError>;

/// Which provider implementation a deployment has configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProviderKind {
    /// This crate's deterministic algorithms; always available.
    #[default]
    Offline,
    /// A network-backed service outside this crate.
    Remote,
}

/// Transcript intelligence surface shared by offline and remote providers.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Produce a structured summary of the transcript.
    async fn summarize(&self, transcript: &str, user_name: &str) -> Result<Summary>;

    /// Produce flashcard drafts, reusing `summary` when the caller already
    /// has one.
    async fn generate_flashcards(
        &self,
        transcript: &str,
        summary: Option<&Summary>,
    ) -> Result<Vec<FlashcardDraft>>;

    /// Best-effort title. Never errors; empty string means no title.
    async fn generate_title(&self, transcript: &str) -> String;
}

/// Instantiate the provider for a configured kind. `Remote` returns `None`:
/// the remote implementation lives outside this crate and the caller wires
/// it up (and falls back to `OfflineProvider` when it fails).
pub fn provider_for(kind: ProviderKind) -> Option<Box<dyn SummaryProvider>> {
    match kind {
        ProviderKind::Offline => Some(Box::new(OfflineProvider::new())),
        ProviderKind::Remote => None,
    }
}

//! Rule-based extraction of decisions, action items, open questions, topics,
//! follow-ups, and highlights from segmented transcript text.

pub mod cues;
mod extractor;
mod models;

pub use extractor::RuleExtractor;
pub use models::ActionItem;

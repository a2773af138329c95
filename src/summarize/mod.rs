//! Extractive summarization: keyword extraction, sentence ranking, and the
//! summary assembler.

mod assembler;
mod keywords;
mod models;
mod textrank;

pub use assembler::{summarize, summarize_with_segments};
pub use keywords::extract_keywords;
pub use models::Summary;
pub use textrank::text_rank;

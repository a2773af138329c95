//! Text primitives: sentence segmentation, word tokenization, and chunking.
//!
//! Everything downstream (ranking, sentiment, extraction, card synthesis)
//! builds on this module.

mod chunker;
mod segmenter;
mod tokenizer;

pub use chunker::chunk_text;
pub use segmenter::split_sentences;
pub use tokenizer::{is_stop_word, tokenize, word_frequency};

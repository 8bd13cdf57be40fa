//! # Domain
//!
//! Word-count model and the whitespace tokenizer.
//!
//! - [`model`]: input entries, per-file records and the run summary
//! - [`scan`]: lazy, single-pass word scanning over a buffered byte stream

pub mod model;
pub mod scan;

pub use model::{InputEntry, Summary, WordCountRecord};
pub use scan::{TokenSpan, Words, count_words, is_word_separator};

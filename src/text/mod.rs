//! Text normalization.
//!
//! Tokenization and stop-word classification shared by the keyword density
//! and readability analyzers. English only.

mod stop_words;
mod tokenize;

pub use stop_words::is_stop_word;
pub use tokenize::tokenize;

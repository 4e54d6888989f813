//! English stop-word table.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English function words excluded from keyword ranking.
///
/// Single-letter words ("a", "i") are listed for completeness even though the
/// tokenizer never emits one-character tokens.
#[rustfmt::skip]
const STOP_WORDS: &[&str] = &[
    // articles and determiners
    "a", "an", "the", "this", "that", "these", "those",
    // pronouns
    "i", "me", "my", "we", "us", "our", "you", "your", "he", "him", "his", "she", "her", "it",
    "its", "they", "them", "their", "what", "which", "who", "whom",
    // prepositions
    "about", "above", "after", "at", "before", "below", "between", "by", "during", "for",
    "from", "in", "into", "of", "off", "on", "out", "over", "through", "to", "under", "up",
    "with",
    // conjunctions
    "and", "as", "but", "if", "nor", "or", "so", "than", "then",
    // auxiliary verbs
    "am", "are", "be", "been", "being", "can", "could", "did", "do", "does", "had", "has",
    "have", "is", "may", "might", "must", "shall", "should", "was", "were", "will", "would",
    // common modifiers
    "also", "here", "just", "no", "not", "only", "there", "too", "very",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Returns `true` if `token` is an English stop word.
///
/// Expects a lowercase token, as produced by [`tokenize`](super::tokenize).
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORD_SET.contains(token)
}

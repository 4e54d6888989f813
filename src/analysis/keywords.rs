//! Keyword density analysis.
//!
//! Ranks content words, bigrams, and trigrams by frequency and reports the
//! density of an optional target phrase. Ties keep first-seen order.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::config::{TOP_NGRAMS, TOP_SINGLE_WORDS};
use crate::error_handling::AnalysisError;
use crate::text::{is_stop_word, tokenize};
use crate::utils::density;

/// Frequency of a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    /// The word
    pub word: String,
    /// Occurrences in the token stream
    pub count: usize,
    /// `count / totalWords` as a two-decimal percentage
    pub density: String,
}

/// Frequency of a multi-word phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseFrequency {
    /// Space-joined n-gram
    pub phrase: String,
    /// Occurrences in the token stream
    pub count: usize,
    /// `count / totalWords` as a two-decimal percentage
    pub density: String,
}

/// Result for the caller-supplied target phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetKeyword {
    /// The phrase, lowercased and trimmed
    pub keyword: String,
    /// Occurrences (overlapping, for multi-word phrases)
    pub count: usize,
    /// `count / totalWords` as a two-decimal percentage
    pub density: String,
}

/// Keyword density report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordReport {
    /// Number of tokens
    pub total_words: usize,
    /// Number of distinct tokens
    pub unique_words: usize,
    /// Target phrase result, if one was given
    pub target_keyword: Option<TargetKeyword>,
    /// Top content words
    pub top_single_words: Vec<WordFrequency>,
    /// Top two-word phrases without stop words
    pub top_bigrams: Vec<PhraseFrequency>,
    /// Top three-word phrases without stop words
    pub top_trigrams: Vec<PhraseFrequency>,
}

/// Occurrence counts that remember first-seen order.
#[derive(Debug, Default)]
struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    fn add(&mut self, key: String) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    fn count(&self, key: &str) -> usize {
        self.index.get(key).map_or(0, |&i| self.entries[i].1)
    }

    /// Highest counts first; the sort is stable, so ties stay in first-seen order.
    fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Counts `n`-grams in which no member is a stop word.
///
/// Windows slide over the full token stream, stop words included; a window
/// containing any stop word is dropped. Yields nothing when `n` exceeds the
/// stream length.
fn ngram_counts(tokens: &[String], n: usize) -> FrequencyTable {
    let mut table = FrequencyTable::default();
    if n == 0 {
        return table;
    }
    for window in tokens.windows(n) {
        if window.iter().any(|t| is_stop_word(t)) {
            continue;
        }
        table.add(window.join(" "));
    }
    table
}

/// Counts occurrences of `needle` in `haystack`, overlapping matches included.
fn count_overlapping(haystack: &str, needle: &str) -> usize {
    let Some(step) = needle.chars().next().map(char::len_utf8) else {
        return 0;
    };
    let mut count = 0;
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        count += 1;
        start += pos + step;
    }
    count
}

fn phrases(table: &FrequencyTable, total: usize) -> Vec<PhraseFrequency> {
    table
        .top(TOP_NGRAMS)
        .into_iter()
        .map(|(phrase, count)| PhraseFrequency {
            phrase,
            count,
            density: density(count, total),
        })
        .collect()
}

/// Analyzes keyword density of `text`.
///
/// A single-word `target` is looked up in the content-word counts, so a stop
/// word always reports 0. A multi-word `target` is counted as a substring of
/// the space-joined token stream: matches may overlap and are not aligned to
/// word boundaries, so `"at the"` also matches inside `"cat the"`.
///
/// # Errors
///
/// Returns `AnalysisError::EmptyText` for blank input and
/// `AnalysisError::NoWords` when tokenization yields nothing.
pub fn analyze_keywords(
    text: &str,
    target: Option<&str>,
) -> Result<KeywordReport, AnalysisError> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyText);
    }
    let tokens = tokenize(text);
    let total = tokens.len();
    if total == 0 {
        return Err(AnalysisError::NoWords);
    }

    let unique_words = tokens.iter().collect::<HashSet<_>>().len();

    let mut words = FrequencyTable::default();
    for token in tokens.iter().filter(|t| !is_stop_word(t)) {
        words.add(token.clone());
    }

    let target_keyword = target
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .map(|keyword| {
            let count = if keyword.split_whitespace().count() == 1 {
                words.count(&keyword)
            } else {
                count_overlapping(&tokens.join(" "), &keyword)
            };
            TargetKeyword {
                density: density(count, total),
                keyword,
                count,
            }
        });

    let top_single_words = words
        .top(TOP_SINGLE_WORDS)
        .into_iter()
        .map(|(word, count)| WordFrequency {
            word,
            count,
            density: density(count, total),
        })
        .collect();

    log::debug!(
        "Keyword analysis: {} tokens, {} unique, {} content words",
        total,
        unique_words,
        words.entries.len()
    );

    Ok(KeywordReport {
        total_words: total,
        unique_words,
        target_keyword,
        top_single_words,
        top_bigrams: phrases(&ngram_counts(&tokens, 2), total),
        top_trigrams: phrases(&ngram_counts(&tokens, 3), total),
    })
}

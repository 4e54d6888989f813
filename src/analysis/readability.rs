//! Readability scoring using Flesch Reading Ease and Flesch-Kincaid Grade Level.
//!
//! Reading Ease: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`,
//! clamped to `[0, 100]`. Grade Level: `0.39 * (words/sentences) +
//! 11.8 * (syllables/words) - 15.59`, floored at 0. Both are rounded to one decimal.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::{
    COMPLEX_WORD_SYLLABLES, DIFFICULT_EASE_SCORE, LONG_SENTENCE_WORDS, MIN_READABILITY_WORDS,
    WALL_OF_TEXT_WORDS, WORDS_PER_MINUTE,
};
use crate::error_handling::AnalysisError;
use crate::utils::{compile_regex_unsafe, round_to};

const SENTENCE_END_PATTERN: &str = r"[.!?]+";
const PARAGRAPH_BREAK_PATTERN: &str = r"\n\s*\n";

static SENTENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(SENTENCE_END_PATTERN, "SENTENCE_END_RE"));
static PARAGRAPH_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(PARAGRAPH_BREAK_PATTERN, "PARAGRAPH_BREAK_RE"));

/// Reading ease bands, highest threshold first.
const EASE_BANDS: &[(f64, &str)] = &[
    (90.0, "Very Easy"),
    (80.0, "Easy"),
    (70.0, "Fairly Easy"),
    (60.0, "Standard"),
    (50.0, "Fairly Difficult"),
    (30.0, "Difficult"),
];
const EASE_FLOOR_BAND: &str = "Very Difficult";

/// Grade bands, lowest ceiling first.
const GRADE_BANDS: &[(f64, &str)] = &[
    (5.0, "Elementary school"),
    (8.0, "Middle school"),
    (12.0, "High school"),
    (16.0, "College"),
];
const GRADE_CEILING_BAND: &str = "Graduate";

/// A score and its qualitative band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Score {
    /// Numeric score, one decimal
    pub score: f64,
    /// Human-readable band
    pub interpretation: String,
}

/// Counts behind the scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityStats {
    /// Words after stripping punctuation
    pub words: usize,
    /// Sentences (at least 1)
    pub sentences: usize,
    /// Paragraphs separated by blank lines
    pub paragraphs: usize,
    /// Estimated syllables
    pub syllables: usize,
    /// Mean words per sentence, one decimal
    pub avg_words_per_sentence: f64,
    /// Mean syllables per word, two decimals
    pub avg_syllables_per_word: f64,
    /// Estimated reading time, one decimal
    pub reading_time_minutes: f64,
}

/// Readability report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityReport {
    /// Flesch Reading Ease, 0 (hardest) to 100 (easiest)
    pub flesch_reading_ease: Score,
    /// Flesch-Kincaid Grade Level, US school grade
    pub flesch_kincaid_grade: Score,
    /// Underlying counts
    pub stats: ReadabilityStats,
    /// Suggestions, in a fixed order
    pub tips: Vec<String>,
}

/// Estimates the syllables in one word.
///
/// Counts vowel groups (`y` included), treats words of three letters or fewer
/// as one syllable, drops a silent trailing `e`, and adds one back for a
/// consonant + `le` ending ("ta-ble"). Never returns less than 1.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if letters.len() <= 3 {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut count = 0;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    let n = letters.len();
    if letters[n - 1] == 'e' && count > 1 {
        count -= 1;
    }
    if letters[n - 2] == 'l' && letters[n - 1] == 'e' && !is_vowel(letters[n - 3]) {
        count += 1;
    }

    count.max(1)
}

fn split_words(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '\'' | '-'))
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

fn count_sentences(text: &str) -> usize {
    SENTENCE_END_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1)
}

fn count_paragraphs(text: &str) -> usize {
    PARAGRAPH_BREAK_RE
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count()
}

fn interpret_ease(score: f64) -> &'static str {
    EASE_BANDS
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map_or(EASE_FLOOR_BAND, |(_, band)| band)
}

fn interpret_grade(grade: f64) -> &'static str {
    GRADE_BANDS
        .iter()
        .find(|(ceiling, _)| grade <= *ceiling)
        .map_or(GRADE_CEILING_BAND, |(_, band)| band)
}

/// Scores the readability of `text`.
///
/// # Errors
///
/// Returns `AnalysisError::EmptyText` for blank input, `AnalysisError::NoWords`
/// when nothing countable remains, and `AnalysisError::TooShort` below
/// `MIN_READABILITY_WORDS` words (exactly the minimum is accepted).
pub fn score_readability(text: &str) -> Result<ReadabilityReport, AnalysisError> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyText);
    }

    let words = split_words(text);
    let word_count = words.len();
    if word_count == 0 {
        return Err(AnalysisError::NoWords);
    }
    if word_count < MIN_READABILITY_WORDS {
        return Err(AnalysisError::TooShort {
            words: word_count,
            minimum: MIN_READABILITY_WORDS,
        });
    }

    let sentences = count_sentences(text);
    let paragraphs = count_paragraphs(text);
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let words_per_sentence = word_count as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / word_count as f64;

    let ease = (206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word).clamp(0.0, 100.0);
    let grade = (0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59).max(0.0);
    let ease = round_to(ease, 1);
    let grade = round_to(grade, 1);

    let mut tips = Vec::new();
    if words_per_sentence > LONG_SENTENCE_WORDS {
        tips.push(format!(
            "Average sentence length is {:.1} words. Aim for 15-20 words per sentence.",
            words_per_sentence
        ));
    }
    if syllables_per_word > COMPLEX_WORD_SYLLABLES {
        tips.push(format!(
            "Average word length is {:.2} syllables. Prefer shorter, simpler words.",
            syllables_per_word
        ));
    }
    if ease < DIFFICULT_EASE_SCORE {
        tips.push(
            "Text is difficult to read. Break up long sentences and replace jargon.".to_string(),
        );
    }
    if paragraphs == 1 && word_count > WALL_OF_TEXT_WORDS {
        tips.push(
            "Text is a single block of more than 100 words. Split it into paragraphs.".to_string(),
        );
    }

    log::debug!(
        "Readability: {} words, {} sentences, {} syllables -> ease {}, grade {}",
        word_count,
        sentences,
        syllables,
        ease,
        grade
    );

    Ok(ReadabilityReport {
        flesch_reading_ease: Score {
            score: ease,
            interpretation: interpret_ease(ease).to_string(),
        },
        flesch_kincaid_grade: Score {
            score: grade,
            interpretation: interpret_grade(grade).to_string(),
        },
        stats: ReadabilityStats {
            words: word_count,
            sentences,
            paragraphs,
            syllables,
            avg_words_per_sentence: round_to(words_per_sentence, 1),
            avg_syllables_per_word: round_to(syllables_per_word, 2),
            reading_time_minutes: round_to(word_count as f64 / WORDS_PER_MINUTE, 1),
        },
        tips,
    })
}

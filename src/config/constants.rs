//! Configuration constants.
//!
//! This module defines the fixed limits, thresholds, and defaults used by the
//! fetch layer and by every analyzer.

// Network
/// Per-request timeout in seconds for page, robots.txt, and sitemap fetches.
pub const FETCH_TIMEOUT_SECS: u64 = 15;
/// Maximum number of redirect hops to follow
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 10;
/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Default User-Agent string for HTTP requests.
///
/// Identifies the tool honestly so site owners can recognise (and allow or
/// block) audit traffic. Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "seo-inspect/",
    env!("CARGO_PKG_VERSION"),
    " (SEO audit bot)"
);

// Meta tag length bands (characters)
/// Titles shorter than this get a warning.
pub const TITLE_MIN_CHARS: usize = 30;
/// Lower bound of the ideal title band.
pub const TITLE_IDEAL_MIN_CHARS: usize = 50;
/// Upper bound of the ideal title band; longer titles are truncated in results pages.
pub const TITLE_MAX_CHARS: usize = 60;
/// Descriptions shorter than this get a warning.
pub const DESCRIPTION_MIN_CHARS: usize = 70;
/// Lower bound of the ideal description band.
pub const DESCRIPTION_IDEAL_MIN_CHARS: usize = 120;
/// Upper bound of the ideal description band.
pub const DESCRIPTION_MAX_CHARS: usize = 160;
/// Number of checks the meta tag score is reported against.
pub const META_TAG_CHECKS: usize = 8;
/// Open Graph properties every page should declare.
pub const REQUIRED_OPEN_GRAPH: &[&str] = &["og:title", "og:description", "og:image", "og:url"];
/// Twitter card property every page should declare.
pub const REQUIRED_TWITTER_CARD: &str = "twitter:card";

// Keyword density
/// Number of single words reported.
pub const TOP_SINGLE_WORDS: usize = 15;
/// Number of bigrams and trigrams reported.
pub const TOP_NGRAMS: usize = 10;

// Readability
/// Minimum word count required for a readability score (inclusive).
pub const MIN_READABILITY_WORDS: usize = 10;
/// Average adult silent reading speed, words per minute.
pub const WORDS_PER_MINUTE: f64 = 238.0;
/// Average sentence length above which a tip is given.
pub const LONG_SENTENCE_WORDS: f64 = 25.0;
/// Average syllables per word above which a tip is given.
pub const COMPLEX_WORD_SYLLABLES: f64 = 1.7;
/// Reading ease below which a tip is given.
pub const DIFFICULT_EASE_SCORE: f64 = 50.0;
/// Single-paragraph texts longer than this get a tip.
pub const WALL_OF_TEXT_WORDS: usize = 100;

// Heading structure
/// Headings longer than this (characters) are flagged.
pub const MAX_HEADING_CHARS: usize = 70;
/// Preview length (characters) used when quoting heading text in issues.
pub const PREVIEW_CHARS: usize = 40;
/// Number of checks the heading score is reported against.
pub const HEADING_CHECKS: usize = 4;

// Sitemaps
/// Maximum number of entries a single sitemap file may hold.
pub const SITEMAP_MAX_URLS: usize = 50_000;
/// Number of sitemap locations echoed back in the report.
pub const SITEMAP_SAMPLE_SIZE: usize = 10;

//! SEO analyzers.
//!
//! Each analyzer takes already-available input (text, markup, or a fetched
//! response) and returns a complete report or an `AnalysisError`:
//! - Keyword density (top words, bigrams, trigrams, target phrase)
//! - Readability (Flesch Reading Ease, Flesch-Kincaid grade)
//! - Heading structure (hierarchy, outline, issues)
//! - Meta tags (title/description bands, Open Graph, Twitter, canonical)
//! - robots.txt and XML sitemaps
//!
//! None of them keep state between calls.

mod headings;
mod keywords;
mod meta_tags;
mod readability;
mod robots;
mod sitemap;

// Re-export public API
pub use headings::{
    analyze_heading_structure, analyze_headings_html, build_outline, HeadingReport, LinkSummary,
};
pub use keywords::{
    analyze_keywords, KeywordReport, PhraseFrequency, TargetKeyword, WordFrequency,
};
pub use meta_tags::{analyze_meta, analyze_meta_tags_html, LengthCheck, MetaTagReport};
pub use readability::{
    count_syllables, score_readability, ReadabilityReport, ReadabilityStats, Score,
};
pub use robots::{analyze_robots, RobotsGroup, RobotsReport};
pub use sitemap::{analyze_sitemap, SitemapKind, SitemapReport};

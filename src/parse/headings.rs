//! Heading and link extraction.
//!
//! Inner markup is reduced to plain text: tags are removed, entities become a
//! single space, and whitespace runs collapse.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::html::parse_attributes;
use crate::utils::compile_regex_unsafe;

// Closing tag may be any heading level; mismatched pairs are still accepted.
// Opening-tag attributes follow the same quoting rules as in `html`.
const HEADING_PATTERN: &str =
    r#"(?is)<h([1-6])\b(?:[^>"'=]|=\s*"[^"]*"|=\s*'[^']*'|=|["'])*>(.*?)</h[1-6]\s*>"#;
const ANCHOR_PATTERN: &str =
    r#"(?is)<a\b((?:[^>"'=]|=\s*"[^"]*"|=\s*'[^']*'|=|["'])*)>(.*?)</a\s*>"#;
const TAG_PATTERN: &str = r"<[^>]*>";
const ENTITY_PATTERN: &str = r"&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);";
const WHITESPACE_PATTERN: &str = r"\s+";

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(HEADING_PATTERN, "HEADING_RE"));
static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ANCHOR_PATTERN, "ANCHOR_RE"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(TAG_PATTERN, "TAG_RE"));
static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ENTITY_PATTERN, "ENTITY_RE"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(WHITESPACE_PATTERN, "WHITESPACE_RE"));

/// A heading element in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingInfo {
    /// Heading level, 1 through 6
    pub level: u8,
    /// Plain-text content, trimmed and whitespace-collapsed
    pub text: String,
}

/// An anchor element with an `href`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// The `href` value as written
    pub href: String,
    /// Plain-text anchor content
    pub text: String,
    /// `true` for site-relative (`/...`) and fragment (`#...`) links
    pub internal: bool,
}

/// Reduces a markup fragment to plain text.
pub fn strip_markup(fragment: &str) -> String {
    let without_tags = TAG_RE.replace_all(fragment, "");
    let without_entities = ENTITY_RE.replace_all(&without_tags, " ");
    WHITESPACE_RE
        .replace_all(&without_entities, " ")
        .trim()
        .to_string()
}

/// Extracts every `h1`..`h6` element in document order.
///
/// Headings whose text is empty after stripping are skipped.
pub fn extract_headings(html: &str) -> Vec<HeadingInfo> {
    let headings: Vec<HeadingInfo> = HEADING_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let level = caps[1].parse::<u8>().ok()?;
            let text = strip_markup(&caps[2]);
            (!text.is_empty()).then_some(HeadingInfo { level, text })
        })
        .collect();
    log::debug!("Found {} headings", headings.len());
    headings
}

/// Extracts every anchor carrying an `href`, in document order.
pub fn extract_links(html: &str) -> Vec<Link> {
    ANCHOR_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let attrs = parse_attributes(&caps[1]);
            let href = attrs.get("href")?.trim().to_string();
            let internal = href.starts_with('/') || href.starts_with('#');
            Some(Link {
                text: strip_markup(&caps[2]),
                href,
                internal,
            })
        })
        .collect()
}

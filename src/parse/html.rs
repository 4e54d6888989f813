//! Basic markup extraction.
//!
//! This module extracts head elements from raw markup by pattern matching:
//! - Page title
//! - Meta tags keyed by `name` or `property`
//! - Canonical link
//!
//! Tags may be self-closing or not, attributes may appear in any order, and
//! values may be single-, double-, or unquoted. Malformed markup yields empty
//! results rather than an error.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::utils::compile_regex_unsafe;

// Attribute list of an opening tag. A quote right after `=` opens a quoted
// value, which may contain '>'; any other quote is an ordinary character.
const TITLE_PATTERN: &str =
    r#"(?is)<title\b(?:[^>"'=]|=\s*"[^"]*"|=\s*'[^']*'|=|["'])*>(.*?)</title\s*>"#;
const META_PATTERN: &str =
    r#"(?is)<meta\b((?:[^>"'=]|=\s*"[^"]*"|=\s*'[^']*'|=|["'])*)>"#;
const LINK_PATTERN: &str =
    r#"(?is)<link\b((?:[^>"'=]|=\s*"[^"]*"|=\s*'[^']*'|=|["'])*)>"#;
const ATTRIBUTE_PATTERN: &str =
    r#"(?s)([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`][^\s"=<>`]*))"#;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(TITLE_PATTERN, "TITLE_RE"));
static META_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(META_PATTERN, "META_RE"));
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(LINK_PATTERN, "LINK_RE"));
static ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ATTRIBUTE_PATTERN, "ATTRIBUTE_RE"));

/// Which attribute identifies a meta tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaKey {
    /// `<meta name="...">`
    Name(String),
    /// `<meta property="...">` (Open Graph style)
    Property(String),
}

impl MetaKey {
    /// The identifying value, lowercased.
    pub fn as_str(&self) -> &str {
        match self {
            MetaKey::Name(s) | MetaKey::Property(s) => s,
        }
    }
}

/// A meta tag found in the markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    /// `name` or `property` value
    pub key: MetaKey,
    /// `content` value, empty if the attribute is absent
    pub content: String,
}

/// Parses the attribute list of an opening tag.
///
/// Names are lowercased. When an attribute repeats, the first occurrence wins.
pub(crate) fn parse_attributes(raw: &str) -> HashMap<String, String> {
    let raw = raw.trim_end();
    let raw = raw.strip_suffix('/').unwrap_or(raw);

    let mut attrs = HashMap::new();
    for caps in ATTRIBUTE_RE.captures_iter(raw) {
        let name = caps[1].to_ascii_lowercase();
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        attrs.entry(name).or_insert(value);
    }
    attrs
}

/// Extracts the trimmed text of the first `<title>` element.
///
/// Returns `None` if the markup has no title element.
pub fn extract_title(html: &str) -> Option<String> {
    let title = TITLE_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string());
    log::debug!("Extracted title: {:?}", title);
    title
}

/// Extracts every meta tag carrying a `name` or `property` attribute.
///
/// Tags are returned in document order. `name` takes precedence when both
/// attributes are present; tags with neither are skipped.
pub fn extract_meta_tags(html: &str) -> Vec<MetaTag> {
    let mut tags = Vec::new();
    for caps in META_RE.captures_iter(html) {
        let attrs = parse_attributes(&caps[1]);
        let non_empty = |key: &str| {
            attrs
                .get(key)
                .map(|v| v.trim().to_ascii_lowercase())
                .filter(|v| !v.is_empty())
        };

        let key = match (non_empty("name"), non_empty("property")) {
            (Some(name), _) => MetaKey::Name(name),
            (None, Some(property)) => MetaKey::Property(property),
            (None, None) => continue,
        };
        let content = attrs.get("content").cloned().unwrap_or_default();
        tags.push(MetaTag { key, content });
    }
    log::debug!("Found {} meta tags", tags.len());
    tags
}

/// Extracts the `href` of the first `<link rel="canonical">`.
pub fn extract_canonical(html: &str) -> Option<String> {
    LINK_RE.captures_iter(html).find_map(|caps| {
        let attrs = parse_attributes(&caps[1]);
        let is_canonical = attrs
            .get("rel")
            .is_some_and(|rel| rel.trim().eq_ignore_ascii_case("canonical"));
        if !is_canonical {
            return None;
        }
        attrs
            .get("href")
            .map(|href| href.trim().to_string())
            .filter(|href| !href.is_empty())
    })
}

//! XML sitemap analysis.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::{SITEMAP_MAX_URLS, SITEMAP_SAMPLE_SIZE};
use crate::fetch::FetchedPage;
use crate::utils::compile_regex_unsafe;

static LOC_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?is)<loc\b[^>]*>(.*?)</loc\s*>", "LOC_RE"));
static LASTMOD_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?i)<lastmod\b", "LASTMOD_RE"));
static CDATA_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?s)^<!\[CDATA\[(.*)\]\]>$", "CDATA_RE"));

/// Root element of the sitemap document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SitemapKind {
    /// `<sitemapindex>` listing child sitemaps
    Index,
    /// `<urlset>` listing pages
    Urlset,
    /// Neither root element was found
    Unknown,
}

impl SitemapKind {
    fn detect(body: &str) -> Self {
        let lower = body.to_ascii_lowercase();
        if lower.contains("<sitemapindex") {
            SitemapKind::Index
        } else if lower.contains("<urlset") {
            SitemapKind::Urlset
        } else {
            SitemapKind::Unknown
        }
    }
}

/// Sitemap report.
///
/// When the sitemap could not be retrieved only `url`, `found` and `issues`
/// are serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapReport {
    /// Sitemap URL
    pub url: String,
    /// Whether the sitemap was served with a 2xx status
    pub found: bool,
    /// Root element kind
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SitemapKind>,
    /// Number of `<loc>` entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_count: Option<usize>,
    /// Number of `<lastmod>` entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod_count: Option<usize>,
    /// First entries, in document order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample: Option<Vec<String>>,
    /// Problems found
    pub issues: Vec<String>,
}

fn extract_locations(body: &str) -> Vec<String> {
    LOC_RE
        .captures_iter(body)
        .map(|caps| {
            let raw = caps[1].trim();
            CDATA_RE
                .captures(raw)
                .map_or(raw, |inner| inner.get(1).map_or(raw, |m| m.as_str()))
                .trim()
                .to_string()
        })
        .filter(|loc| !loc.is_empty())
        .collect()
}

fn is_absolute(loc: &str) -> bool {
    url::Url::parse(loc).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

/// Analyzes a fetched sitemap or sitemap index.
///
/// A non-2xx response is reported as `found: false` rather than an error.
pub fn analyze_sitemap(url: &str, fetched: &FetchedPage) -> SitemapReport {
    if !fetched.is_success() {
        log::info!("Sitemap at {} returned HTTP {}", url, fetched.status);
        return SitemapReport {
            url: url.to_string(),
            found: false,
            kind: None,
            url_count: None,
            lastmod_count: None,
            sample: None,
            issues: vec![format!("Sitemap not found (HTTP {}).", fetched.status)],
        };
    }

    let kind = SitemapKind::detect(&fetched.body);
    let locations = extract_locations(&fetched.body);
    let lastmod_count = LASTMOD_RE.find_iter(&fetched.body).count();
    let mut issues = Vec::new();

    if kind == SitemapKind::Unknown {
        issues.push(
            "Document has neither a <urlset> nor a <sitemapindex> root element.".to_string(),
        );
    }
    if locations.is_empty() {
        issues.push("Sitemap contains no <loc> entries.".to_string());
    }
    if locations.len() > SITEMAP_MAX_URLS {
        issues.push(format!(
            "Sitemap lists {} entries, above the protocol limit of {}. Split it and use a sitemap index.",
            locations.len(),
            SITEMAP_MAX_URLS
        ));
    }
    if lastmod_count < locations.len() {
        issues.push(format!(
            "{} of {} entries have no <lastmod> date.",
            locations.len() - lastmod_count,
            locations.len()
        ));
    }
    let relative = locations.iter().filter(|loc| !is_absolute(loc)).count();
    if relative > 0 {
        issues.push(format!("{relative} entries are not absolute http(s) URLs."));
    }

    log::debug!(
        "Parsed sitemap at {}: {:?}, {} entries",
        url,
        kind,
        locations.len()
    );

    SitemapReport {
        url: url.to_string(),
        found: true,
        kind: Some(kind),
        url_count: Some(locations.len()),
        lastmod_count: Some(lastmod_count),
        sample: Some(locations.into_iter().take(SITEMAP_SAMPLE_SIZE).collect()),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn page(status: u16, body: &str) -> FetchedPage {
        FetchedPage {
            url: "https://example.com/sitemap.xml".to_string(),
            final_url: "https://example.com/sitemap.xml".to_string(),
            status,
            headers: BTreeMap::new(),
            redirected: false,
            elapsed_ms: 5,
            body: body.to_string(),
        }
    }

    fn analyze(body: &str) -> SitemapReport {
        analyze_sitemap("https://example.com/sitemap.xml", &page(200, body))
    }

    #[test]
    fn test_urlset() {
        let report = analyze(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
              <url><loc> https://example.com/ </loc><lastmod>2024-01-01</lastmod></url>
              <url><loc><![CDATA[https://example.com/about]]></loc><lastmod>2024-02-01</lastmod></url>
            </urlset>"#,
        );
        assert!(report.found);
        assert_eq!(report.kind, Some(SitemapKind::Urlset));
        assert_eq!(report.url_count, Some(2));
        assert_eq!(
            report.sample.unwrap(),
            vec!["https://example.com/", "https://example.com/about"]
        );
        assert!(report.issues.is_empty(), "{:?}", report.issues);
    }

    #[test]
    fn test_index() {
        let report = analyze(
            "<sitemapindex><sitemap><loc>https://example.com/a.xml</loc></sitemap></sitemapindex>",
        );
        assert_eq!(report.kind, Some(SitemapKind::Index));
        assert_eq!(report.issues, vec!["1 of 1 entries have no <lastmod> date."]);
    }

    #[test]
    fn test_not_found() {
        let report = analyze_sitemap("https://example.com/sitemap.xml", &page(404, ""));
        assert!(!report.found);
        assert_eq!(report.issues, vec!["Sitemap not found (HTTP 404)."]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_unknown_document() {
        let report = analyze("<html><body>Not a sitemap</body></html>");
        assert_eq!(report.kind, Some(SitemapKind::Unknown));
        assert_eq!(report.issues.len(), 2);
        assert!(report.issues[1].contains("no <loc> entries"));
    }

    #[test]
    fn test_relative_locations() {
        let report = analyze(
            "<urlset><url><loc>/relative</loc><lastmod>2024</lastmod></url></urlset>",
        );
        assert_eq!(report.issues, vec!["1 entries are not absolute http(s) URLs."]);
    }

    #[test]
    fn test_sample_is_capped() {
        let entries: String = (0..25)
            .map(|i| format!("<url><loc>https://example.com/{i}</loc><lastmod>2024</lastmod></url>"))
            .collect();
        let report = analyze(&format!("<urlset>{entries}</urlset>"));
        assert_eq!(report.url_count, Some(25));
        let sample = report.sample.unwrap();
        assert_eq!(sample.len(), SITEMAP_SAMPLE_SIZE);
        assert_eq!(sample[0], "https://example.com/0");
    }

    #[test]
    fn test_serialized_type_field() {
        let json = serde_json::to_value(analyze("<urlset></urlset>")).unwrap();
        assert_eq!(json["type"], "urlset");
        assert_eq!(json["urlCount"], 0);
    }
}

//! Meta tag analysis.
//!
//! Scores a page's title, description, Open Graph, Twitter card, and canonical
//! declarations against fixed length bands and presence checks.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{
    DESCRIPTION_IDEAL_MIN_CHARS, DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS, META_TAG_CHECKS,
    REQUIRED_OPEN_GRAPH, REQUIRED_TWITTER_CARD, TITLE_IDEAL_MIN_CHARS, TITLE_MAX_CHARS,
    TITLE_MIN_CHARS,
};
use crate::parse::{extract_canonical, extract_meta_tags, extract_title, MetaTag};

/// Length check for the title or description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthCheck {
    /// The text, if present
    pub value: Option<String>,
    /// Length in characters (0 when absent)
    pub length: usize,
    /// Present and not over the maximum length
    pub ok: bool,
    /// Guidance for this length
    pub tip: String,
}

/// Meta tag report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTagReport {
    /// `<title>` check
    pub title: LengthCheck,
    /// `<meta name="description">` check
    pub description: LengthCheck,
    /// Canonical URL, if declared
    pub canonical: Option<String>,
    /// Every `og:*` tag
    pub open_graph: BTreeMap<String, String>,
    /// Every `twitter:*` tag
    pub twitter: BTreeMap<String, String>,
    /// Remaining named tags
    pub other: BTreeMap<String, String>,
    /// Problems found, in check order
    pub issues: Vec<String>,
    /// `passed/8`
    pub score: String,
}

/// Length bands for one text field.
struct Bands {
    label: &'static str,
    min: usize,
    ideal_min: usize,
    max: usize,
}

const TITLE_BANDS: Bands = Bands {
    label: "Title",
    min: TITLE_MIN_CHARS,
    ideal_min: TITLE_IDEAL_MIN_CHARS,
    max: TITLE_MAX_CHARS,
};

const DESCRIPTION_BANDS: Bands = Bands {
    label: "Description",
    min: DESCRIPTION_MIN_CHARS,
    ideal_min: DESCRIPTION_IDEAL_MIN_CHARS,
    max: DESCRIPTION_MAX_CHARS,
};

impl Bands {
    /// Builds the check and, when the length is outside `[min, max]`, an issue.
    fn check(&self, value: Option<String>, missing: &str) -> (LengthCheck, Option<String>) {
        let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
            return (
                LengthCheck {
                    value: None,
                    length: 0,
                    ok: false,
                    tip: missing.to_string(),
                },
                Some(format!("Missing {}.", self.label.to_lowercase())),
            );
        };

        let length = value.chars().count();
        let &Bands {
            label,
            min,
            ideal_min,
            max,
        } = self;
        let (tip, issue) = if length < min {
            (
                format!("{label} is short ({length} chars). Aim for {ideal_min}-{max} characters."),
                Some(format!("{label} is too short ({length} chars, minimum {min}).")),
            )
        } else if length > max {
            (
                format!(
                    "{label} is too long ({length} chars) and may be truncated in search results. Keep it under {max} characters."
                ),
                Some(format!("{label} is too long ({length} chars, maximum {max}).")),
            )
        } else if length < ideal_min {
            (
                format!(
                    "{label} length is acceptable ({length} chars). {ideal_min}-{max} characters is ideal."
                ),
                None,
            )
        } else {
            (format!("{label} length is ideal ({length} chars)."), None)
        };

        (
            LengthCheck {
                value: Some(value),
                length,
                ok: length <= max,
                tip,
            },
            issue,
        )
    }
}

/// Analyzes extracted head elements.
///
/// Tags are grouped into maps by key; when a key repeats, the last tag wins.
/// The description comes from the first `description` tag. The score is
/// `8 - issues`, with one issue per failed check group (title, description,
/// Open Graph, Twitter card, canonical).
pub fn analyze_meta(
    title: Option<String>,
    tags: &[MetaTag],
    canonical: Option<String>,
) -> MetaTagReport {
    let mut open_graph = BTreeMap::new();
    let mut twitter = BTreeMap::new();
    let mut other = BTreeMap::new();
    let mut description = None;

    for tag in tags {
        let key = tag.key.as_str();
        if key.starts_with("og:") {
            open_graph.insert(key.to_string(), tag.content.clone());
        } else if key.starts_with("twitter:") {
            twitter.insert(key.to_string(), tag.content.clone());
        } else if key == "description" {
            if description.is_none() {
                description = Some(tag.content.trim().to_string());
            }
        } else {
            other.insert(key.to_string(), tag.content.clone());
        }
    }

    let mut issues = Vec::new();

    let (title, title_issue) = TITLE_BANDS.check(
        title,
        "Add a <title> tag of 50-60 characters describing the page.",
    );
    issues.extend(title_issue);

    let (description, description_issue) = DESCRIPTION_BANDS.check(
        description,
        "Add a <meta name=\"description\"> of 120-160 characters summarizing the page.",
    );
    issues.extend(description_issue);

    let missing_og: Vec<&str> = REQUIRED_OPEN_GRAPH
        .iter()
        .copied()
        .filter(|p| !open_graph.contains_key(*p))
        .collect();
    if !missing_og.is_empty() {
        issues.push(format!(
            "Missing Open Graph tags: {}.",
            missing_og.join(", ")
        ));
    }

    if !twitter.contains_key(REQUIRED_TWITTER_CARD) {
        issues.push(format!("Missing {REQUIRED_TWITTER_CARD} tag."));
    }

    let canonical = canonical.filter(|c| !c.is_empty());
    if canonical.is_none() {
        issues.push("Missing canonical link.".to_string());
    }

    let passed = META_TAG_CHECKS.saturating_sub(issues.len());
    log::debug!(
        "Meta tag analysis: {} tags, {} issues, score {}/{}",
        tags.len(),
        issues.len(),
        passed,
        META_TAG_CHECKS
    );

    MetaTagReport {
        title,
        description,
        canonical,
        open_graph,
        twitter,
        other,
        issues,
        score: format!("{passed}/{META_TAG_CHECKS}"),
    }
}

/// Extracts head elements from markup and analyzes them.
pub fn analyze_meta_tags_html(html: &str) -> MetaTagReport {
    analyze_meta(
        extract_title(html),
        &extract_meta_tags(html),
        extract_canonical(html),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETE_PAGE: &str = r#"<html><head>
        <title>Rust SEO Inspection: Audit Titles, Tags and Headings Fast</title>
        <meta name="description" content="Audit titles, descriptions, Open Graph and Twitter tags, canonical links and heading structure for any page, straight from the command line.">
        <meta property="og:title" content="Rust SEO Inspection">
        <meta property="og:description" content="Audit any page">
        <meta property="og:image" content="https://example.com/card.png">
        <meta property="og:url" content="https://example.com/">
        <meta name="twitter:card" content="summary_large_image">
        <meta name="viewport" content="width=device-width">
        <link rel="canonical" href="https://example.com/">
    </head></html>"#;

    #[test]
    fn test_short_title_no_description() {
        let report = analyze_meta_tags_html("<html><head><title>Short</title></head></html>");
        assert!(report.title.ok);
        assert_eq!(report.title.length, 5);
        assert!(report.title.tip.contains("short"));
        assert!(!report.description.ok);
        assert_eq!(report.description.value, None);
        assert!(report.issues.contains(&"Missing description.".to_string()));
        assert_eq!(report.issues.len(), 5);
        assert_eq!(report.score, "3/8");
    }

    #[test]
    fn test_complete_page_scores_eight() {
        let report = analyze_meta_tags_html(COMPLETE_PAGE);
        assert!(report.issues.is_empty(), "{:?}", report.issues);
        assert_eq!(report.score, "8/8");
        assert!(report.title.ok);
        assert!(report.title.tip.contains("ideal"));
        assert!(report.description.ok);
        assert_eq!(report.canonical.as_deref(), Some("https://example.com/"));
        assert_eq!(report.open_graph.len(), 4);
        assert_eq!(report.twitter["twitter:card"], "summary_large_image");
        assert_eq!(report.other["viewport"], "width=device-width");
        assert!(!report.other.contains_key("description"));
    }

    #[test]
    fn test_missing_everything() {
        let report = analyze_meta_tags_html("");
        assert!(!report.title.ok);
        assert_eq!(report.title.length, 0);
        assert_eq!(report.issues[0], "Missing title.");
        assert_eq!(
            report.issues[2],
            "Missing Open Graph tags: og:title, og:description, og:image, og:url."
        );
        assert_eq!(report.score, "3/8");
    }

    #[test]
    fn test_long_title_is_not_ok() {
        let title = "t".repeat(61);
        let report = analyze_meta(Some(title), &[], None);
        assert!(!report.title.ok);
        assert!(report.title.tip.contains("truncated"));
        assert_eq!(report.issues[0], "Title is too long (61 chars, maximum 60).");
    }

    #[test]
    fn test_acceptable_title_has_no_issue() {
        let report = analyze_meta(Some("x".repeat(40)), &[], None);
        assert!(report.title.ok);
        assert!(report.title.tip.contains("acceptable"));
        assert!(!report.issues.iter().any(|i| i.starts_with("Title")));
    }

    #[test]
    fn test_partial_open_graph_names_missing_properties() {
        let html = r#"<meta property="og:title" content="T"><meta property="og:url" content="/">"#;
        let report = analyze_meta_tags_html(html);
        assert!(report
            .issues
            .contains(&"Missing Open Graph tags: og:description, og:image.".to_string()));
    }

    #[test]
    fn test_repeated_keys_keep_last_value() {
        let html = r#"<meta property="og:image" content="/a.png"><meta property="og:image" content="/b.png">"#;
        let report = analyze_meta_tags_html(html);
        assert_eq!(report.open_graph["og:image"], "/b.png");
    }

    #[test]
    fn test_twitter_card_as_property() {
        let html = r#"<meta property="twitter:card" content="summary">"#;
        let report = analyze_meta_tags_html(html);
        assert!(!report.issues.iter().any(|i| i.contains("twitter:card")));
    }

    #[test]
    fn test_output_is_deterministic() {
        let first = serde_json::to_string_pretty(&analyze_meta_tags_html(COMPLETE_PAGE)).unwrap();
        let second = serde_json::to_string_pretty(&analyze_meta_tags_html(COMPLETE_PAGE)).unwrap();
        assert_eq!(first, second);
    }
}

//! Heading hierarchy analysis.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{HEADING_CHECKS, MAX_HEADING_CHARS, PREVIEW_CHARS};
use crate::parse::{extract_headings, extract_links, HeadingInfo, Link};
use crate::utils::preview;

/// Internal/external split of the page's anchors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSummary {
    /// Anchors with an `href`
    pub total: usize,
    /// Site-relative and fragment links
    pub internal: usize,
    /// Everything else
    pub external: usize,
}

impl LinkSummary {
    /// Summarizes extracted links.
    pub fn from_links(links: &[Link]) -> Self {
        let internal = links.iter().filter(|l| l.internal).count();
        Self {
            total: links.len(),
            internal,
            external: links.len() - internal,
        }
    }
}

/// Heading structure report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingReport {
    /// Number of non-empty headings
    pub heading_count: usize,
    /// Headings in document order
    pub headings: Vec<HeadingInfo>,
    /// Count per level, `h1` through `h6`
    pub hierarchy: BTreeMap<String, usize>,
    /// Problems found, in check order
    pub issues: Vec<String>,
    /// Indented outline, one heading per line
    pub outline: String,
    /// `passed/4`
    pub score: String,
    /// Anchor summary, present when the report was built from markup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<LinkSummary>,
}

/// Renders headings as an indented outline (two spaces per level below H1).
pub fn build_outline(headings: &[HeadingInfo]) -> String {
    if headings.is_empty() {
        return "(no headings)".to_string();
    }
    headings
        .iter()
        .map(|h| {
            format!(
                "{}H{}: {}",
                "  ".repeat(usize::from(h.level.saturating_sub(1))),
                h.level,
                h.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Analyzes an ordered heading sequence.
///
/// Headings with a level outside 1-6 are ignored. Every check runs
/// independently, so one page can collect several issues.
/// The score starts at 4 and loses one point for each of: no H1, more than
/// one H1, any skipped level, first heading not H1.
pub fn analyze_heading_structure(headings: &[HeadingInfo]) -> HeadingReport {
    let valid: Vec<HeadingInfo> = headings
        .iter()
        .filter(|h| (1..=6).contains(&h.level))
        .cloned()
        .collect();
    if valid.len() < headings.len() {
        log::debug!(
            "Ignoring {} headings with a level outside 1-6",
            headings.len() - valid.len()
        );
    }
    let headings = valid.as_slice();

    let mut hierarchy: BTreeMap<String, usize> =
        (1..=6).map(|level| (format!("h{level}"), 0)).collect();
    for heading in headings {
        *hierarchy.entry(format!("h{}", heading.level)).or_insert(0) += 1;
    }
    let h1_count = hierarchy.get("h1").copied().unwrap_or(0);

    let mut issues = Vec::new();
    let mut passed = HEADING_CHECKS;

    if h1_count == 0 {
        issues.push("Missing H1 heading. Every page should have exactly one H1.".to_string());
        passed -= 1;
    }
    if h1_count > 1 {
        issues.push(format!(
            "Multiple H1 headings found ({h1_count}). Use a single H1 for the main topic."
        ));
        passed -= 1;
    }

    let mut skipped = false;
    for pair in headings.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);
        if next.level > previous.level + 1 {
            issues.push(format!(
                "Skipped heading level: H{} -> H{} after \"{}\"",
                previous.level,
                next.level,
                preview(&previous.text, PREVIEW_CHARS)
            ));
            skipped = true;
        }
    }
    if skipped {
        passed -= 1;
    }

    if let Some(first) = headings.first() {
        if first.level != 1 {
            issues.push(format!(
                "First heading is H{}, expected H1.",
                first.level
            ));
            passed -= 1;
        }
    }

    for heading in headings {
        let length = heading.text.chars().count();
        if length > MAX_HEADING_CHARS {
            issues.push(format!(
                "Heading too long ({length} chars): \"{}...\"",
                preview(&heading.text, PREVIEW_CHARS)
            ));
        }
    }

    if headings.is_empty() {
        issues.push("No headings found. Structure content with H1-H6 headings.".to_string());
    }

    log::debug!(
        "Heading analysis: {} headings, {} issues, score {}/{}",
        headings.len(),
        issues.len(),
        passed,
        HEADING_CHECKS
    );

    HeadingReport {
        heading_count: headings.len(),
        headings: headings.to_vec(),
        hierarchy,
        issues,
        outline: build_outline(headings),
        score: format!("{passed}/{HEADING_CHECKS}"),
        links: None,
    }
}

/// Extracts headings and links from markup and analyzes them.
pub fn analyze_headings_html(html: &str) -> HeadingReport {
    let headings = extract_headings(html);
    let mut report = analyze_heading_structure(&headings);
    report.links = Some(LinkSummary::from_links(&extract_links(html)));
    report
}

//! robots.txt analysis.

use serde::Serialize;

use crate::fetch::FetchedPage;

/// One `User-agent` group and the rules attached to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsGroup {
    /// Agents named by consecutive `User-agent` lines
    pub user_agents: Vec<String>,
    /// `Allow` paths
    pub allow: Vec<String>,
    /// `Disallow` paths (empty values are not recorded)
    pub disallow: Vec<String>,
    /// `Crawl-delay` value as written
    pub crawl_delay: Option<String>,
}

/// robots.txt report.
///
/// When the file could not be retrieved only `url`, `found` and `issues` are
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobotsReport {
    /// robots.txt URL
    pub url: String,
    /// Whether the file was served with a 2xx status
    pub found: bool,
    /// Parsed groups, in file order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<RobotsGroup>>,
    /// Global `Sitemap` URLs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitemaps: Option<Vec<String>>,
    /// Problems found
    pub issues: Vec<String>,
}

#[derive(Default)]
struct ParsedRobots {
    groups: Vec<RobotsGroup>,
    sitemaps: Vec<String>,
    directives: usize,
    orphaned: usize,
    unknown: usize,
}

fn parse_robots(body: &str) -> ParsedRobots {
    let mut parsed = ParsedRobots::default();
    // Whether the previous directive was a User-agent line
    let mut in_agent_run = false;

    for line in body.lines() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let Some((name, value)) = line.split_once(':') else {
            parsed.unknown += 1;
            continue;
        };
        let name = name.trim().to_ascii_lowercase();
        let value = value.trim().to_string();
        parsed.directives += 1;

        match name.as_str() {
            "user-agent" => {
                match parsed.groups.last_mut().filter(|_| in_agent_run) {
                    Some(group) => group.user_agents.push(value),
                    None => parsed.groups.push(RobotsGroup {
                        user_agents: vec![value],
                        ..RobotsGroup::default()
                    }),
                }
                in_agent_run = true;
                continue;
            }
            "sitemap" => {
                if !value.is_empty() {
                    parsed.sitemaps.push(value);
                }
            }
            "allow" | "disallow" | "crawl-delay" => match parsed.groups.last_mut() {
                Some(group) => match name.as_str() {
                    "allow" if !value.is_empty() => group.allow.push(value),
                    "disallow" if !value.is_empty() => group.disallow.push(value),
                    "crawl-delay" => group.crawl_delay = Some(value),
                    _ => {}
                },
                None => parsed.orphaned += 1,
            },
            _ => parsed.unknown += 1,
        }
        in_agent_run = false;
    }

    parsed
}

/// Analyzes a fetched robots.txt.
///
/// A non-2xx response is reported as `found: false` rather than an error.
pub fn analyze_robots(url: &str, fetched: &FetchedPage) -> RobotsReport {
    if !fetched.is_success() {
        log::info!("robots.txt at {} returned HTTP {}", url, fetched.status);
        return RobotsReport {
            url: url.to_string(),
            found: false,
            groups: None,
            sitemaps: None,
            issues: vec![format!(
                "robots.txt not found (HTTP {}). Crawlers will assume the whole site may be crawled.",
                fetched.status
            )],
        };
    }

    let parsed = parse_robots(&fetched.body);
    let mut issues = Vec::new();

    if parsed.directives == 0 {
        issues.push("robots.txt is empty or contains no directives.".to_string());
    }
    if parsed.orphaned > 0 {
        issues.push(format!(
            "{} directive(s) appear before any User-agent line and are ignored.",
            parsed.orphaned
        ));
    }
    let blocks_everything = parsed.groups.iter().any(|group| {
        group.user_agents.iter().any(|agent| agent == "*")
            && group.disallow.iter().any(|path| path == "/")
    });
    if blocks_everything {
        issues.push("\"Disallow: /\" for User-agent * blocks the entire site.".to_string());
    }
    if parsed.sitemaps.is_empty() {
        issues.push("No Sitemap directive found.".to_string());
    }
    if parsed.unknown > 0 {
        issues.push(format!("{} unrecognized line(s) ignored.", parsed.unknown));
    }

    log::debug!(
        "Parsed robots.txt at {}: {} groups, {} sitemaps",
        url,
        parsed.groups.len(),
        parsed.sitemaps.len()
    );

    RobotsReport {
        url: url.to_string(),
        found: true,
        groups: Some(parsed.groups),
        sitemaps: Some(parsed.sitemaps),
        issues,
    }
}

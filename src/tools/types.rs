//! Tool catalogue and call/result types.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;

use crate::error_handling::{ErrorReport, ToolError};

/// String parameters passed to a tool, keyed by parameter name.
pub type ToolArgs = BTreeMap<String, String>;

/// The analyzers exposed as named entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum Tool {
    /// Title, description, Open Graph, Twitter card, canonical
    AnalyzeMetaTags,
    /// robots.txt of the site hosting a URL
    AnalyzeRobotsTxt,
    /// XML sitemap or sitemap index
    AnalyzeSitemap,
    /// Word and phrase frequency of raw text
    KeywordDensity,
    /// Flesch scores of raw text
    ReadabilityScore,
    /// Heading hierarchy of a page
    AnalyzeHeadings,
}

/// A declared tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolParam {
    /// Parameter name
    pub name: &'static str,
    /// What the caller should pass
    pub description: &'static str,
    /// Whether the call fails without it
    pub required: bool,
}

/// Self-description of a tool, as returned by `list_tools`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    /// Stable tool name
    pub name: &'static str,
    /// Natural-language description
    pub description: &'static str,
    /// Declared parameters
    pub parameters: Vec<ToolParam>,
}

const URL_PARAM: ToolParam = ToolParam {
    name: "url",
    description: "Page URL (https:// is assumed when no scheme is given)",
    required: true,
};

const TEXT_PARAM: ToolParam = ToolParam {
    name: "text",
    description: "Plain text content to analyze",
    required: true,
};

impl Tool {
    /// Stable name used for lookup and in listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::AnalyzeMetaTags => "analyze_meta_tags",
            Tool::AnalyzeRobotsTxt => "analyze_robots_txt",
            Tool::AnalyzeSitemap => "analyze_sitemap",
            Tool::KeywordDensity => "keyword_density",
            Tool::ReadabilityScore => "readability_score",
            Tool::AnalyzeHeadings => "analyze_headings",
        }
    }

    /// Natural-language description of what the tool reports.
    pub fn description(&self) -> &'static str {
        match self {
            Tool::AnalyzeMetaTags => {
                "Fetch a page and check its title, meta description, Open Graph and Twitter tags, and canonical link. Returns length checks, issues, and a score out of 8."
            }
            Tool::AnalyzeRobotsTxt => {
                "Fetch the robots.txt of the site hosting a URL and report user-agent groups, allow/disallow rules, sitemaps, and issues."
            }
            Tool::AnalyzeSitemap => {
                "Fetch an XML sitemap (or /sitemap.xml for a bare site URL) and report its type, entry count, a sample of URLs, and issues."
            }
            Tool::KeywordDensity => {
                "Compute word, bigram, and trigram frequencies of text with stop words removed, plus the density of an optional target keyword."
            }
            Tool::ReadabilityScore => {
                "Compute Flesch Reading Ease and Flesch-Kincaid grade level for text, with statistics and writing tips."
            }
            Tool::AnalyzeHeadings => {
                "Fetch a page and analyze its H1-H6 hierarchy: outline, skipped levels, H1 usage, overly long headings, and a link summary."
            }
        }
    }

    /// Declared parameters, required first.
    pub fn params(&self) -> Vec<ToolParam> {
        match self {
            Tool::AnalyzeMetaTags | Tool::AnalyzeHeadings => vec![URL_PARAM],
            Tool::AnalyzeRobotsTxt => vec![ToolParam {
                description: "Any URL on the site; /robots.txt is taken from its origin",
                ..URL_PARAM
            }],
            Tool::AnalyzeSitemap => vec![ToolParam {
                description: "Sitemap URL, or a site URL to check /sitemap.xml",
                ..URL_PARAM
            }],
            Tool::KeywordDensity => vec![
                TEXT_PARAM,
                ToolParam {
                    name: "keyword",
                    description: "Target keyword or phrase to measure",
                    required: false,
                },
            ],
            Tool::ReadabilityScore => vec![TEXT_PARAM],
        }
    }

    /// Describes this tool for listings.
    pub fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.as_str(),
            description: self.description(),
            parameters: self.params(),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Tool::iter()
            .find(|tool| tool.as_str() == name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))
    }
}

/// Describes every tool, in declaration order.
pub fn list_tools() -> Vec<ToolDescriptor> {
    Tool::iter().map(|tool| tool.descriptor()).collect()
}

/// Result of a tool call: a report or an error object, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// The analyzer's report
    Report(Value),
    /// `{ "error": message }`
    Error(ErrorReport),
}

impl ToolOutput {
    /// Returns `true` for the error object.
    pub fn is_error(&self) -> bool {
        matches!(self, ToolOutput::Error(_))
    }

    /// The output as a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            ToolOutput::Report(value) => value.clone(),
            ToolOutput::Error(report) => serde_json::json!({ "error": report.error }),
        }
    }

    /// Renders the output as JSON; `pretty` uses two-space indentation.
    pub fn render(&self, pretty: bool) -> String {
        let value = self.to_value();
        if pretty {
            format!("{value:#}")
        } else {
            value.to_string()
        }
    }
}

impl From<ToolError> for ToolOutput {
    fn from(err: ToolError) -> Self {
        ToolOutput::Error(ErrorReport::from(err))
    }
}

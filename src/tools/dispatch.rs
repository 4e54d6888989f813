//! Binding of tool names to analyzers.

use log::{info, warn};
use serde::Serialize;
use serde_json::Value;

use crate::analysis::{
    analyze_headings_html, analyze_keywords, analyze_meta_tags_html, analyze_robots,
    analyze_sitemap, score_readability,
};
use crate::app::{robots_txt_url, sitemap_url, validate_and_normalize_url};
use crate::error_handling::{AnalysisError, ToolError};
use crate::fetch::Fetcher;

use super::types::{Tool, ToolArgs, ToolOutput};

/// Looks up a parameter the tool declares as required.
///
/// Only absence is an error here; blank values reach the analyzer, which
/// reports them in its own terms (`Text is empty`, `Invalid URL: ...`).
fn required<'a>(args: &'a ToolArgs, name: &'static str) -> Result<&'a str, ToolError> {
    args.get(name)
        .map(String::as_str)
        .ok_or(ToolError::MissingParameter(name))
}

fn to_json<T: Serialize>(report: &T) -> Result<Value, ToolError> {
    Ok(serde_json::to_value(report)?)
}

/// Runs tools against a shared fetcher.
///
/// Holds no per-call state, so one dispatcher can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    fetcher: Fetcher,
}

impl Dispatcher {
    /// Creates a dispatcher that fetches pages with `fetcher`.
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Calls a tool by its stable name.
    pub async fn call_by_name(&self, name: &str, args: &ToolArgs) -> ToolOutput {
        match name.parse::<Tool>() {
            Ok(tool) => self.call(tool, args).await,
            Err(e) => {
                warn!("{e}");
                ToolOutput::from(e)
            }
        }
    }

    /// Calls a tool and folds any failure into an error object.
    pub async fn call(&self, tool: Tool, args: &ToolArgs) -> ToolOutput {
        info!("Calling {tool}");
        match self.run(tool, args).await {
            Ok(report) => ToolOutput::Report(report),
            Err(e) => {
                warn!("{tool} failed: {e}");
                ToolOutput::from(e)
            }
        }
    }

    async fn run(&self, tool: Tool, args: &ToolArgs) -> Result<Value, ToolError> {
        match tool {
            Tool::AnalyzeMetaTags => {
                let url = validate_and_normalize_url(required(args, "url")?)?;
                let page = self
                    .fetcher
                    .fetch_ok(&url)
                    .await
                    .map_err(AnalysisError::from)?;
                to_json(&analyze_meta_tags_html(&page.body))
            }
            Tool::AnalyzeRobotsTxt => {
                let url = robots_txt_url(required(args, "url")?)?;
                let page = self.fetcher.fetch(&url).await.map_err(AnalysisError::from)?;
                to_json(&analyze_robots(&url, &page))
            }
            Tool::AnalyzeSitemap => {
                let url = sitemap_url(required(args, "url")?)?;
                let page = self.fetcher.fetch(&url).await.map_err(AnalysisError::from)?;
                to_json(&analyze_sitemap(&url, &page))
            }
            Tool::KeywordDensity => {
                let text = required(args, "text")?;
                let keyword = args.get("keyword").map(String::as_str);
                to_json(&analyze_keywords(text, keyword)?)
            }
            Tool::ReadabilityScore => to_json(&score_readability(required(args, "text")?)?),
            Tool::AnalyzeHeadings => {
                let url = validate_and_normalize_url(required(args, "url")?)?;
                let page = self
                    .fetcher
                    .fetch_ok(&url)
                    .await
                    .map_err(AnalysisError::from)?;
                to_json(&analyze_headings_html(&page.body))
            }
        }
    }
}

//! Command-line options.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::config::constants::{DEFAULT_USER_AGENT, FETCH_TIMEOUT_SECS};
use crate::config::types::{FetchConfig, LogFormat, LogLevel};
use crate::tools::{Tool, ToolArgs};

/// Command-line options for `seo-inspect`.
///
/// # Examples
///
/// ```bash
/// # Meta tags of a page
/// seo-inspect meta-tags example.com
///
/// # Keyword density of a file, measuring a target phrase
/// seo-inspect keyword-density --file post.txt --keyword "rust tooling"
///
/// # Readability of text piped on stdin, compact output
/// cat post.txt | seo-inspect --compact readability
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "seo-inspect",
    version,
    about = "On-demand SEO analysis of web pages and raw text."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Print JSON on a single line instead of indented
    #[arg(long, global = true)]
    pub compact: bool,

    /// Analysis to run
    #[command(subcommand)]
    pub command: Command,
}

/// Where text-based tools read their input from.
#[derive(Debug, Clone, clap::Args)]
pub struct TextInput {
    /// Text to analyze (reads stdin when neither TEXT nor --file is given)
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,
}

impl TextInput {
    /// Resolves the text from the argument, the file, or `stdin`.
    pub fn read(self, mut stdin: impl Read) -> Result<String> {
        if let Some(text) = self.text {
            return Ok(text);
        }
        if let Some(path) = self.file {
            return std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()));
        }
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .context("Failed to read text from stdin")?;
        Ok(text)
    }
}

/// Available analyses.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check title, description, Open Graph, Twitter card, and canonical tags
    MetaTags {
        /// Page URL
        url: String,
    },
    /// Analyze the robots.txt of the site hosting a URL
    Robots {
        /// Any URL on the site
        url: String,
    },
    /// Analyze an XML sitemap (a bare site URL checks /sitemap.xml)
    Sitemap {
        /// Sitemap or site URL
        url: String,
    },
    /// Word and phrase frequencies of text
    KeywordDensity {
        #[command(flatten)]
        input: TextInput,

        /// Target keyword or phrase to measure
        #[arg(long, short = 'k')]
        keyword: Option<String>,
    },
    /// Flesch Reading Ease and Flesch-Kincaid grade of text
    Readability {
        #[command(flatten)]
        input: TextInput,
    },
    /// Heading hierarchy of a page
    Headings {
        /// Page URL
        url: String,
    },
    /// Describe every tool and its parameters
    ListTools,
}

impl Command {
    /// Converts the subcommand into a tool call, reading text input as needed.
    ///
    /// # Errors
    ///
    /// Fails for `list-tools`, which is not a tool call, and when text input
    /// cannot be read.
    pub fn into_call(self, stdin: impl Read) -> Result<(Tool, ToolArgs)> {
        let mut args = ToolArgs::new();
        let tool = match self {
            Command::MetaTags { url } => {
                args.insert("url".to_string(), url);
                Tool::AnalyzeMetaTags
            }
            Command::Robots { url } => {
                args.insert("url".to_string(), url);
                Tool::AnalyzeRobotsTxt
            }
            Command::Sitemap { url } => {
                args.insert("url".to_string(), url);
                Tool::AnalyzeSitemap
            }
            Command::Headings { url } => {
                args.insert("url".to_string(), url);
                Tool::AnalyzeHeadings
            }
            Command::KeywordDensity { input, keyword } => {
                args.insert("text".to_string(), input.read(stdin)?);
                if let Some(keyword) = keyword {
                    args.insert("keyword".to_string(), keyword);
                }
                Tool::KeywordDensity
            }
            Command::Readability { input } => {
                args.insert("text".to_string(), input.read(stdin)?);
                Tool::ReadabilityScore
            }
            Command::ListTools => bail!("list-tools does not map to a tool call"),
        };
        Ok((tool, args))
    }
}

impl Cli {
    /// Fetch settings from the global options.
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
        }
    }
}

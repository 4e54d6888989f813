//! seo_inspect library: on-demand SEO analysis
//!
//! This library analyzes web pages and raw text for search-engine
//! optimization: meta tags, robots.txt, XML sitemaps, keyword density,
//! readability, and heading structure. Each analyzer is a stateless function
//! returning a serializable report; the [`tools`] module binds them to named
//! entry points that always answer with JSON (a report or `{ "error": ... }`).
//!
//! # Example
//!
//! ```no_run
//! use seo_inspect::tools::{Dispatcher, Tool, ToolArgs};
//! use seo_inspect::{FetchConfig, Fetcher};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dispatcher = Dispatcher::new(Fetcher::new(&FetchConfig::default())?);
//!
//! let mut args = ToolArgs::new();
//! args.insert("url".to_string(), "https://example.com".to_string());
//!
//! let output = dispatcher.call(Tool::AnalyzeMetaTags, &args).await;
//! println!("{}", output.render(true));
//! # Ok(())
//! # }
//! ```
//!
//! Text analyzers need no runtime:
//!
//! ```
//! let report = seo_inspect::analysis::analyze_keywords("the cat sat on the mat", None).unwrap();
//! assert_eq!(report.total_words, 6);
//! ```

#![warn(missing_docs)]

pub mod analysis;
mod app;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
pub mod parse;
pub mod text;
pub mod tools;
mod utils;

// Re-export public API
pub use app::{robots_txt_url, sitemap_url, validate_and_normalize_url};
pub use config::{Cli, Command, FetchConfig, LogFormat, LogLevel};
pub use error_handling::{AnalysisError, ErrorReport, FetchError, InitializationError, ToolError};
pub use fetch::{FetchedPage, Fetcher};

//! Error type definitions.
//!
//! This module defines the error types surfaced by analyzers, the fetch
//! collaborator, and process initialization.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Fetch settings rejected before building the client.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigValidationError),
}

/// Failures of the page-fetch collaborator.
///
/// A non-2xx status is only an error when the caller asked for a successful
/// page (see `Fetcher::fetch_ok`); robots.txt and sitemap analysis fold it
/// into a "not found" report instead.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("Request to {url} timed out after {secs} seconds")]
    Timeout {
        /// Requested URL
        url: String,
        /// Configured timeout
        secs: u64,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} returned for {url}")]
    Status {
        /// Requested URL
        url: String,
        /// Response status code
        status: u16,
    },

    /// Too many redirects, or a redirect to an unusable location.
    #[error("Redirect error for {url}: {source}")]
    Redirect {
        /// Requested URL
        url: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// DNS, connect, TLS, or other transport failure.
    #[error("Failed to fetch {url}: {source}")]
    Transport {
        /// Requested URL
        url: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// The response body could not be read or decoded.
    #[error("Failed to read response body from {url}: {source}")]
    Body {
        /// Requested URL
        url: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },
}

/// Errors returned by analyzers.
///
/// Every variant renders to a single human-readable message; the dispatch
/// layer turns it into `{ "error": message }`.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Text input was empty or only whitespace.
    #[error("Text is empty")]
    EmptyText,

    /// Text contained no countable words after normalization.
    #[error("Text contains no analyzable words")]
    NoWords,

    /// Too few words for a meaningful readability score.
    #[error("Text is too short for readability analysis ({words} words, need at least {minimum})")]
    TooShort {
        /// Words found
        words: usize,
        /// Minimum required
        minimum: usize,
    },

    /// URL input failed validation.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The page could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Errors raised at the tool-dispatch boundary.
#[derive(Error, Debug)]
pub enum ToolError {
    /// No tool is registered under the requested name.
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    /// A required parameter was absent or blank.
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),

    /// The analyzer rejected the input or the fetch failed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// The report could not be converted to JSON.
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

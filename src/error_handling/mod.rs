//! Error handling.
//!
//! This module provides:
//! - Error type definitions for analyzers, fetching, and initialization
//! - Categorization of transport errors
//! - The uniform `{ "error": message }` shape returned across the tool boundary
//!
//! Analyzers never panic or return partial reports: they either produce a
//! complete report or an `AnalysisError`, which the dispatch layer renders as
//! an `ErrorReport`.

mod categorization;
mod types;

use serde::Serialize;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{AnalysisError, FetchError, InitializationError, ToolError};

/// Single-field error object returned in place of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Human-readable description of what went wrong
    pub error: String,
}

impl ErrorReport {
    /// Creates an error report from any message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<AnalysisError> for ErrorReport {
    fn from(err: AnalysisError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<ToolError> for ErrorReport {
    fn from(err: ToolError) -> Self {
        Self::new(err.to_string())
    }
}

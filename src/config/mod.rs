//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, thresholds, report sizes)
//! - CLI option types and fetch settings

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use cli::{Cli, Command, TextInput};
pub use types::{ConfigValidationError, FetchConfig, LogFormat, LogLevel};

//! Utility functions.
//!
//! This module provides:
//! - Static regex compilation
//! - Character-safe previews, rounding, and density formatting

mod patterns;
mod text;

pub use patterns::compile_regex_unsafe;
pub use text::{density, preview, round_to};

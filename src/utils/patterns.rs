//! Regex compilation utilities.

use regex::Regex;

/// Compiles a regex pattern that must succeed (for compile-time constants).
///
/// Panics with a descriptive message if compilation fails, which is
/// appropriate for static patterns: a failure is a programming error that
/// every test run would surface.
///
/// # Arguments
///
/// * `pattern` - The regex pattern to compile
/// * `context` - Name of the static being initialized, for the panic message
pub fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

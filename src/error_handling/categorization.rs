//! Error categorization.
//!
//! Maps raw `reqwest` failures onto the `FetchError` taxonomy so callers can
//! tell a timeout from a refused connection without inspecting the client error.

use super::types::FetchError;

/// Categorizes a `reqwest::Error` raised while sending a request.
///
/// # Arguments
///
/// * `url` - The URL that was requested
/// * `timeout_secs` - The configured timeout, echoed in timeout messages
/// * `error` - The `reqwest::Error` to categorize
pub fn categorize_reqwest_error(url: &str, timeout_secs: u64, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
            secs: timeout_secs,
        }
    } else if error.is_redirect() {
        FetchError::Redirect {
            url: url.to_string(),
            source: error,
        }
    } else if error.is_body() || error.is_decode() {
        FetchError::Body {
            url: url.to_string(),
            source: error,
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            source: error,
        }
    }
}

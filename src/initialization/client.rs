//! HTTP client initialization.

use std::time::Duration;

use crate::config::{FetchConfig, MAX_REDIRECT_HOPS};
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for every fetch.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the fetch settings
/// - Timeout from the fetch settings (15 seconds by default)
/// - Redirect following enabled (up to `MAX_REDIRECT_HOPS` hops)
///
/// `reqwest::Client` is reference-counted internally, so the returned value
/// is cheap to clone into concurrent calls.
///
/// # Errors
///
/// Returns `InitializationError::ConfigError` if the settings fail validation,
/// or `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &FetchConfig) -> Result<reqwest::Client, InitializationError> {
    config.validate()?;
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(client)
}

//! URL validation and normalization utilities.

use log::debug;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AnalysisError;

/// Validates and normalizes a URL.
///
/// Adds an `https://` prefix if no scheme is present, then checks that the URL
/// parses and uses the http or https scheme. Rejects empty input and URLs longer
/// than `MAX_URL_LENGTH`.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidUrl` describing why the URL was rejected.
pub fn validate_and_normalize_url(url: &str) -> Result<String, AnalysisError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(AnalysisError::InvalidUrl("URL is empty".to_string()));
    }

    if url.contains("://") && !url.starts_with("http://") && !url.starts_with("https://") {
        let scheme = url.split("://").next().unwrap_or_default();
        return Err(AnalysisError::InvalidUrl(format!(
            "unsupported scheme '{scheme}' (only http and https are supported)"
        )));
    }

    let normalized = if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    if normalized.len() > MAX_URL_LENGTH {
        return Err(AnalysisError::InvalidUrl(format!(
            "URL exceeds maximum length ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        )));
    }

    match Url::parse(&normalized) {
        Ok(parsed) if parsed.host_str().is_some() => {
            debug!("Normalized URL {url} -> {normalized}");
            Ok(normalized)
        }
        Ok(_) => Err(AnalysisError::InvalidUrl(format!("'{url}' has no host"))),
        Err(e) => Err(AnalysisError::InvalidUrl(format!("'{url}': {e}"))),
    }
}

/// Returns the `/robots.txt` URL for the site hosting `url`.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidUrl` if `url` fails validation.
pub fn robots_txt_url(url: &str) -> Result<String, AnalysisError> {
    let normalized = validate_and_normalize_url(url)?;
    join(&normalized, "/robots.txt")
}

/// Returns the sitemap URL to fetch for `url`.
///
/// A bare site URL (empty or `/` path) resolves to `/sitemap.xml`; any other
/// path is taken to be the sitemap itself.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidUrl` if `url` fails validation.
pub fn sitemap_url(url: &str) -> Result<String, AnalysisError> {
    let normalized = validate_and_normalize_url(url)?;
    let parsed =
        Url::parse(&normalized).map_err(|e| AnalysisError::InvalidUrl(e.to_string()))?;
    if parsed.path() == "/" && parsed.query().is_none() {
        join(&normalized, "/sitemap.xml")
    } else {
        Ok(normalized)
    }
}

fn join(base: &str, path: &str) -> Result<String, AnalysisError> {
    Url::parse(base)
        .and_then(|b| b.join(path))
        .map(|u| u.to_string())
        .map_err(|e| AnalysisError::InvalidUrl(e.to_string()))
}

//! Page fetching.
//!
//! The fetch layer is the only suspension point in the analyzers: it issues a
//! single GET with the configured user agent and timeout, follows redirects,
//! and hands back the raw body plus response metadata. It never retries.

mod types;

use std::collections::BTreeMap;
use std::time::Instant;

use log::{debug, info, warn};

use crate::config::FetchConfig;
use crate::error_handling::{categorize_reqwest_error, FetchError, InitializationError};
use crate::initialization::init_client;

pub use types::FetchedPage;

/// Collects response headers into a sorted map.
///
/// Header names are lowercase (as `reqwest` stores them). Values that are not
/// valid visible ASCII are skipped; repeated headers are joined with `", "`.
pub fn collect_headers(headers: &reqwest::header::HeaderMap) -> BTreeMap<String, String> {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };
        map.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    map
}

/// HTTP page fetcher shared by the URL-based tools.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    timeout_seconds: u64,
}

impl Fetcher {
    /// Builds a fetcher from the given settings.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the settings are invalid or the
    /// client cannot be built.
    pub fn new(config: &FetchConfig) -> Result<Self, InitializationError> {
        Ok(Self {
            client: init_client(config)?,
            timeout_seconds: config.timeout_seconds,
        })
    }

    /// Fetches `url`, returning the page whatever its status code.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` for transport failures, timeouts, redirect loops,
    /// and unreadable bodies.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let start = Instant::now();
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(url, self.timeout_seconds, e))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let headers = collect_headers(response.headers());
        let redirected = !same_resource(url, &final_url);

        let body = response
            .text()
            .await
            .map_err(|e| categorize_reqwest_error(url, self.timeout_seconds, e))?;

        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(
            "Fetched {url} -> {status} ({} bytes, {elapsed_ms} ms{})",
            body.len(),
            if redirected { ", redirected" } else { "" }
        );

        Ok(FetchedPage {
            url: url.to_string(),
            final_url,
            status,
            headers,
            redirected,
            elapsed_ms,
            body,
        })
    }

    /// Fetches `url` and requires a 2xx status.
    ///
    /// # Errors
    ///
    /// Everything `fetch` returns, plus `FetchError::Status` for non-2xx responses.
    pub async fn fetch_ok(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let page = self.fetch(url).await?;
        if !page.is_success() {
            warn!("Non-success status {} for {url}", page.status);
            return Err(FetchError::Status {
                url: url.to_string(),
                status: page.status,
            });
        }
        Ok(page)
    }
}

/// `https://a.com` and `https://a.com/` name the same resource; `reqwest`
/// reports the latter as the final URL even when nothing redirected.
fn same_resource(requested: &str, final_url: &str) -> bool {
    match (url::Url::parse(requested), url::Url::parse(final_url)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}

//! Response data structures.

use std::collections::BTreeMap;

use serde::Serialize;

/// A fetched page as seen by the analyzers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedPage {
    /// URL as requested
    pub url: String,
    /// URL after following redirects
    pub final_url: String,
    /// HTTP status code
    pub status: u16,
    /// Response headers (lowercase names; repeated headers joined with ", ")
    pub headers: BTreeMap<String, String>,
    /// Whether at least one redirect was followed
    pub redirected: bool,
    /// Wall-clock time for the request and body, in milliseconds
    pub elapsed_ms: u64,
    /// Raw response body
    #[serde(skip)]
    pub body: String,
}

impl FetchedPage {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

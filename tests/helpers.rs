// Shared test helpers for mock sites and dispatcher setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use seo_inspect::tools::{Dispatcher, ToolArgs};
use seo_inspect::{FetchConfig, Fetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a dispatcher with a short timeout and a test user agent.
#[allow(dead_code)] // Used by other test files
pub fn test_dispatcher() -> Dispatcher {
    let fetcher = Fetcher::new(&FetchConfig {
        timeout_seconds: 3,
        user_agent: "seo-inspect-test/1.0".to_string(),
    })
    .expect("Failed to build fetcher");
    Dispatcher::new(fetcher)
}

/// Builds tool arguments from name/value pairs.
#[allow(dead_code)] // Used by other test files
pub fn tool_args(pairs: &[(&str, &str)]) -> ToolArgs {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Serves `body` with `status` at `route` on a fresh mock server.
#[allow(dead_code)] // Used by other test files
pub async fn serve(route: &str, status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body.to_string()))
        .mount(&server)
        .await;
    server
}

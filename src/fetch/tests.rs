// Fetch module tests.

use super::*;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn add_header(headers: &mut HeaderMap, name: &str, value: &str) {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .unwrap_or_else(|_| panic!("Invalid header name in test: {}", name));
    let header_value = HeaderValue::from_str(value)
        .unwrap_or_else(|_| panic!("Invalid header value in test: {}", value));
    headers.append(header_name, header_value);
}

fn test_fetcher() -> Fetcher {
    Fetcher::new(&FetchConfig {
        timeout_seconds: 2,
        ..Default::default()
    })
    .expect("client should build")
}

#[test]
fn test_collect_headers_sorted_and_lowercase() {
    let mut headers = HeaderMap::new();
    add_header(&mut headers, "X-Frame-Options", "DENY");
    add_header(&mut headers, "Content-Type", "text/html");

    let result = collect_headers(&headers);
    let keys: Vec<_> = result.keys().cloned().collect();
    assert_eq!(keys, vec!["content-type", "x-frame-options"]);
    assert_eq!(result.get("x-frame-options"), Some(&"DENY".to_string()));
}

#[test]
fn test_collect_headers_joins_repeated_values() {
    let mut headers = HeaderMap::new();
    add_header(&mut headers, "Vary", "Accept");
    add_header(&mut headers, "Vary", "Origin");

    let result = collect_headers(&headers);
    assert_eq!(result.get("vary"), Some(&"Accept, Origin".to_string()));
}

#[tokio::test]
async fn test_fetch_sends_identifying_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .and(header("user-agent", crate::config::DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<title>Hi</title>"))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/page", server.uri());
    let page = test_fetcher().fetch(&url).await.expect("fetch should succeed");
    assert_eq!(page.status, 200);
    assert_eq!(page.body, "<title>Hi</title>");
    assert!(!page.redirected);
    assert_eq!(page.final_url, url);
}

#[tokio::test]
async fn test_fetch_follows_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{}/new", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
        .mount(&server)
        .await;

    let page = test_fetcher()
        .fetch(&format!("{}/old", server.uri()))
        .await
        .expect("fetch should succeed");
    assert!(page.redirected);
    assert!(page.final_url.ends_with("/new"));
    assert_eq!(page.body, "moved");
}

#[tokio::test]
async fn test_fetch_returns_non_success_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("nope"))
        .mount(&server)
        .await;

    let page = test_fetcher()
        .fetch(&format!("{}/robots.txt", server.uri()))
        .await
        .expect("404 is not a transport error");
    assert_eq!(page.status, 404);
    assert!(!page.is_success());
}

#[tokio::test]
async fn test_fetch_ok_rejects_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_fetcher()
        .fetch_ok(&format!("{}/", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_fetch_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(5)))
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(&FetchConfig {
        timeout_seconds: 1,
        ..Default::default()
    })
    .unwrap();
    let err = fetcher.fetch(&format!("{}/", server.uri())).await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout { secs: 1, .. }));
}

#[tokio::test]
async fn test_fetch_connection_refused_is_transport_error() {
    // Port 9 (discard) on localhost is almost never listening.
    let err = test_fetcher().fetch("http://127.0.0.1:9/").await.unwrap_err();
    assert!(matches!(
        err,
        FetchError::Transport { .. } | FetchError::Timeout { .. }
    ));
}

// Tool catalogue and dispatch tests.

use super::*;
use crate::config::FetchConfig;
use crate::fetch::Fetcher;
use strum::IntoEnumIterator;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dispatcher() -> Dispatcher {
    let fetcher = Fetcher::new(&FetchConfig {
        timeout_seconds: 2,
        ..Default::default()
    })
    .expect("client should build");
    Dispatcher::new(fetcher)
}

fn args(pairs: &[(&str, &str)]) -> ToolArgs {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_tool_names_round_trip() {
    let names: Vec<_> = Tool::iter().map(|t| t.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "analyze_meta_tags",
            "analyze_robots_txt",
            "analyze_sitemap",
            "keyword_density",
            "readability_score",
            "analyze_headings",
        ]
    );
    for tool in Tool::iter() {
        assert_eq!(tool.as_str().parse::<Tool>().unwrap(), tool);
        assert_eq!(tool.to_string(), tool.as_str());
    }
}

#[test]
fn test_unknown_tool_name() {
    let err = "crawl_site".parse::<Tool>().unwrap_err();
    assert_eq!(err.to_string(), "unknown tool 'crawl_site'");
}

#[test]
fn test_every_tool_declares_a_required_param() {
    for tool in Tool::iter() {
        let params = tool.params();
        assert!(params[0].required, "{tool}");
        assert!(!tool.description().is_empty());
    }
    let keyword = &Tool::KeywordDensity.params()[1];
    assert_eq!(keyword.name, "keyword");
    assert!(!keyword.required);
}

#[test]
fn test_list_tools_serializes() {
    let listing = serde_json::to_value(list_tools()).unwrap();
    assert_eq!(listing.as_array().unwrap().len(), 6);
    assert_eq!(listing[3]["name"], "keyword_density");
    assert_eq!(listing[3]["parameters"][1]["required"], false);
}

#[test]
fn test_render_pretty_uses_two_spaces() {
    let output = ToolOutput::Report(serde_json::json!({ "score": "3/8" }));
    assert_eq!(output.render(true), "{\n  \"score\": \"3/8\"\n}");
    assert_eq!(output.render(false), r#"{"score":"3/8"}"#);
}

#[tokio::test]
async fn test_missing_required_parameter() {
    let output = dispatcher().call(Tool::KeywordDensity, &ToolArgs::new()).await;
    assert_eq!(
        output.to_value(),
        serde_json::json!({ "error": "missing required parameter 'text'" })
    );
}

#[tokio::test]
async fn test_call_by_unknown_name() {
    let output = dispatcher().call_by_name("nope", &ToolArgs::new()).await;
    assert!(output.is_error());
    assert_eq!(output.to_value()["error"], "unknown tool 'nope'");
}

#[tokio::test]
async fn test_text_tools_run_without_network() {
    let d = dispatcher();
    let keywords = d
        .call_by_name(
            "keyword_density",
            &args(&[("text", "the cat sat on the mat the cat"), ("keyword", "cat")]),
        )
        .await;
    assert!(!keywords.is_error());
    assert_eq!(keywords.to_value()["targetKeyword"]["count"], 2);

    let empty = d
        .call(Tool::ReadabilityScore, &args(&[("text", "   ")]))
        .await;
    assert_eq!(empty.to_value()["error"], "Text is empty");
}

#[tokio::test]
async fn test_meta_tags_tool_fetches_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><head><title>Short</title></head></html>"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/page", server.uri());
    let output = dispatcher()
        .call(Tool::AnalyzeMetaTags, &args(&[("url", &url)]))
        .await;
    let value = output.to_value();
    assert_eq!(value["score"], "3/8");
    assert_eq!(value["title"]["ok"], true);
}

#[tokio::test]
async fn test_headings_tool_rejects_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let url = format!("{}/broken", server.uri());
    let output = dispatcher()
        .call(Tool::AnalyzeHeadings, &args(&[("url", &url)]))
        .await;
    assert!(output.is_error());
    assert_eq!(
        output.to_value()["error"],
        format!("HTTP 500 returned for {url}")
    );
}

#[tokio::test]
async fn test_invalid_url_is_reported() {
    let output = dispatcher()
        .call(Tool::AnalyzeMetaTags, &args(&[("url", "ftp://example.com")]))
        .await;
    let error = output.to_value()["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Invalid URL: unsupported scheme 'ftp'"));
}

//! Tests to ensure no panics occur on hostile or malformed input
//!
//! These tests verify that the analyzers handle unclosed tags, odd quoting,
//! multi-byte text, and degenerate inputs gracefully. Every call must return a
//! complete report or an error, never panic.

use seo_inspect::analysis::{
    analyze_headings_html, analyze_keywords, analyze_meta_tags_html, score_readability,
};
use seo_inspect::FetchConfig;

const MALFORMED: &[&str] = &[
    "",
    "<",
    "<title>",
    "<title>never closed",
    "<meta name=\"description\" content='mixed quotes\">",
    "<meta content=>",
    "<h1><h2>nested</h1></h2>",
    "<h7>not a heading</h7>",
    "<a href>empty href</a>",
    "<<<>>>\"'\"'",
    "<title>héllo wörld 日本語 🚀</title><h1>🚀🚀🚀</h1>",
];

#[test]
fn test_markup_analyzers_do_not_panic() {
    for html in MALFORMED {
        let meta = analyze_meta_tags_html(html);
        assert!(meta.score.ends_with("/8"));
        let headings = analyze_headings_html(html);
        assert!(headings.score.ends_with("/4"));
    }
}

#[test]
fn test_long_multibyte_heading_is_previewed_safely() {
    let html = format!("<h1>{}</h1>", "日本語".repeat(40));
    let report = analyze_headings_html(&html);
    assert!(report.issues.iter().any(|i| i.contains("too long")));
}

#[test]
fn test_text_analyzers_do_not_panic() {
    let inputs = [
        "",
        "   \n\t ",
        "!!! ??? ...",
        "'' -- '-'",
        "a b c d e f g h i j",
        "日本語のテキストだけ",
        "Wörter mit Umlauten sind hier. Und noch ein Satz ohne Ende",
    ];
    for text in inputs {
        let _ = analyze_keywords(text, Some("text"));
        let _ = analyze_keywords(text, Some("  "));
        let _ = score_readability(text);
    }
}

#[test]
fn test_fetch_config_validation_does_not_panic() {
    let mut config = FetchConfig::default();
    assert!(config.validate().is_ok(), "Default config should be valid");

    config.timeout_seconds = 0;
    assert!(config.validate().is_err(), "Zero timeout should fail validation");

    config = FetchConfig {
        timeout_seconds: 10_000,
        ..FetchConfig::default()
    };
    assert!(config.validate().is_err(), "Excessive timeout should fail validation");

    config = FetchConfig {
        user_agent: "  ".to_string(),
        ..FetchConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert_eq!(err.field, "user_agent");
}

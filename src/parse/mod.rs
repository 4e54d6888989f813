//! Markup extraction.
//!
//! This module extracts the pieces of a page the analyzers need:
//! - Title and meta tags (name/property + content)
//! - Canonical link
//! - Headings `h1`..`h6` as plain text
//! - Anchors with an internal/external flag
//!
//! All extraction is pattern matching over the raw markup text; no DOM is
//! built, and scripts and styles are never interpreted.

mod headings;
mod html;

// Re-export public API
pub use headings::{extract_headings, extract_links, strip_markup, HeadingInfo, Link};
pub use html::{extract_canonical, extract_meta_tags, extract_title, MetaKey, MetaTag};

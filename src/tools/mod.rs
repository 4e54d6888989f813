//! Tool dispatch.
//!
//! Exposes each analyzer as a named entry point with declared string
//! parameters:
//! - `analyze_meta_tags`, `analyze_headings`: fetch a page (2xx required)
//! - `analyze_robots_txt`, `analyze_sitemap`: fetch a derived URL; a non-2xx
//!   status becomes a `found: false` report
//! - `keyword_density`, `readability_score`: analyze text, no network
//!
//! Every failure comes back as `{ "error": message }`; nothing propagates
//! past the dispatcher.

mod dispatch;
mod types;

// Re-export public API
pub use dispatch::Dispatcher;
pub use types::{list_tools, Tool, ToolArgs, ToolDescriptor, ToolOutput, ToolParam};

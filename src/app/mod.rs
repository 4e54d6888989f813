//! Application-level helpers shared by the tool layer.

pub mod url;

pub use url::{robots_txt_url, sitemap_url, validate_and_normalize_url};

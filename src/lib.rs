//! # rs-pismo
//!
//! Semantic attribute extraction for HTML documents.
//!
//! Given a web page, this library answers questions such as "what is its
//! title?", "which keywords does it use most?" and "which images and videos
//! does it embed?". Attributes are computed lazily and memoized per document.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_pismo::{Document, InternalAttributeProvider, Options};
//!
//! let html = r#"<html><head><title>Ruby Inside | Ruby 1.9.2 Released</title></head>
//! <body><p>Ruby 1.9.2 is out. Ruby users rejoice.</p></body></html>"#;
//!
//! let doc = Document::from_html(html, Options::default());
//! assert_eq!(doc.title().as_deref(), Some("Ruby 1.9.2 Released"));
//!
//! let ruby = doc.keywords().into_iter().find(|k| k.term == "ruby");
//! assert_eq!(ruby.map(|k| k.frequency), Some(2));
//! ```
//!
//! ## Features
//!
//! - **Titles**: og:title, `<title>` and `<h1>` cascade, site names stripped from `<title>`
//! - **Keywords**: stop-word filtered term frequencies of the visible text
//! - **Media**: images (with a minimum-size filter), embedded videos, favicon, feeds
//! - **Metadata**: author, description, site name, lede and publication date
//! - **Loading**: URLs (blocking HTTP, `http` feature), streams or literal markup

mod document;
mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Attribute extractors and the provider traits.
pub mod attributes;

/// Handles, fetchers and document loading.
pub mod loader;

/// User-agent aliases and resolution.
pub mod user_agent;

/// URL utilities for validation and resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use attributes::{
    Attribute, AttributeValue, ExternalAttributeProvider, InternalAttributeProvider, Keyword, Video,
};
pub use document::Document;
pub use error::{Error, Result};
pub use loader::{Fetcher, Handle};
pub use options::Options;
pub use result::AttributeSet;

#[cfg(feature = "http")]
pub use loader::HttpFetcher;

/// Extracts every attribute from HTML markup using default options.
///
/// # Example
///
/// ```rust
/// use rs_pismo::extract;
///
/// let set = extract("<html><body><h1>Hello</h1></body></html>");
/// assert_eq!(set.title.as_deref(), Some("Hello"));
/// ```
#[must_use]
pub fn extract(html: &str) -> AttributeSet {
    extract_with_options(html, Options::default())
}

/// Extracts every attribute from HTML markup with custom options.
///
/// # Example
///
/// ```rust
/// use rs_pismo::{extract_with_options, Options};
///
/// let html = r#"<body><img src="/a.png"></body>"#;
/// let options = Options {
///     all_images: true,
///     url: Some("https://example.com/post".to_string()),
///     ..Options::default()
/// };
/// let set = extract_with_options(html, options);
/// assert_eq!(set.images, vec!["https://example.com/a.png"]);
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: Options) -> AttributeSet {
    Document::from_html(html, options).attributes()
}

/// Extracts every attribute from raw HTML bytes, detecting the encoding.
///
/// The encoding comes from a byte order mark or a `<meta charset>`
/// declaration and defaults to UTF-8. Invalid sequences become U+FFFD.
///
/// # Example
///
/// ```rust
/// use rs_pismo::{extract_bytes, Options};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9</title></head></html>";
/// let set = extract_bytes(html, Options::default());
/// assert_eq!(set.title.as_deref(), Some("Café"));
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8], options: Options) -> AttributeSet {
    extract_with_options(&encoding::decode_markup(html), options)
}

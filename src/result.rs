//! Serializable snapshot of a document's attributes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attributes::{Keyword, Video};

/// Every attribute of a document, computed at once.
///
/// Produced by [`Document::attributes`](crate::Document::attributes). Missing
/// values are `None` or empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeSet {
    /// Base URL the document was resolved against.
    pub url: Option<String>,

    /// Best title with the site name stripped.
    pub title: Option<String>,

    /// `<title>` text as written.
    pub html_title: Option<String>,

    /// `og:title` content as written.
    pub og_title: Option<String>,

    pub author: Option<String>,

    pub description: Option<String>,

    pub sitename: Option<String>,

    /// First substantial paragraph.
    pub lede: Option<String>,

    /// Publication date.
    pub datetime: Option<DateTime<Utc>>,

    /// Keyword frequencies in first-occurrence order.
    pub keywords: Vec<Keyword>,

    /// Image URLs (empty unless image collection is enabled).
    pub images: Vec<String>,

    pub videos: Vec<Video>,

    pub favicon: Option<String>,

    /// RSS and Atom feed URLs.
    pub feeds: Vec<String>,
}

impl AttributeSet {
    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

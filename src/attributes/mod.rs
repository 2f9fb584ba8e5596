//! Attribute extractors and the facade types shared by [`Document`](crate::Document).
//!
//! Each submodule computes one family of attributes from a parsed tree. The
//! [`Attribute`] enum names every attribute a document exposes and
//! [`AttributeValue`] carries a computed result, which is what the per-document
//! memo stores.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Keyword frequency analysis.
pub mod keywords;

/// Images, videos, favicon and feed links.
pub mod media;

/// Author, description, site name, lede and publication date.
pub mod meta;

/// Title cascade and site name stripping.
pub mod title;

pub use keywords::Keyword;
pub use media::{ImageFilter, Video};

/// Every attribute a document can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Title,
    HtmlTitle,
    OgTitle,
    Author,
    Description,
    Sitename,
    Lede,
    Datetime,
    Keywords,
    Images,
    Videos,
    Favicon,
    Feeds,
}

impl Attribute {
    /// All attributes, in a stable order.
    pub const ALL: [Self; 13] = [
        Self::Title,
        Self::HtmlTitle,
        Self::OgTitle,
        Self::Author,
        Self::Description,
        Self::Sitename,
        Self::Lede,
        Self::Datetime,
        Self::Keywords,
        Self::Images,
        Self::Videos,
        Self::Favicon,
        Self::Feeds,
    ];

    /// The attribute's name as used by [`Document::attribute`](crate::Document::attribute).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::HtmlTitle => "html_title",
            Self::OgTitle => "og_title",
            Self::Author => "author",
            Self::Description => "description",
            Self::Sitename => "sitename",
            Self::Lede => "lede",
            Self::Datetime => "datetime",
            Self::Keywords => "keywords",
            Self::Images => "images",
            Self::Videos => "videos",
            Self::Favicon => "favicon",
            Self::Feeds => "feeds",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name does not match any [`Attribute`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown attribute: {0}")]
pub struct UnknownAttribute(pub String);

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|attr| attr.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownAttribute(name.to_string()))
    }
}

/// A computed attribute.
///
/// Serializes as the bare inner value, so a memoized title is a JSON string
/// (or `null`) and keywords are a list of `{term, frequency}` objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Single optional string: titles, author, description, favicon.
    Text(Option<String>),
    /// Publication date.
    Date(Option<DateTime<Utc>>),
    /// Keyword frequencies.
    Keywords(Vec<Keyword>),
    /// Resolved URLs: images and feeds.
    Urls(Vec<String>),
    /// Embedded videos.
    Videos(Vec<Video>),
}

impl AttributeValue {
    /// The empty value of the shape `attr` produces.
    #[must_use]
    pub fn empty(attr: Attribute) -> Self {
        match attr {
            Attribute::Datetime => Self::Date(None),
            Attribute::Keywords => Self::Keywords(Vec::new()),
            Attribute::Images | Attribute::Feeds => Self::Urls(Vec::new()),
            Attribute::Videos => Self::Videos(Vec::new()),
            Attribute::Title
            | Attribute::HtmlTitle
            | Attribute::OgTitle
            | Attribute::Author
            | Attribute::Description
            | Attribute::Sitename
            | Attribute::Lede
            | Attribute::Favicon => Self::Text(None),
        }
    }

    /// Whether the value carries nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_none(),
            Self::Date(date) => date.is_none(),
            Self::Keywords(keywords) => keywords.is_empty(),
            Self::Urls(urls) => urls.is_empty(),
            Self::Videos(videos) => videos.is_empty(),
        }
    }

    /// The text, if this is a present text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => text.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => text,
            _ => None,
        }
    }

    #[must_use]
    pub fn into_date(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(date) => date,
            _ => None,
        }
    }

    #[must_use]
    pub fn into_keywords(self) -> Vec<Keyword> {
        match self {
            Self::Keywords(keywords) => keywords,
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub fn into_urls(self) -> Vec<String> {
        match self {
            Self::Urls(urls) => urls,
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub fn into_videos(self) -> Vec<Video> {
        match self {
            Self::Videos(videos) => videos,
            _ => Vec::new(),
        }
    }
}

/// Attributes computed from the markup alone.
pub trait InternalAttributeProvider {
    /// Best title: og:title, then `<title>` with any site name stripped, then
    /// the first `<h1>`.
    fn title(&self) -> Option<String>;

    /// `<title>` text, trimmed but otherwise untouched.
    fn html_title(&self) -> Option<String>;

    /// `og:title` content, trimmed but otherwise untouched.
    fn og_title(&self) -> Option<String>;

    fn author(&self) -> Option<String>;

    fn description(&self) -> Option<String>;

    fn sitename(&self) -> Option<String>;

    /// First substantial body paragraph.
    fn lede(&self) -> Option<String>;

    /// Publication date.
    fn datetime(&self) -> Option<DateTime<Utc>>;

    /// Keyword frequencies of the visible body text, in first-occurrence order.
    fn keywords(&self) -> Vec<Keyword>;

    /// Remove a leading or trailing site name from `title`.
    fn strip_site_name_and_separators_from(&self, title: &str) -> String {
        title::strip_site_name_and_separators(title)
    }
}

/// Attributes that reference resources outside the markup.
///
/// URLs are resolved against the document's base URL when one is known and
/// returned unchanged otherwise.
pub trait ExternalAttributeProvider {
    /// Image URLs, honouring the image options. Empty unless image collection
    /// is enabled.
    fn images(&self) -> Vec<String>;

    /// Embedded videos in document order.
    fn videos(&self) -> Vec<Video>;

    fn favicon(&self) -> Option<String>;

    /// RSS and Atom feed URLs.
    fn feeds(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_names_round_trip() {
        for attr in Attribute::ALL {
            assert_eq!(attr.name().parse::<Attribute>(), Ok(attr));
            assert_eq!(attr.to_string(), attr.name());
        }
    }

    #[test]
    fn test_attribute_parse_is_lenient_about_case() {
        assert_eq!("  Title ".parse::<Attribute>(), Ok(Attribute::Title));
        assert_eq!("OG_TITLE".parse::<Attribute>(), Ok(Attribute::OgTitle));
    }

    #[test]
    fn test_unknown_attribute() {
        let err = "summary".parse::<Attribute>();
        assert_eq!(err, Err(UnknownAttribute("summary".to_string())));
    }

    #[test]
    fn test_empty_values_match_shape() {
        for attr in Attribute::ALL {
            assert!(AttributeValue::empty(attr).is_empty(), "{attr}");
        }
        assert_eq!(AttributeValue::empty(Attribute::Videos), AttributeValue::Videos(Vec::new()));
    }

    #[test]
    fn test_untagged_serialization() {
        let text = AttributeValue::Text(Some("Hello".to_string()));
        let missing = AttributeValue::Text(None);
        let keywords = AttributeValue::Keywords(vec![Keyword::new("ruby", 2)]);

        assert_eq!(serde_json::to_string(&text).ok().as_deref(), Some(r#""Hello""#));
        assert_eq!(serde_json::to_string(&missing).ok().as_deref(), Some("null"));
        assert_eq!(
            serde_json::to_string(&keywords).ok().as_deref(),
            Some(r#"[{"term":"ruby","frequency":2}]"#)
        );
    }

    #[test]
    fn test_conversions_ignore_other_shapes() {
        assert_eq!(AttributeValue::Urls(vec!["a".into()]).into_text(), None);
        assert!(AttributeValue::Text(Some("x".into())).into_urls().is_empty());
        assert_eq!(AttributeValue::Text(Some("x".into())).as_text(), Some("x"));
    }
}

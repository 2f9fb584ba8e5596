//! Configuration options for document loading and attribute extraction.
//!
//! The `Options` struct is a plain value: all fields are public and every field
//! has a default, so callers can override just what they need.

use serde::Deserialize;

use crate::error::Result;

/// Configuration options for a [`Document`](crate::Document).
///
/// # Example
///
/// ```rust
/// use rs_pismo::Options;
///
/// let options = Options {
///     all_images: true,
///     user_agent: Some("Linux Firefox".to_string()),
///     ..Options::default()
/// };
/// assert_eq!(options.min_image_width, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// User-Agent string, or the name of a known alias.
    ///
    /// Unknown names are sent literally.
    ///
    /// Default: `None` (the "Mac Safari" desktop string)
    pub user_agent: Option<String>,

    /// Name of a known user-agent alias.
    ///
    /// Only consulted when `user_agent` is unset. Unknown names fall back to
    /// the default user agent.
    ///
    /// Default: `None`
    pub user_agent_alias: Option<String>,

    /// Collect images that pass the size filter.
    ///
    /// Default: `false`
    pub image_extractor: bool,

    /// Collect every `<img>` without applying the size filter.
    ///
    /// Implies image collection even when `image_extractor` is false.
    ///
    /// Default: `false`
    pub all_images: bool,

    /// Minimum declared width (px) for an image to pass the size filter.
    ///
    /// Default: `100`
    pub min_image_width: u32,

    /// Minimum declared height (px) for an image to pass the size filter.
    ///
    /// Default: `100`
    pub min_image_height: u32,

    /// Explicit base URL used to resolve relative media references.
    ///
    /// Takes precedence over the handle URL when both are known.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Shortest term (in characters) kept by the keyword analyzer.
    ///
    /// Default: `3`
    pub min_keyword_length: usize,

    /// Longest term (in characters) kept by the keyword analyzer.
    ///
    /// Default: `None` (no upper bound)
    pub max_keyword_length: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            user_agent: None,
            user_agent_alias: None,
            image_extractor: false,
            all_images: false,
            min_image_width: 100,
            min_image_height: 100,
            url: None,
            min_keyword_length: 3,
            max_keyword_length: None,
        }
    }
}

impl Options {
    /// Parse options from a JSON object. Absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether the image extractor should run at all.
    #[must_use]
    pub fn collects_images(&self) -> bool {
        self.image_extractor || self.all_images
    }

    /// The User-Agent header value these options resolve to.
    #[must_use]
    pub fn resolved_user_agent(&self) -> String {
        crate::user_agent::resolve(self.user_agent.as_deref(), self.user_agent_alias.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert!(opts.user_agent.is_none());
        assert!(opts.user_agent_alias.is_none());
        assert!(!opts.image_extractor);
        assert!(!opts.all_images);
        assert_eq!(opts.min_image_width, 100);
        assert_eq!(opts.min_image_height, 100);
        assert!(opts.url.is_none());
        assert_eq!(opts.min_keyword_length, 3);
        assert!(opts.max_keyword_length.is_none());
        assert!(!opts.collects_images());
    }

    #[test]
    fn test_all_images_enables_collection() {
        let opts = Options {
            all_images: true,
            ..Options::default()
        };
        assert!(opts.collects_images());

        let opts = Options {
            image_extractor: true,
            ..Options::default()
        };
        assert!(opts.collects_images());
    }

    #[test]
    fn test_from_json_partial() {
        let opts = Options::from_json(r#"{"all_images": true, "min_image_width": 50}"#)
            .unwrap_or_else(|e| panic!("valid options rejected: {e}"));

        assert!(opts.all_images);
        assert_eq!(opts.min_image_width, 50);
        assert_eq!(opts.min_image_height, 100);
        assert!(opts.user_agent.is_none());
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        let opts = Options::from_json("{}").unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn test_from_json_malformed() {
        let result = Options::from_json(r#"{"all_images": "yes"}"#);
        assert!(matches!(result, Err(Error::Options(_))));
    }

    #[test]
    fn test_resolved_user_agent_prefers_user_agent() {
        let opts = Options {
            user_agent: Some("Browser Bob".to_string()),
            user_agent_alias: Some("iPhone".to_string()),
            ..Options::default()
        };
        assert_eq!(opts.resolved_user_agent(), "Browser Bob");
    }
}

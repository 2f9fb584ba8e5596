//! Media extraction: images, embedded videos, favicon and feed links.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::dom::{self, Document, Selection};
use crate::patterns::{PIXEL_DIMENSION, STYLE_DIMENSION, VIDEO_HOST};
use crate::url_utils::resolve_reference;
use crate::Options;

/// Image collection settings, taken from [`Options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageFilter {
    /// Skip the size filter.
    pub all_images: bool,
    /// Minimum declared width in pixels.
    pub min_width: u32,
    /// Minimum declared height in pixels.
    pub min_height: u32,
}

impl Default for ImageFilter {
    fn default() -> Self {
        Self::from(&Options::default())
    }
}

impl From<&Options> for ImageFilter {
    fn from(options: &Options) -> Self {
        Self {
            all_images: options.all_images,
            min_width: options.min_image_width,
            min_height: options.min_image_height,
        }
    }
}

/// An embedded video: every attribute of the embedding element.
///
/// `src` is always present. For `<object>` and `<video>` elements without a
/// `src` attribute it is filled from the detected source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Video {
    attributes: BTreeMap<String, String>,
}

impl Video {
    /// The video source URL, verbatim from the markup.
    #[must_use]
    pub fn src(&self) -> &str {
        self.get("src").unwrap_or_default()
    }

    /// Any attribute of the embedding element.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// All attributes.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    fn from_element(elem: &Selection, src: &str) -> Self {
        let mut attributes: BTreeMap<String, String> = dom::get_all_attributes(elem).into_iter().collect();
        attributes
            .entry("src".to_string())
            .or_insert_with(|| src.to_string());
        Self { attributes }
    }
}

impl std::ops::Index<&str> for Video {
    type Output = str;

    fn index(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }
}

// ============================================================
// IMAGES
// ============================================================

/// Image URLs in document order, resolved against `base`.
///
/// With `all_images` every `<img>` with a source is returned. Otherwise only
/// images whose declared width and height both meet the minimums are kept;
/// images without declared dimensions are skipped.
#[must_use]
pub fn images(doc: &Document, filter: ImageFilter, base: Option<&Url>) -> Vec<String> {
    let images: Vec<String> = dom::select_all(doc, "img")
        .iter()
        .filter(|img| filter.all_images || meets_minimum(img, filter))
        .filter_map(image_source)
        .map(|src| resolve_reference(&src, base))
        .collect();

    debug!(count = images.len(), all_images = filter.all_images, "collected images");
    images
}

fn image_source(img: &Selection) -> Option<String> {
    dom::non_empty_attribute(img, "src").or_else(|| dom::non_empty_attribute(img, "data-src"))
}

fn meets_minimum(img: &Selection, filter: ImageFilter) -> bool {
    match declared_size(img) {
        (Some(width), Some(height)) => width >= filter.min_width && height >= filter.min_height,
        _ => false,
    }
}

/// Declared `(width, height)` from attributes, falling back to inline style.
#[must_use]
pub fn declared_size(img: &Selection) -> (Option<u32>, Option<u32>) {
    let mut width = dom::get_attribute(img, "width").and_then(|w| parse_pixels(&w));
    let mut height = dom::get_attribute(img, "height").and_then(|h| parse_pixels(&h));

    if let Some(style) = dom::get_attribute(img, "style") {
        for caps in STYLE_DIMENSION.captures_iter(&style) {
            let value = caps.get(2).and_then(|m| m.as_str().parse().ok());
            match caps.get(1).map(|m| m.as_str().to_ascii_lowercase()).as_deref() {
                Some("width") if width.is_none() => width = value,
                Some("height") if height.is_none() => height = value,
                _ => {}
            }
        }
    }

    (width, height)
}

fn parse_pixels(value: &str) -> Option<u32> {
    PIXEL_DIMENSION
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

// ============================================================
// VIDEOS
// ============================================================

/// Embedded videos in document order. Duplicates are kept.
#[must_use]
pub fn videos(doc: &Document) -> Vec<Video> {
    let videos: Vec<Video> = dom::select_all(doc, "embed, object, iframe, video")
        .iter()
        .filter_map(video_from_element)
        .collect();

    debug!(count = videos.len(), "collected videos");
    videos
}

fn video_from_element(elem: &Selection) -> Option<Video> {
    let tag = dom::tag_name(elem)?;

    let src = match tag.as_str() {
        "embed" | "iframe" => dom::non_empty_attribute(elem, "src").filter(|src| is_video_host(src))?,
        "object" => {
            // The nested embed or object is reported instead of its wrapper.
            if wraps_video(elem) {
                return None;
            }
            object_source(elem).filter(|src| is_video_host(src))?
        }
        "video" => dom::non_empty_attribute(elem, "src").or_else(|| {
            dom::select_within(elem, "source")
                .iter()
                .find_map(|source| dom::non_empty_attribute(source, "src"))
        })?,
        _ => return None,
    };

    Some(Video::from_element(elem, &src))
}

fn wraps_video(object: &Selection) -> bool {
    dom::select_within(object, "embed, object").iter().any(|inner| {
        let src = match dom::tag_name(inner).as_deref() {
            Some("embed") => dom::non_empty_attribute(inner, "src"),
            _ => object_source(inner),
        };
        src.is_some_and(|src| is_video_host(&src))
    })
}

fn object_source(object: &Selection) -> Option<String> {
    dom::non_empty_attribute(object, "data").or_else(|| {
        dom::select_within(object, "param").iter().find_map(|param| {
            let name = dom::get_attribute(param, "name")?;
            if name.eq_ignore_ascii_case("movie") || name.eq_ignore_ascii_case("src") {
                dom::non_empty_attribute(param, "value")
            } else {
                None
            }
        })
    })
}

/// Whether a source URL belongs to a known video host.
#[must_use]
pub fn is_video_host(src: &str) -> bool {
    VIDEO_HOST.is_match(src)
}

// ============================================================
// LINKS
// ============================================================

/// Favicon URL from `<link rel="icon">` or `<link rel="shortcut icon">`.
#[must_use]
pub fn favicon(doc: &Document, base: Option<&Url>) -> Option<String> {
    dom::select_first(doc, "link[rel~='icon'], link[rel~='ICON'], link[rel='apple-touch-icon']")
        .and_then(|link| dom::non_empty_attribute(&link, "href"))
        .map(|href| resolve_reference(&href, base))
}

/// RSS and Atom feed URLs advertised by the page, duplicates removed.
#[must_use]
pub fn feeds(doc: &Document, base: Option<&Url>) -> Vec<String> {
    let mut feeds: Vec<String> = Vec::new();

    for link in dom::select_all(doc, "link[rel~='alternate']") {
        let is_feed = dom::get_attribute(&link, "type").is_some_and(|t| {
            let t = t.trim().to_ascii_lowercase();
            t == "application/rss+xml" || t == "application/atom+xml"
        });
        if !is_feed {
            continue;
        }

        if let Some(href) = dom::non_empty_attribute(&link, "href") {
            let url = resolve_reference(&href, base);
            if !feeds.contains(&url) {
                feeds.push(url);
            }
        }
    }

    feeds
}

//! The attribute facade.
//!
//! A [`Document`] owns one parsed tree and computes attributes on demand.
//! Every computed value is memoized until the next [`Document::load`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};
use url::Url;

use crate::attributes::{
    keywords, media, meta, title, Attribute, AttributeValue, ExternalAttributeProvider, ImageFilter,
    InternalAttributeProvider, Keyword, Video,
};
use crate::dom;
use crate::error::Result;
use crate::loader::{self, Fetcher, Handle, Offline};
use crate::options::Options;
use crate::result::AttributeSet;
use crate::url_utils;

/// Computes one attribute of a document.
type Resolver = fn(&Document) -> AttributeValue;

const RESOLVERS: &[(Attribute, Resolver)] = &[
    (Attribute::Title, resolve_title),
    (Attribute::HtmlTitle, resolve_html_title),
    (Attribute::OgTitle, resolve_og_title),
    (Attribute::Author, resolve_author),
    (Attribute::Description, resolve_description),
    (Attribute::Sitename, resolve_sitename),
    (Attribute::Lede, resolve_lede),
    (Attribute::Datetime, resolve_datetime),
    (Attribute::Keywords, resolve_keywords),
    (Attribute::Images, resolve_images),
    (Attribute::Videos, resolve_videos),
    (Attribute::Favicon, resolve_favicon),
    (Attribute::Feeds, resolve_feeds),
];

fn resolve_title(doc: &Document) -> AttributeValue {
    let heading = title::first_heading(&doc.dom);
    AttributeValue::Text(title::resolve_title(
        doc.og_title().as_deref(),
        doc.html_title().as_deref(),
        heading.as_deref(),
    ))
}

fn resolve_html_title(doc: &Document) -> AttributeValue {
    AttributeValue::Text(title::html_title(&doc.dom))
}

fn resolve_og_title(doc: &Document) -> AttributeValue {
    AttributeValue::Text(title::og_title(&doc.dom))
}

fn resolve_author(doc: &Document) -> AttributeValue {
    AttributeValue::Text(meta::author(&doc.dom))
}

fn resolve_description(doc: &Document) -> AttributeValue {
    AttributeValue::Text(meta::description(&doc.dom))
}

fn resolve_sitename(doc: &Document) -> AttributeValue {
    AttributeValue::Text(meta::sitename(&doc.dom))
}

fn resolve_lede(doc: &Document) -> AttributeValue {
    AttributeValue::Text(meta::lede(&doc.dom))
}

fn resolve_datetime(doc: &Document) -> AttributeValue {
    AttributeValue::Date(meta::datetime(&doc.dom))
}

fn resolve_keywords(doc: &Document) -> AttributeValue {
    AttributeValue::Keywords(keywords::document_keywords(
        &doc.dom,
        doc.options.min_keyword_length,
        doc.options.max_keyword_length,
    ))
}

fn resolve_images(doc: &Document) -> AttributeValue {
    if !doc.options.collects_images() {
        return AttributeValue::Urls(Vec::new());
    }
    let base = doc.base_url();
    AttributeValue::Urls(media::images(&doc.dom, ImageFilter::from(&doc.options), base.as_ref()))
}

fn resolve_videos(doc: &Document) -> AttributeValue {
    AttributeValue::Videos(media::videos(&doc.dom))
}

fn resolve_favicon(doc: &Document) -> AttributeValue {
    let base = doc.base_url();
    AttributeValue::Text(media::favicon(&doc.dom, base.as_ref()))
}

fn resolve_feeds(doc: &Document) -> AttributeValue {
    let base = doc.base_url();
    AttributeValue::Urls(media::feeds(&doc.dom, base.as_ref()))
}

/// A loaded HTML document with lazily computed attributes.
///
/// # Example
///
/// ```rust
/// use rs_pismo::{Document, InternalAttributeProvider, Options};
///
/// let doc = Document::from_html(
///     "<html><head><title>RubyInside | CoffeeScript Released</title></head></html>",
///     Options::default(),
/// );
/// assert_eq!(doc.title().as_deref(), Some("CoffeeScript Released"));
/// assert_eq!(doc.html_title().as_deref(), Some("RubyInside | CoffeeScript Released"));
/// ```
pub struct Document {
    dom: dom::Document,
    url: Option<String>,
    options: Options,
    fetcher: Box<dyn Fetcher>,
    cache: RefCell<HashMap<Attribute, AttributeValue>>,
}

impl Document {
    /// Load a document, fetching URL handles over HTTP.
    #[cfg(feature = "http")]
    pub fn new(handle: impl Into<Handle>, options: Options) -> Result<Self> {
        Self::with_fetcher(handle, options, loader::HttpFetcher::new()?)
    }

    /// Load a document, fetching URL handles through `fetcher`.
    pub fn with_fetcher(handle: impl Into<Handle>, options: Options, fetcher: impl Fetcher + 'static) -> Result<Self> {
        let fetcher: Box<dyn Fetcher> = Box::new(fetcher);
        let user_agent = options.resolved_user_agent();
        let loaded = loader::load(handle.into(), options.url.as_deref(), &user_agent, fetcher.as_ref())?;

        Ok(Self {
            dom: dom::parse(&loaded.markup),
            url: loaded.url,
            options,
            fetcher,
            cache: RefCell::default(),
        })
    }

    /// Build a document from markup already in memory.
    ///
    /// The markup is never classified as a URL. Later calls to [`load`](Self::load)
    /// with a URL handle fail, since this document has no network access.
    #[must_use]
    pub fn from_html(html: &str, options: Options) -> Self {
        let url = options
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string);

        Self {
            dom: dom::parse(html),
            url,
            options,
            fetcher: Box::new(Offline),
            cache: RefCell::default(),
        }
    }

    /// Replace the markup and base URL, discarding memoized attributes.
    ///
    /// `url` overrides the base URL; when absent, [`Options::url`] applies.
    /// On failure the document is left as it was.
    pub fn load(&mut self, handle: impl Into<Handle>, url: Option<&str>) -> Result<()> {
        let user_agent = self.user_agent();
        let explicit_url = url.or(self.options.url.as_deref());
        let loaded = loader::load(handle.into(), explicit_url, &user_agent, self.fetcher.as_ref())?;

        self.dom = dom::parse(&loaded.markup);
        self.url = loaded.url;
        self.cache.get_mut().clear();
        debug!(url = self.url.as_deref().unwrap_or("<none>"), "document reloaded");
        Ok(())
    }

    /// The current tree serialized back to HTML.
    #[must_use]
    pub fn html(&self) -> String {
        dom::serialize(&self.dom)
    }

    /// The parsed tree.
    #[must_use]
    pub fn dom(&self) -> &dom::Document {
        &self.dom
    }

    /// The base URL string, if one is known.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The base URL, if one is known and parses as an absolute URL.
    #[must_use]
    pub fn base_url(&self) -> Option<Url> {
        self.url.as_deref().and_then(url_utils::parse_base)
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The User-Agent header sent when fetching URL handles.
    #[must_use]
    pub fn user_agent(&self) -> String {
        self.options.resolved_user_agent()
    }

    /// Look an attribute up by name. `None` for unknown names.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<AttributeValue> {
        name.parse::<Attribute>().ok().map(|attr| self.get(attr))
    }

    /// Compute (or recall) one attribute.
    #[must_use]
    pub fn get(&self, attr: Attribute) -> AttributeValue {
        let hit = self.cache.borrow().get(&attr).cloned();
        if let Some(value) = hit {
            return value;
        }

        trace!(attribute = attr.name(), "computing attribute");
        let value = RESOLVERS
            .iter()
            .find(|(name, _)| *name == attr)
            .map_or_else(|| AttributeValue::empty(attr), |(_, resolve)| resolve(self));

        self.cache.borrow_mut().insert(attr, value.clone());
        value
    }

    /// Text of the first element matching any of `selectors`, tried in order.
    ///
    /// Elements with no text are skipped.
    #[must_use]
    pub fn match_first(&self, selectors: &[&str]) -> Option<String> {
        selectors.iter().find_map(|selector| {
            dom::select_all(&self.dom, selector)
                .iter()
                .map(dom::collapsed_text)
                .find(|text| !text.is_empty())
        })
    }

    /// Text of every element matching `selectors`, selector by selector.
    #[must_use]
    pub fn match_all(&self, selectors: &[&str]) -> Vec<String> {
        selectors
            .iter()
            .flat_map(|selector| {
                dom::select_all(&self.dom, selector)
                    .iter()
                    .map(dom::collapsed_text)
                    .filter(|text| !text.is_empty())
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Snapshot of every attribute.
    #[must_use]
    pub fn attributes(&self) -> AttributeSet {
        AttributeSet {
            url: self.url.clone(),
            title: self.title(),
            html_title: self.html_title(),
            og_title: self.og_title(),
            author: self.author(),
            description: self.description(),
            sitename: self.sitename(),
            lede: self.lede(),
            datetime: self.datetime(),
            keywords: self.keywords(),
            images: self.images(),
            videos: self.videos(),
            favicon: self.favicon(),
            feeds: self.feeds(),
        }
    }
}

impl InternalAttributeProvider for Document {
    fn title(&self) -> Option<String> {
        self.get(Attribute::Title).into_text()
    }

    fn html_title(&self) -> Option<String> {
        self.get(Attribute::HtmlTitle).into_text()
    }

    fn og_title(&self) -> Option<String> {
        self.get(Attribute::OgTitle).into_text()
    }

    fn author(&self) -> Option<String> {
        self.get(Attribute::Author).into_text()
    }

    fn description(&self) -> Option<String> {
        self.get(Attribute::Description).into_text()
    }

    fn sitename(&self) -> Option<String> {
        self.get(Attribute::Sitename).into_text()
    }

    fn lede(&self) -> Option<String> {
        self.get(Attribute::Lede).into_text()
    }

    fn datetime(&self) -> Option<DateTime<Utc>> {
        self.get(Attribute::Datetime).into_date()
    }

    fn keywords(&self) -> Vec<Keyword> {
        self.get(Attribute::Keywords).into_keywords()
    }
}

impl ExternalAttributeProvider for Document {
    fn images(&self) -> Vec<String> {
        self.get(Attribute::Images).into_urls()
    }

    fn videos(&self) -> Vec<Video> {
        self.get(Attribute::Videos).into_videos()
    }

    fn favicon(&self) -> Option<String> {
        self.get(Attribute::Favicon).into_text()
    }

    fn feeds(&self) -> Vec<String> {
        self.get(Attribute::Feeds).into_urls()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("url", &self.url)
            .field("options", &self.options)
            .field("cached", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}

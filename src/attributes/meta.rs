//! Page metadata: author, description, site name, lede and publication date.
//!
//! Meta tags are consulted first; DOM heuristics fill the gaps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::dom::{self, Document, Selection};
use crate::patterns::BYLINE_PREFIX;

/// Shortest paragraph accepted as a lede.
const MIN_LEDE_CHARS: usize = 40;

/// Longest text accepted as an author name.
const MAX_AUTHOR_CHARS: usize = 100;

const AUTHOR_META: &[&str] = &["author", "article:author", "dc.creator", "parsely-author", "sailthru.author"];

const AUTHOR_SELECTORS: &[&str] = &[
    "[rel='author']",
    "[itemprop='author'] [itemprop='name']",
    "[itemprop='author']",
    ".author .fn",
    ".author",
    ".byline",
];

const DESCRIPTION_META: &[&str] = &["description", "og:description", "twitter:description", "dc.description"];

const SITENAME_META: &[&str] = &["og:site_name", "application-name", "twitter:site"];

const DATE_META: &[&str] = &[
    "article:published_time",
    "og:article:published_time",
    "datepublished",
    "dc.date.issued",
    "dc.date",
    "dcterms.created",
    "date",
    "pubdate",
    "publish_date",
    "sailthru.date",
    "parsely-pub-date",
    "article:modified_time",
];

/// Content of the first meta tag whose name, property or itemprop is one of
/// `names` (case-insensitive), honouring the order of `names`.
fn meta_content(doc: &Document, names: &[&str]) -> Option<String> {
    let metas: Vec<(String, String)> = dom::select_all(doc, "meta")
        .iter()
        .filter_map(|meta| {
            let name = dom::get_attribute(meta, "property")
                .or_else(|| dom::get_attribute(meta, "name"))
                .or_else(|| dom::get_attribute(meta, "itemprop"))?
                .trim()
                .to_lowercase();
            let content = dom::non_empty_attribute(meta, "content")?;
            Some((name, content))
        })
        .collect();

    names.iter().find_map(|wanted| {
        metas
            .iter()
            .find(|(name, _)| name == wanted)
            .map(|(_, content)| content.clone())
    })
}

/// The article's author.
#[must_use]
pub fn author(doc: &Document) -> Option<String> {
    if let Some(author) = meta_content(doc, AUTHOR_META).and_then(|a| clean_author(&a)) {
        return Some(author);
    }

    AUTHOR_SELECTORS.iter().find_map(|selector| {
        dom::select_first(doc, selector).and_then(|elem| clean_author(&author_text(&elem)))
    })
}

fn author_text(elem: &Selection) -> String {
    dom::non_empty_attribute(elem, "content").unwrap_or_else(|| dom::collapsed_text(elem))
}

fn clean_author(raw: &str) -> Option<String> {
    let name = BYLINE_PREFIX.replace(raw.trim(), "").trim().to_string();

    if name.is_empty() || name.chars().count() > MAX_AUTHOR_CHARS {
        return None;
    }
    if name.starts_with("http://") || name.starts_with("https://") {
        return None;
    }
    Some(name)
}

/// Meta description.
#[must_use]
pub fn description(doc: &Document) -> Option<String> {
    meta_content(doc, DESCRIPTION_META)
}

/// Site name from Open Graph or application meta tags.
#[must_use]
pub fn sitename(doc: &Document) -> Option<String> {
    meta_content(doc, SITENAME_META)
}

/// First substantial paragraph of the body.
#[must_use]
pub fn lede(doc: &Document) -> Option<String> {
    dom::select_all(doc, "body p")
        .iter()
        .map(dom::collapsed_text)
        .find(|text| text.chars().count() >= MIN_LEDE_CHARS)
}

/// Publication date from meta tags or `<time datetime>`.
#[must_use]
pub fn datetime(doc: &Document) -> Option<DateTime<Utc>> {
    if let Some(date) = meta_content(doc, DATE_META).and_then(|d| parse_date(&d)) {
        return Some(date);
    }

    dom::select_all(doc, "time[datetime], [itemprop='datePublished']")
        .iter()
        .find_map(|elem| {
            dom::get_attribute(elem, "datetime")
                .or_else(|| dom::get_attribute(elem, "content"))
                .and_then(|d| parse_date(&d))
        })
}

/// Parse a date string.
///
/// Supports RFC 3339, RFC 2822, ISO 8601 without zone and common date-only
/// forms. Dates without a time are taken as midnight UTC.
#[must_use]
pub fn parse_date(date_str: &str) -> Option<DateTime<Utc>> {
    let date_str = date_str.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, fmt) {
            return Some(dt.and_utc());
        }
    }

    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%B %d, %Y", // January 15, 2024
        "%b %d, %Y", // Jan 15, 2024
        "%d %B %Y",  // 15 January 2024
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_str, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

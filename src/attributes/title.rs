//! Title resolution.
//!
//! Three signals compete for the title: the Open Graph `og:title`, the
//! `<title>` element and the first `<h1>`. The first one present wins. Only
//! the `<title>` candidate is cleaned of a leading or trailing site name;
//! og:title and headings name the article alone.

use regex::Match;

use crate::dom::{self, Document};
use crate::patterns::TITLE_SEPARATOR;

/// Content of the `og:title` meta tag.
///
/// Surrounding whitespace is trimmed; nothing else is changed.
#[must_use]
pub fn og_title(doc: &Document) -> Option<String> {
    dom::select_first(doc, "meta[property='og:title'], meta[name='og:title']")
        .and_then(|meta| dom::non_empty_attribute(&meta, "content"))
}

/// Text of the `<title>` element.
///
/// Surrounding whitespace is trimmed so a blank element reads as absent.
/// Inner whitespace and any site name are kept.
#[must_use]
pub fn html_title(doc: &Document) -> Option<String> {
    dom::select_first(doc, "title")
        .map(|title| dom::text_content(&title).trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Text of the first `<h1>`, whitespace collapsed.
#[must_use]
pub fn first_heading(doc: &Document) -> Option<String> {
    dom::select_first(doc, "h1")
        .map(|h1| dom::collapsed_text(&h1))
        .filter(|heading| !heading.is_empty())
}

/// The best title: og:title, then `<title>`, then the first `<h1>`.
///
/// Candidates are whitespace-collapsed. The `<title>` candidate alone goes
/// through [`strip_site_name_and_separators`].
#[must_use]
pub fn resolve_title(og_title: Option<&str>, html_title: Option<&str>, heading: Option<&str>) -> Option<String> {
    let collapsed = |candidate: Option<&str>| candidate.map(dom::collapse_whitespace).filter(|c| !c.is_empty());

    collapsed(og_title)
        .or_else(|| collapsed(html_title).map(|title| strip_site_name_and_separators(&title)))
        .or_else(|| collapsed(heading))
}

/// Remove a site name joined to a title by a separator.
///
/// Separators are en dash, em dash, hyphen, colon, `›`, `»`, `|`, `::` and
/// period, each with whitespace on both sides. When any `|`, `»`, `›` or
/// `::` is present only those count, so dashes and colons inside the article
/// title are left alone. The segment before the first counted separator and
/// the segment after the last one are compared; the shorter is taken to be
/// the site name and dropped (ties drop the leading segment). Text without a
/// separator is returned trimmed.
///
/// A site name longer than the article title is kept instead of it.
///
/// ```
/// use rs_pismo::attributes::title::strip_site_name_and_separators;
///
/// assert_eq!(strip_site_name_and_separators("RubyInside » Ruby 1.9.2 Released"), "Ruby 1.9.2 Released");
/// assert_eq!(strip_site_name_and_separators("Ruby 1.9.2 Released | RubyInside"), "Ruby 1.9.2 Released");
/// ```
#[must_use]
pub fn strip_site_name_and_separators(title: &str) -> String {
    let title = title.trim();

    let separators: Vec<Match> = TITLE_SEPARATOR.find_iter(title).collect();
    let strong: Vec<Match> = separators
        .iter()
        .copied()
        .filter(|sep| is_strong_separator(sep.as_str()))
        .collect();
    let counted = if strong.is_empty() { &separators } else { &strong };

    let (Some(first), Some(last)) = (counted.first(), counted.last()) else {
        return title.to_string();
    };

    let head = &title[..first.start()];
    let tail = &title[last.end()..];

    let kept = if head.chars().count() <= tail.chars().count() {
        &title[first.end()..]
    } else {
        &title[..last.start()]
    };

    let kept = kept.trim();
    if kept.is_empty() {
        title.to_string()
    } else {
        kept.to_string()
    }
}

fn is_strong_separator(separator: &str) -> bool {
    matches!(separator.trim(), "|" | "»" | "›" | "::")
}

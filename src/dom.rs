//! DOM accessor.
//!
//! The attribute engine talks to the parsed document only through this
//! module: parse, select-first, select-all, attribute reads, text and
//! serialization. Everything is a thin layer over `dom_query`.

pub use dom_query::{Document, Selection};
pub use tendril::StrTendril;

/// Elements whose text never renders.
const INVISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "template"];

// === Parsing and serialization ===

/// Parse markup into a document.
///
/// Parsing never fails: malformed markup is repaired and the standard
/// `html`/`head`/`body` wrapper is generated when missing.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Serialize the whole document back to markup.
#[inline]
#[must_use]
pub fn serialize(doc: &Document) -> String {
    doc.html().to_string()
}

// === Querying ===

/// First element matching `selector`, if any.
#[must_use]
pub fn select_first<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.select(selector).nodes().first().map(|node| Selection::from(*node))
}

/// All elements matching `selector`, in document order.
#[must_use]
pub fn select_all<'a>(doc: &'a Document, selector: &str) -> Vec<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Elements matching `selector` below `sel`, in document order.
#[must_use]
pub fn select_within<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    sel.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Attributes ===

/// Get an attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value, trimmed, treating blank values as absent.
#[must_use]
pub fn non_empty_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Get all attributes as key-value pairs, in source order.
///
/// Empty if the selection is empty.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Lowercase tag name of the first node in the selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

// === Text ===

/// All text of the node and its descendants, as stored.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text with runs of whitespace collapsed to single spaces and trimmed.
#[must_use]
pub fn collapsed_text(sel: &Selection) -> String {
    collapse_whitespace(&sel.text())
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text a reader would see below `sel`.
///
/// Skips script, style, noscript and template content, and separates text
/// nodes with a space so adjacent blocks do not run together.
#[must_use]
pub fn visible_text(sel: &Selection) -> String {
    let Some(root) = sel.nodes().first() else {
        return String::new();
    };

    let mut out = String::new();
    for node in root.descendants() {
        if !node.is_text() {
            continue;
        }

        let hidden = node
            .parent()
            .and_then(|parent| parent.node_name())
            .is_some_and(|tag| INVISIBLE_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t)));
        if hidden {
            continue;
        }

        let text = node.text();
        if text.trim().is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(text.trim());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generates_wrapper() {
        let doc = parse("<h1>Hello</h1>");
        assert!(select_first(&doc, "html").is_some());
        assert!(select_first(&doc, "head").is_some());
        assert!(select_first(&doc, "body h1").is_some());
    }

    #[test]
    fn test_parse_tolerates_malformed_markup() {
        let doc = parse("<div><p>unclosed <b>bold</div>");
        let div = select_first(&doc, "div");
        assert!(div.is_some_and(|d| collapsed_text(&d) == "unclosed bold"));
    }

    #[test]
    fn test_select_first_and_all() {
        let doc = parse(r#"<ul><li>1</li><li>2</li><li>3</li></ul>"#);

        let first = select_first(&doc, "li");
        assert_eq!(first.map(|li| text_content(&li).to_string()), Some("1".to_string()));

        let texts: Vec<String> = select_all(&doc, "li")
            .iter()
            .map(|li| text_content(li).to_string())
            .collect();
        assert_eq!(texts, vec!["1", "2", "3"]);

        assert!(select_first(&doc, "table").is_none());
        assert!(select_all(&doc, "table").is_empty());
    }

    #[test]
    fn test_select_within() {
        let doc = parse(r#"<object><param name="movie" value="a"><embed src="b"></object><embed src="c">"#);
        let object = select_first(&doc, "object").unwrap_or_else(|| panic!("object missing"));
        assert_eq!(select_within(&object, "embed").len(), 1);
    }

    #[test]
    fn test_attributes() {
        let doc = parse(r##"<a href="http://example.com" class="link" title=" ">Link</a>"##);
        let a = doc.select("a");

        assert_eq!(get_attribute(&a, "href"), Some("http://example.com".to_string()));
        assert_eq!(get_attribute(&a, "title"), Some(" ".to_string()));
        assert_eq!(non_empty_attribute(&a, "title"), None);
        assert_eq!(get_attribute(&a, "id"), None);

        let attrs = get_all_attributes(&a);
        assert_eq!(attrs.len(), 3);
        assert!(attrs.iter().any(|(k, v)| k == "class" && v == "link"));
    }

    #[test]
    fn test_get_all_attributes_empty_selection() {
        let doc = parse("<div>No span</div>");
        assert!(get_all_attributes(&doc.select("span")).is_empty());
    }

    #[test]
    fn test_tag_name() {
        let doc = parse(r#"<article><section>content</section></article>"#);
        assert_eq!(tag_name(&doc.select("section")), Some("section".to_string()));
        assert_eq!(tag_name(&doc.select("aside")), None);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_visible_text_skips_scripts_and_styles() {
        let doc = parse(
            r#"<body>
                <p>Visible</p>
                <script>var hidden = 1;</script>
                <style>.hidden { color: red }</style>
                <noscript>Enable JavaScript</noscript>
                <p>Text</p>
            </body>"#,
        );
        let body = doc.select("body");
        assert_eq!(visible_text(&body), "Visible Text");
    }

    #[test]
    fn test_visible_text_separates_blocks() {
        let doc = parse("<body><p>foo</p><p>bar</p></body>");
        assert_eq!(visible_text(&doc.select("body")), "foo bar");
    }

    #[test]
    fn test_serialize_round_trips_content() {
        let doc = parse("<html><body><h1>Hello</h1></body></html>");
        let html = serialize(&doc);
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<body>"));
    }
}

//! URL Utility Functions
//!
//! Handle classification and relative-reference resolution for media and
//! link attributes.

use url::Url;

/// Check if a string is an absolute http(s) URL with a host.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    let lower = s.get(..8).map(str::to_ascii_lowercase).unwrap_or_default();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Parse a base URL. Only absolute http(s) URLs qualify.
#[must_use]
pub fn parse_base(url_str: &str) -> Option<Url> {
    is_absolute_url(url_str).1
}

/// Convert a relative or absolute reference to absolute form.
///
/// # Arguments
/// * `reference` - The reference to resolve (can be relative or absolute)
/// * `base` - The base URL for resolution
///
/// # Returns
/// * The absolute URL string, or the trimmed reference if resolution fails
#[must_use]
pub fn create_absolute_url(reference: &str, base: &Url) -> String {
    let reference = reference.trim();

    if reference.is_empty() {
        return String::new();
    }

    // Preserve special URLs unchanged
    if is_special_scheme(reference) {
        return reference.to_string();
    }

    if is_absolute_url(reference).0 {
        return reference.to_string();
    }

    match base.join(reference) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => reference.to_string(),
    }
}

/// Resolve a reference against an optional base.
///
/// Without a base the reference is returned unchanged (trimmed), so relative
/// media paths survive documents loaded from a string or stream.
#[must_use]
pub fn resolve_reference(reference: &str, base: Option<&Url>) -> String {
    match base {
        Some(base) => create_absolute_url(reference, base),
        None => reference.trim().to_string(),
    }
}

fn is_special_scheme(reference: &str) -> bool {
    ["data:", "javascript:", "mailto:", "tel:"]
        .iter()
        .any(|scheme| {
            reference
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        })
}

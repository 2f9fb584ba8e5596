//! Character decoding for fetched and streamed markup.
//!
//! Bytes from a URL or a stream arrive in whatever charset the page declares.
//! The charset is taken from a byte order mark first, then from a `<meta>`
//! declaration near the top of the document, and defaults to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes scanned for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">`
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">`
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Detect the encoding of markup bytes.
///
/// Returns the encoding and the length of any byte order mark to skip.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> (&'static Encoding, usize) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return (encoding, bom_len);
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LEN)]);

    let declared = CONTENT_TYPE_CHARSET_RE
        .captures(&head)
        .or_else(|| CHARSET_META_RE.captures(&head))
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()));

    // A UTF-16 label inside an ASCII-compatible document is a lie; the bytes
    // could not have been read this far otherwise.
    match declared {
        Some(encoding) if encoding.is_ascii_compatible() => (encoding, 0),
        _ => (UTF_8, 0),
    }
}

/// Decode markup bytes to a UTF-8 string.
///
/// Malformed sequences become U+FFFD rather than errors.
///
/// ```
/// use rs_pismo::encoding::decode_markup;
///
/// let html = b"<meta charset=\"iso-8859-1\"><p>Caf\xE9</p>";
/// assert!(decode_markup(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_markup(bytes: &[u8]) -> String {
    let (encoding, bom_len) = detect_encoding(bytes);
    let body = &bytes[bom_len..];

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _had_errors) = encoding.decode_without_bom_handling(body);
    decoded.into_owned()
}

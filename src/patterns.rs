//! Compiled regex patterns shared by the loader and attribute extractors.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Handle Classification
// =============================================================================

/// Matches a string handle that names a URL rather than literal markup.
pub static URL_HANDLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\Ahttps?://").expect("URL_HANDLE regex")
});

// =============================================================================
// Title Patterns
// =============================================================================

/// Matches a separator between a site name and an article title.
///
/// The separator must have whitespace on both sides, so `Foo: Bar` and
/// `Mr. Smith` are not split. `::` is listed before the single-character
/// class so it is consumed whole.
pub static TITLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+(?:::|[–—\-:›»|.])\s+").expect("TITLE_SEPARATOR regex")
});

// =============================================================================
// Keyword Patterns
// =============================================================================

/// Matches a word-like token: starts with a letter or digit and may carry
/// inner `+ # ' . -` (c++, c#, node.js, o'reilly, open-source).
pub static KEYWORD_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}][\p{L}\p{N}+#'’.\-]*").expect("KEYWORD_TOKEN regex")
});

// =============================================================================
// Media Patterns
// =============================================================================

/// Matches source URLs served by known video hosts.
pub static VIDEO_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:youtube(?:-nocookie)?\.com/|youtu\.be/|vimeo\.com/|dailymotion\.com/|dai\.ly/|blip\.tv/|metacafe\.com/|viddler\.com/|ted\.com/|wistia\.(?:com|net)/|brightcove\.(?:com|net)/|twitch\.tv/|facebook\.com/plugins/video|kickstarter\.com/projects/.+/widget/video|vine\.co/v/)",
    )
    .expect("VIDEO_HOST regex")
});

/// Matches a pixel dimension such as `300`, `300px` or `300.5`.
pub static PIXEL_DIMENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\A\s*(\d+)(?:\.\d+)?\s*(?:px)?\s*\z").expect("PIXEL_DIMENSION regex")
});

/// Matches `width: 300px` / `height: 200px` inside an inline style.
pub static STYLE_DIMENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[;\s])(width|height)\s*:\s*(\d+)(?:\.\d+)?\s*px").expect("STYLE_DIMENSION regex")
});

// =============================================================================
// Metadata Patterns
// =============================================================================

/// Matches a leading byline marker such as "By " or "Written by ".
pub static BYLINE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\A\s*(?:written\s+|posted\s+)?by[:\s]\s*").expect("BYLINE_PREFIX regex")
});

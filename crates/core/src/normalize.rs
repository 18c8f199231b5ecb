//! Text normalization helpers shared by the slide pipeline.
//!
//! Covers the comparison key used to decide whether two lines or slides are
//! "the same", and the title clean-up applied before display.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Regex to collapse multiple whitespace characters into one.
static WHITESPACE_COLLAPSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").unwrap());

/// Regex to match common file suffixes that aren't part of the song name.
static FILENAME_SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*[-_]?\s*(lyrics?|slides?|slideshow|presentation|worship|song)\s*$")
        .unwrap()
});

/// Regex splitting "Title by Artist" at the last "by" separator.
static ATTRIBUTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^(?P<title>.*\S)\s+by\s+\S.*$").unwrap());

/// Build the key two pieces of lyric text are compared by.
///
/// Trims surrounding whitespace, applies NFC so composed and decomposed
/// accents agree, and lowercases.
pub fn comparison_key(text: &str) -> String {
    text.trim().nfc().collect::<String>().to_lowercase()
}

/// Case-insensitive, whitespace-trimmed equality of two lines.
pub fn lines_match(a: &str, b: &str) -> bool {
    comparison_key(a) == comparison_key(b)
}

/// Strip a trailing "by <attribution>" suffix from an extracted song title.
///
/// Only for titles from the lyric extractor, which always reads
/// "Title by Artist". Splits at the last "by" so "Stand By Me by Ben E. King"
/// keeps its own words. A title that would become empty is returned trimmed.
pub fn display_title(title: &str) -> String {
    let trimmed = title.trim();

    match ATTRIBUTION_REGEX.captures(trimmed) {
        Some(caps) => caps["title"].trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Derive a song title from a lyric file name.
///
/// Removes the extension and common suffixes like "lyrics" or "slides".
pub fn title_from_filename(filename: &str) -> Option<String> {
    // Remove file extension
    let name = filename
        .rsplit_once('.')
        .map(|(name, _)| name)
        .unwrap_or(filename);

    let cleaned = FILENAME_SUFFIX_REGEX.replace_all(name, "");
    let collapsed = WHITESPACE_COLLAPSE_REGEX.replace_all(&cleaned, " ");
    let title = collapsed.trim().trim_end_matches('-').trim();

    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Title used for a song that arrived without one.
pub fn fallback_title(index: usize) -> String {
    format!("Song {}", index + 1)
}

//! Sectioning of raw lyric text into slide-sized blocks.
//!
//! Raw text is split on the section-break marker, each section is cleaned
//! line by line, and oversized sections are optionally re-chunked.

use crate::config::PipelineConfig;
use crate::types::Slide;

/// Marker the extractor places between sections.
pub const SECTION_MARKER: &str = "---SLIDE---";

/// Prefix of structural marker lines that are never lyric content.
pub const STRUCTURAL_PREFIX: &str = "---";

/// Split raw text on every section marker, preserving order.
///
/// Always returns at least one element. Empty sections are kept here and
/// dropped by [`clean_section`].
pub fn split_sections(raw: &str) -> Vec<&str> {
    raw.split(SECTION_MARKER).collect()
}

/// Trim every line of a raw section, dropping blank and marker lines.
pub fn clean_section(section: &str) -> Vec<String> {
    section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(STRUCTURAL_PREFIX))
        .map(str::to_string)
        .collect()
}

/// Turn one cleaned section into one or more raw slides.
///
/// With chunking disabled the section stays whole. Otherwise a section
/// longer than `max_lines_per_slide` is split into consecutive groups of that
/// size, the last of which may be shorter.
pub fn chunk_section(lines: &[String], config: &PipelineConfig) -> Vec<Slide> {
    if lines.is_empty() {
        return Vec::new();
    }

    let max_lines = config.max_lines_per_slide;
    if !config.chunking_enabled() || lines.len() <= max_lines {
        return vec![Slide::from_lines(lines)];
    }

    lines
        .chunks(max_lines)
        .map(Slide::from_lines)
        .collect()
}

/// Run split, clean, and chunk over a song's raw text.
pub fn raw_slides(raw: &str, config: &PipelineConfig) -> Vec<Slide> {
    let mut slides = Vec::new();

    for (idx, section) in split_sections(raw).into_iter().enumerate() {
        let lines = clean_section(section);
        if lines.is_empty() {
            log::debug!("Skipping empty section {}", idx + 1);
            continue;
        }
        slides.extend(chunk_section(&lines, config));
    }

    slides
}

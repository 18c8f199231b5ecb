//! WASM-compatible wrapper for the lyric slide pipeline.
//!
//! This crate exposes slide building to JavaScript for use in Cloudflare
//! Workers. Lyrics must already be extracted; nothing here fetches pages.

use serde::{Deserialize, Serialize};
use slides_core::{
    parse_extraction, Deck, PipelineConfig, ProPresenterFormatter, SlidePipeline, Song,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of formatting for ProPresenter.
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatResult {
    /// The formatted text ready for ProPresenter.
    pub text: String,
    /// Number of output slides, title slides included.
    pub slide_count: usize,
}

/// Build slides for a batch of songs.
///
/// # Arguments
/// * `songs` - Array of `{ title, lyrics }` objects, in running order. Titles
///   are shown as given; use `parse_extraction_response` to drop attributions.
/// * `max_lines_per_slide` - Maximum lines per slide (0 keeps sections whole)
///
/// # Returns
/// A JavaScript object `{ songs: [{ title, slides: [string] }] }`.
#[wasm_bindgen]
pub fn build_slides(songs: JsValue, max_lines_per_slide: usize) -> Result<JsValue, JsValue> {
    let songs: Vec<Song> = serde_wasm_bindgen::from_value(songs)
        .map_err(|e| JsValue::from_str(&format!("Invalid songs array: {}", e)))?;

    let deck = build_slides_impl(&songs, max_lines_per_slide);

    serde_wasm_bindgen::to_value(&deck)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn build_slides_impl(songs: &[Song], max_lines_per_slide: usize) -> Deck {
    let config = PipelineConfig::new().with_max_lines_per_slide(max_lines_per_slide);
    SlidePipeline::new(config).build_deck(songs)
}

/// Build slides and format them for ProPresenter.
///
/// # Arguments
/// * `songs` - Array of `{ title, lyrics }` objects, in running order
/// * `max_lines_per_slide` - Maximum lines per slide (0 keeps sections whole)
/// * `include_titles` - Whether each song opens with a title slide
///
/// # Returns
/// A JavaScript object with the format result, or throws if no song
/// produced any slides.
#[wasm_bindgen]
pub fn format_for_propresenter(
    songs: JsValue,
    max_lines_per_slide: usize,
    include_titles: bool,
) -> Result<JsValue, JsValue> {
    let songs: Vec<Song> = serde_wasm_bindgen::from_value(songs)
        .map_err(|e| JsValue::from_str(&format!("Invalid songs array: {}", e)))?;

    let result = format_for_propresenter_impl(&songs, max_lines_per_slide, include_titles)
        .map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn format_for_propresenter_impl(
    songs: &[Song],
    max_lines_per_slide: usize,
    include_titles: bool,
) -> Result<FormatResult, String> {
    let config = PipelineConfig::new().with_max_lines_per_slide(max_lines_per_slide);
    let deck = SlidePipeline::new(config)
        .try_build_deck(songs)
        .map_err(|e| e.to_string())?;

    let formatter = ProPresenterFormatter::new().with_title_slides(include_titles);

    Ok(FormatResult {
        text: formatter.format_with_newline(&deck),
        slide_count: formatter.slide_count(&deck),
    })
}

/// Parse a lyric extractor response into `{ title, lyrics }`.
///
/// Throws if the extractor reported that no lyrics were found.
#[wasm_bindgen]
pub fn parse_extraction_response(response: &str) -> Result<JsValue, JsValue> {
    let song = parse_extraction(response).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&song)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

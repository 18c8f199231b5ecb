//! ProPresenter text format output.
//!
//! Generates plain text where each slide is separated by a blank line,
//! optionally opening every song with a title slide.

use crate::assemble::PresentationAssembler;
use crate::error::Result;
use crate::types::{Deck, SongSlides};
use std::io::Write;

/// Formatter for ProPresenter-compatible text output.
#[derive(Debug, Clone)]
pub struct ProPresenterFormatter {
    /// Whether each song starts with a slide holding its title.
    title_slides: bool,
}

impl Default for ProPresenterFormatter {
    fn default() -> Self {
        Self { title_slides: true }
    }
}

impl ProPresenterFormatter {
    /// Create a new formatter that emits title slides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether each song opens with a title slide.
    pub fn with_title_slides(mut self, enabled: bool) -> Self {
        self.title_slides = enabled;
        self
    }

    /// Slide texts for one song, in output order.
    fn song_blocks<'a>(&self, song: &'a SongSlides) -> impl Iterator<Item = &'a str> {
        let title = (self.title_slides && !song.title.is_empty()).then_some(song.title.as_str());
        title
            .into_iter()
            .chain(song.slides.iter().map(|s| s.text.as_str()))
    }

    /// Number of slides the formatted output will contain.
    pub fn slide_count(&self, deck: &Deck) -> usize {
        deck.songs.iter().map(|s| self.song_blocks(s).count()).sum()
    }

    /// Format a deck into ProPresenter-compatible text.
    ///
    /// # Example output
    /// ```text
    /// Amazing Grace
    ///
    /// Amazing grace how sweet the sound
    /// That saved a wretch like me
    ///
    /// Amen (x3)
    /// ```
    pub fn format(&self, deck: &Deck) -> String {
        let blocks: Vec<&str> = deck
            .songs
            .iter()
            .flat_map(|song| self.song_blocks(song))
            .collect();

        blocks.join("\n\n")
    }

    /// Format and add a trailing newline.
    pub fn format_with_newline(&self, deck: &Deck) -> String {
        let formatted = self.format(deck);
        if formatted.is_empty() {
            formatted
        } else {
            format!("{}\n", formatted)
        }
    }
}

impl PresentationAssembler for ProPresenterFormatter {
    fn write_deck(&self, deck: &Deck, out: &mut dyn Write) -> Result<()> {
        out.write_all(self.format_with_newline(deck).as_bytes())?;
        Ok(())
    }
}

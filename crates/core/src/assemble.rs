//! Hand-off of a finished deck to a presentation writer.

use crate::error::Result;
use crate::types::{Deck, RenderedSlide, SongSlides};
use serde::Serialize;
use std::io::Write;

/// Something that turns a processed deck into an output document.
pub trait PresentationAssembler {
    /// Write the deck to `out`.
    fn write_deck(&self, deck: &Deck, out: &mut dyn Write) -> Result<()>;

    /// Assemble the deck into an in-memory string.
    fn assemble_to_string(&self, deck: &Deck) -> Result<String> {
        let mut buf = Vec::new();
        self.write_deck(deck, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// JSON view of a deck: songs plus the flattened, numbered slide list.
#[derive(Debug, Serialize)]
struct DeckDocument<'a> {
    songs: &'a [SongSlides],
    slides: Vec<RenderedSlide>,
    total_slides: usize,
}

/// Writes a deck as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAssembler;

impl JsonAssembler {
    /// Create a new JSON assembler.
    pub fn new() -> Self {
        Self
    }
}

impl PresentationAssembler for JsonAssembler {
    fn write_deck(&self, deck: &Deck, out: &mut dyn Write) -> Result<()> {
        let document = DeckDocument {
            songs: &deck.songs,
            slides: deck.rendered_slides(),
            total_slides: deck.total_slides(),
        };

        serde_json::to_writer_pretty(&mut *out, &document)?;
        writeln!(out)?;
        Ok(())
    }
}

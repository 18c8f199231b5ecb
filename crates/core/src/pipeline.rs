//! Per-song orchestration of the slide pipeline.
//!
//! raw text -> sections -> cleaned lines -> raw slides -> deduplicated
//! slides -> condensed slides.

use crate::condense::condense_repeated_lines;
use crate::config::PipelineConfig;
use crate::dedup::deduplicate_slides;
use crate::error::{Error, Result};
use crate::normalize::fallback_title;
use crate::section::raw_slides;
use crate::types::{Deck, Slide, Song, SongSlides};

/// Turns songs into final slide sequences.
#[derive(Debug, Clone, Default)]
pub struct SlidePipeline {
    config: PipelineConfig,
}

impl SlidePipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The configuration this pipeline runs with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full pipeline over raw lyric text.
    ///
    /// Empty or blank input yields no slides.
    pub fn process_lyrics(&self, raw: &str) -> Vec<Slide> {
        let slides = raw_slides(raw, &self.config);
        let unique = deduplicate_slides(slides);

        unique
            .into_iter()
            .map(|slide| Slide::new(condense_repeated_lines(&slide.text)))
            .collect()
    }

    /// Process one song.
    ///
    /// The title is used as given; attribution is removed when an extractor
    /// response is parsed, not here.
    pub fn process_song(&self, song: &Song) -> SongSlides {
        SongSlides {
            title: song.title.trim().to_string(),
            slides: self.process_lyrics(&song.lyrics),
        }
    }

    /// Process every song in order, skipping songs that yield no slides.
    ///
    /// Untitled songs are named after their position in the batch.
    pub fn build_deck(&self, songs: &[Song]) -> Deck {
        let mut deck = Deck::new();

        for (idx, song) in songs.iter().enumerate() {
            let mut processed = self.process_song(song);

            if processed.slides.is_empty() {
                log::warn!("Skipping song {} ({:?}): no lyrics after cleaning", idx + 1, song.title);
                continue;
            }

            if processed.title.is_empty() {
                processed.title = fallback_title(idx);
            }

            log::debug!(
                "Song {} ({:?}): {} slides",
                idx + 1,
                processed.title,
                processed.slides.len()
            );
            deck.add_song(processed);
        }

        deck
    }

    /// Like [`build_deck`](Self::build_deck), but fails if no song produced slides.
    pub fn try_build_deck(&self, songs: &[Song]) -> Result<Deck> {
        let deck = self.build_deck(songs);
        if deck.is_empty() {
            return Err(Error::EmptyDeck);
        }
        Ok(deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(slides: &[Slide]) -> Vec<&str> {
        slides.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_process_lyrics_full_flow() {
        let raw = "\
Verse line one
Verse line two
---SLIDE---
Chorus line
Chorus line
Chorus line
---SLIDE---
chorus line
CHORUS LINE
Chorus line
---SLIDE---
Bridge A
Bridge B
Bridge A
Bridge B
";
        let pipeline = SlidePipeline::default();
        let slides = pipeline.process_lyrics(raw);

        assert_eq!(
            texts(&slides),
            vec![
                "Verse line one\nVerse line two",
                "Chorus line (x3)",
                "Bridge A\nBridge B\n(x2)",
            ]
        );
    }

    #[test]
    fn test_process_lyrics_keeps_non_adjacent_repeats() {
        let raw = "Verse 1\n---SLIDE---\nChorus\n---SLIDE---\nChorus\n---SLIDE---\nVerse 2\n---SLIDE---\nChorus";
        let slides = SlidePipeline::default().process_lyrics(raw);
        assert_eq!(texts(&slides), vec!["Verse 1", "Chorus", "Verse 2", "Chorus"]);
    }

    #[test]
    fn test_process_lyrics_rechunks_then_dedups() {
        let raw = "A\nB\nA\nB\nC";
        let pipeline = SlidePipeline::new(PipelineConfig::new().with_max_lines_per_slide(2));
        let slides = pipeline.process_lyrics(raw);
        assert_eq!(texts(&slides), vec!["A\nB", "C"]);
    }

    #[test]
    fn test_process_lyrics_empty() {
        let pipeline = SlidePipeline::default();
        assert!(pipeline.process_lyrics("").is_empty());
        assert!(pipeline.process_lyrics("\n  \n---SLIDE---\n---LYRICS---\n").is_empty());
    }

    #[test]
    fn test_process_song_keeps_title_whole() {
        let song = Song::new(" Saved By Grace ", "I love You Lord");
        let processed = SlidePipeline::default().process_song(&song);
        assert_eq!(processed.title, "Saved By Grace");
        assert_eq!(texts(&processed.slides), vec!["I love You Lord"]);
    }

    #[test]
    fn test_process_extracted_song_uses_display_title() {
        let response = "---TITLE---\nGoodness of God by Bethel Music\n---LYRICS---\nI love You Lord";
        let song = crate::envelope::parse_extraction(response).unwrap();
        let processed = SlidePipeline::default().process_song(&song);
        assert_eq!(processed.title, "Goodness of God");
    }

    #[test]
    fn test_build_deck_skips_empty_songs() {
        let songs = vec![
            Song::new("Empty", "   \n---SLIDE---\n"),
            Song::new("Way Maker", "Way maker\nMiracle worker"),
        ];
        let deck = SlidePipeline::default().build_deck(&songs);

        assert_eq!(deck.songs.len(), 1);
        assert_eq!(deck.songs[0].title, "Way Maker");
        assert_eq!(deck.total_slides(), 1);
    }

    #[test]
    fn test_build_deck_fallback_title() {
        let songs = vec![Song::new("a", "x"), Song::new("  ", "Some lyric")];
        let deck = SlidePipeline::default().build_deck(&songs);
        assert_eq!(deck.songs[1].title, "Song 2");
    }

    #[test]
    fn test_try_build_deck_empty() {
        let songs = vec![Song::new("Nothing", "")];
        assert!(matches!(
            SlidePipeline::default().try_build_deck(&songs),
            Err(Error::EmptyDeck)
        ));
    }
}

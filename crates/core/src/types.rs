//! Domain types for songs, slides, and assembled decks.

use serde::{Deserialize, Serialize};

/// A song as handed over by the lyric extraction step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Display title. Extractor responses have their "by <artist>"
    /// attribution removed when parsed.
    pub title: String,

    /// Raw lyric text, optionally split into sections with `---SLIDE---`.
    pub lyrics: String,
}

impl Song {
    /// Create a new song from a title and raw lyric text.
    pub fn new(title: impl Into<String>, lyrics: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lyrics: lyrics.into(),
        }
    }
}

/// One rendered slide of lyrics.
///
/// The text is a newline-joined block of non-empty lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slide {
    pub text: String,
}

impl Slide {
    /// Create a slide from already-joined text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Create a slide by joining lines with newlines.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let text = lines
            .iter()
            .map(|l| l.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        Self { text }
    }
}

/// The final slide sequence for one song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongSlides {
    /// Display title.
    pub title: String,

    /// Slides in performance order.
    pub slides: Vec<Slide>,
}

impl SongSlides {
    /// Label for the slide at `index`, e.g. "2/5".
    pub fn slide_label(&self, index: usize) -> String {
        format!("{}/{}", index + 1, self.slides.len())
    }
}

/// An ordered collection of processed songs, ready for templating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub songs: Vec<SongSlides>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a processed song to the end of the deck.
    pub fn add_song(&mut self, song: SongSlides) {
        self.songs.push(song);
    }

    /// True if the deck holds no songs.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Number of lyric slides across all songs (title slides not counted).
    pub fn total_slides(&self) -> usize {
        self.songs.iter().map(|s| s.slides.len()).sum()
    }

    /// Flatten the deck into numbered slides, in presentation order.
    pub fn rendered_slides(&self) -> Vec<RenderedSlide> {
        self.songs
            .iter()
            .flat_map(|song| {
                let total = song.slides.len();
                song.slides
                    .iter()
                    .enumerate()
                    .map(move |(idx, slide)| RenderedSlide {
                        song_title: song.title.clone(),
                        number: idx + 1,
                        total,
                        label: song.slide_label(idx),
                        text: slide.text.clone(),
                    })
            })
            .collect()
    }
}

/// A slide together with its position within its song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSlide {
    /// Display title of the owning song.
    pub song_title: String,

    /// 1-based slide number within the song.
    pub number: usize,

    /// Number of slides in the song.
    pub total: usize,

    /// Corner label, e.g. "2/5".
    pub label: String,

    pub text: String,
}

//! Error types for lyric ingestion and deck assembly.
//!
//! The normalization functions themselves are total and never fail; these
//! errors cover the edges where text enters or a finished deck leaves.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around the slide pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to write an assembled deck.
    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),

    /// The extraction service reported that the page had no lyrics.
    #[error("No lyrics found in extraction response")]
    NoLyricsFound,

    /// Extracted lyrics are too short to be a real song.
    #[error("Extracted lyrics too short ({len} characters, need more than {min})")]
    LyricsTooShort { len: usize, min: usize },

    /// Failed to serialize a deck.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// None of the songs in a batch produced any slides.
    #[error("No valid lyrics found for any songs")]
    EmptyDeck,
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

//! Parsing of the lyric extractor's response envelope.
//!
//! The extractor answers with a title block followed by marker-delimited
//! lyrics:
//!
//! ```text
//! ---TITLE---
//! Song Title by Artist Name
//! ---LYRICS---
//! Line 1 of verse 1
//! ---SLIDE---
//! Line 1 of chorus
//! ```

use crate::error::{Error, Result};
use crate::normalize::display_title;
use crate::types::Song;

/// Marker that opens the title block.
pub const TITLE_MARKER: &str = "---TITLE---";

/// Marker that opens the lyrics block.
pub const LYRICS_MARKER: &str = "---LYRICS---";

/// Sentinel the extractor returns for pages without lyrics.
pub const NO_LYRICS_SENTINEL: &str = "NO_LYRICS_FOUND";

/// Title used when the response carries no title block.
pub const UNKNOWN_TITLE: &str = "Unknown Song";

/// Default minimum lyric length accepted by [`validate_lyrics`].
pub const MIN_LYRICS_CHARS: usize = 50;

/// Split an extractor response into a song.
///
/// The "by <artist>" attribution is removed from the title here, so the
/// returned song carries its display title. Responses without both markers
/// are treated as bare lyrics under [`UNKNOWN_TITLE`].
pub fn parse_extraction(response: &str) -> Result<Song> {
    let trimmed = response.trim();

    if trimmed.is_empty() || trimmed == NO_LYRICS_SENTINEL {
        return Err(Error::NoLyricsFound);
    }

    if let Some(song) = split_envelope(trimmed) {
        return Ok(song);
    }

    log::debug!("Response has no title envelope, using it as bare lyrics");
    Ok(Song::new(UNKNOWN_TITLE, trimmed))
}

fn split_envelope(response: &str) -> Option<Song> {
    let (_, after_title) = response.split_once(TITLE_MARKER)?;
    let (title, lyrics) = after_title.split_once(LYRICS_MARKER)?;

    Some(Song::new(display_title(title), lyrics.trim()))
}

/// Reject lyrics that are too short to be a real song.
///
/// Lyrics must be longer than `min_chars` characters after trimming.
pub fn validate_lyrics(song: &Song, min_chars: usize) -> Result<()> {
    let len = song.lyrics.trim().chars().count();
    if len > min_chars {
        Ok(())
    } else {
        Err(Error::LyricsTooShort {
            len,
            min: min_chars,
        })
    }
}

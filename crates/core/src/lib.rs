//! Core lyric normalization, slide condensation, and deck assembly
//! for worship presentations.

pub mod assemble;
pub mod condense;
pub mod config;
pub mod dedup;
pub mod envelope;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod propresenter;
pub mod section;
pub mod types;

pub use assemble::{JsonAssembler, PresentationAssembler};
pub use condense::{condense_repeated_lines, condense_single_lines, try_condense_blocks};
pub use config::PipelineConfig;
pub use dedup::deduplicate_slides;
pub use envelope::{parse_extraction, validate_lyrics};
pub use error::{Error, Result};
pub use pipeline::SlidePipeline;
pub use propresenter::ProPresenterFormatter;
pub use types::{Deck, RenderedSlide, Slide, Song, SongSlides};

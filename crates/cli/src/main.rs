//! CLI tool for turning extracted song lyrics into slide decks.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use slides_core::envelope::UNKNOWN_TITLE;
use slides_core::normalize::title_from_filename;
use slides_core::{
    parse_extraction, validate_lyrics, JsonAssembler, PipelineConfig, PresentationAssembler,
    ProPresenterFormatter, SlidePipeline, Song,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Build worship slide decks from extracted lyric files.
#[derive(Parser, Debug)]
#[command(name = "lyric-slides")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input lyric file(s), one song per file, in running order
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum lines per slide; 0 keeps each marked section on one slide
    #[arg(short = 'l', long, default_value = "0")]
    lines_per_slide: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Do not open each song with a title slide (text output only)
    #[arg(long)]
    no_title_slides: bool,

    /// Reject songs whose lyrics are not longer than this many characters
    #[arg(long)]
    min_chars: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// ProPresenter-style plain text, slides separated by blank lines
    Text,
    /// JSON deck with numbered slides
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let mut songs = Vec::new();

    for input_path in &args.input {
        log::info!("Reading: {}", input_path.display());

        match load_song(input_path, args.min_chars) {
            Ok(song) => songs.push(song),
            Err(e) => {
                eprintln!("Error processing {}: {:#}", input_path.display(), e);
            }
        }
    }

    let config = PipelineConfig::new().with_max_lines_per_slide(args.lines_per_slide);
    let pipeline = SlidePipeline::new(config);
    let deck = pipeline.try_build_deck(&songs)?;

    log::info!(
        "Built {} slides for {} songs",
        deck.total_slides(),
        deck.songs.len()
    );

    let assembler = build_assembler(args.format, !args.no_title_slides);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            assembler
                .write_deck(&deck, &mut writer)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            writer.flush()?;
            log::info!("Written to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            assembler.write_deck(&deck, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}

/// Pick the assembler for the requested output format.
fn build_assembler(format: OutputFormat, title_slides: bool) -> Box<dyn PresentationAssembler> {
    match format {
        OutputFormat::Text => {
            Box::new(ProPresenterFormatter::new().with_title_slides(title_slides))
        }
        OutputFormat::Json => Box::new(JsonAssembler::new()),
    }
}

/// Read one lyric file into a song.
fn load_song(path: &Path, min_chars: Option<usize>) -> Result<Song> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    song_from_text(&text, filename, min_chars)
}

/// Parse file contents, falling back to the file name for a title.
fn song_from_text(text: &str, filename: &str, min_chars: Option<usize>) -> Result<Song> {
    let mut song = parse_extraction(text)?;

    if song.title == UNKNOWN_TITLE {
        if let Some(title) = title_from_filename(filename) {
            log::debug!("Using title {:?} from file name", title);
            song.title = title;
        }
    }

    if let Some(min) = min_chars {
        validate_lyrics(&song, min)?;
    }

    Ok(song)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_from_envelope() {
        let text = "---TITLE---\nWay Maker by Sinach\n---LYRICS---\nWay maker\n---SLIDE---\nMiracle worker";
        let song = song_from_text(text, "ignored.txt", None).unwrap();

        assert_eq!(song.title, "Way Maker");
        assert_eq!(song.lyrics, "Way maker\n---SLIDE---\nMiracle worker");
    }

    #[test]
    fn test_song_title_from_filename() {
        let song = song_from_text("Amazing grace\nHow sweet the sound", "Amazing Grace Lyrics.txt", None)
            .unwrap();
        assert_eq!(song.title, "Amazing Grace");
    }

    #[test]
    fn test_filename_title_with_by_is_kept_whole() {
        let song = song_from_text("Saved by grace alone\nThrough faith", "Saved By Grace.txt", None)
            .unwrap();
        let deck = SlidePipeline::default().build_deck(&[song]);
        assert_eq!(deck.songs[0].title, "Saved By Grace");
    }

    #[test]
    fn test_song_keeps_unknown_title_without_usable_filename() {
        let song = song_from_text("Some lyric", "lyrics.txt", None).unwrap();
        assert_eq!(song.title, UNKNOWN_TITLE);
    }

    #[test]
    fn test_song_rejects_no_lyrics() {
        assert!(song_from_text("NO_LYRICS_FOUND", "x.txt", None).is_err());
    }

    #[test]
    fn test_song_min_chars() {
        assert!(song_from_text("Too short", "x.txt", Some(50)).is_err());
        assert!(song_from_text("Too short", "x.txt", None).is_ok());
    }

    #[test]
    fn test_build_assembler_text() {
        let pipeline = SlidePipeline::default();
        let deck = pipeline.build_deck(&[Song::new("Title", "Line one\nLine two")]);

        let text = build_assembler(OutputFormat::Text, false)
            .assemble_to_string(&deck)
            .unwrap();
        assert_eq!(text, "Line one\nLine two\n");
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["lyric-slides", "-l", "4", "--format", "json", "a.txt", "b.txt"])
            .unwrap();
        assert_eq!(args.lines_per_slide, 4);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.input.len(), 2);
        assert!(!args.no_title_slides);
    }
}

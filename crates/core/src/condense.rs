//! Condensation of repeated lines within a single slide.
//!
//! Repeated content is collapsed into an "(xN)" annotation. Block detection
//! runs first and greedily prefers the largest repeating unit at each
//! position; single-line run detection is the fallback when no block
//! repeats anywhere on the slide.

use crate::normalize::{comparison_key, lines_match};

/// Largest block size considered by block detection.
const MAX_BLOCK_LINES: usize = 10;

/// Slides with this many lines or fewer are never condensed.
const MIN_CONDENSE_LINES: usize = 2;

/// Single-line runs must be longer than this to be condensed.
const SINGLE_LINE_RUN_THRESHOLD: usize = 2;

/// A block of lines found repeated back to back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RepeatedUnit<'a> {
    /// First occurrence of the block.
    pub lines: &'a [String],
    pub block_len: usize,
    /// Occurrences including the first one.
    pub repeat_count: usize,
}

impl<'a> RepeatedUnit<'a> {
    /// Lines consumed by all occurrences.
    fn consumed(&self) -> usize {
        self.block_len * self.repeat_count
    }

    /// True if every line in the block is the same lyric.
    fn is_uniform(&self) -> bool {
        let first = &self.lines[0];
        self.lines[1..].iter().all(|l| lines_match(l, first))
    }

    /// Render the condensed form of this unit.
    fn render(&self) -> Vec<String> {
        if self.block_len == 1 || self.is_uniform() {
            return vec![annotate(&self.lines[0], self.consumed())];
        }

        let mut out: Vec<String> = self.lines.to_vec();
        out.push(format!("(x{})", self.repeat_count));
        out
    }
}

fn annotate(line: &str, count: usize) -> String {
    format!("{} (x{})", line.trim(), count)
}

/// Find the largest block starting at `start` that repeats at least twice.
fn find_repeated_unit<'a>(
    lines: &'a [String],
    keys: &[String],
    start: usize,
) -> Option<RepeatedUnit<'a>> {
    let remaining = lines.len() - start;
    let max_block = (remaining / 2).min(MAX_BLOCK_LINES);

    for block_len in (1..=max_block).rev() {
        let block = &keys[start..start + block_len];
        let mut repeat_count = 1;
        let mut next = start + block_len;

        while next + block_len <= keys.len() && &keys[next..next + block_len] == block {
            repeat_count += 1;
            next += block_len;
        }

        if repeat_count >= 2 {
            return Some(RepeatedUnit {
                lines: &lines[start..start + block_len],
                block_len,
                repeat_count,
            });
        }
    }

    None
}

/// Collapse back-to-back repeated blocks of lines.
///
/// Returns `None` when nothing on the slide repeats, so the caller can fall
/// back to [`condense_single_lines`].
pub fn try_condense_blocks(lines: &[String]) -> Option<Vec<String>> {
    let keys: Vec<String> = lines.iter().map(|l| comparison_key(l)).collect();
    let mut output = Vec::with_capacity(lines.len());
    let mut condensed_any = false;
    let mut i = 0;

    while i < lines.len() {
        match find_repeated_unit(lines, &keys, i) {
            Some(unit) => {
                log::debug!(
                    "Condensing {}-line block repeated {} times at line {}",
                    unit.block_len,
                    unit.repeat_count,
                    i + 1
                );
                output.extend(unit.render());
                i += unit.consumed();
                condensed_any = true;
            }
            None => {
                output.push(lines[i].clone());
                i += 1;
            }
        }
    }

    condensed_any.then_some(output)
}

/// Collapse runs of more than two identical lines into "line (xN)".
///
/// Runs of one or two lines are kept verbatim.
pub fn condense_single_lines(lines: &[String]) -> Vec<String> {
    let mut output = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let run = lines[i..]
            .iter()
            .take_while(|l| lines_match(l, &lines[i]))
            .count();

        if run > SINGLE_LINE_RUN_THRESHOLD {
            output.push(annotate(&lines[i], run));
        } else {
            output.extend(lines[i..i + run].iter().cloned());
        }
        i += run;
    }

    output
}

/// Condense repeated lines and blocks within one slide's text.
///
/// Slides with two or fewer non-empty lines are returned unchanged.
pub fn condense_repeated_lines(text: &str) -> String {
    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    if lines.len() <= MIN_CONDENSE_LINES {
        return text.to_string();
    }

    let condensed = try_condense_blocks(&lines).unwrap_or_else(|| condense_single_lines(&lines));
    condensed.join("\n")
}

//! Removal of consecutive duplicate slides.

use crate::normalize::comparison_key;
use crate::types::Slide;

/// Drop slides whose text equals the previously kept slide.
///
/// A single left-to-right pass; each slide is compared against the last
/// slide that was kept, so a chorus separated by a verse survives.
///
/// Slides are compared trimmed and lowercased after Unicode NFC, so the same
/// lyric typed with a precomposed or a combining accent counts as a duplicate.
pub fn deduplicate_slides(slides: Vec<Slide>) -> Vec<Slide> {
    let mut kept: Vec<Slide> = Vec::with_capacity(slides.len());
    let mut last_key: Option<String> = None;

    for (idx, slide) in slides.into_iter().enumerate() {
        let key = comparison_key(&slide.text);

        if last_key.as_deref() == Some(key.as_str()) {
            log::debug!(
                "Dropping duplicate slide {}: {:?}",
                idx + 1,
                slide.text.lines().next().unwrap_or_default()
            );
            continue;
        }

        last_key = Some(key);
        kept.push(slide);
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(texts: &[&str]) -> Vec<Slide> {
        texts.iter().map(|t| Slide::new(*t)).collect()
    }

    #[test]
    fn test_consecutive_only() {
        let input = slides(&["Verse 1", "Chorus", "Chorus", "Verse 2", "Chorus"]);
        let result = deduplicate_slides(input);
        assert_eq!(result, slides(&["Verse 1", "Chorus", "Verse 2", "Chorus"]));
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let input = slides(&["Holy Spirit\nYou are welcome", "  holy spirit\nyou are WELCOME "]);
        let result = deduplicate_slides(input);
        assert_eq!(result, slides(&["Holy Spirit\nYou are welcome"]));
    }

    #[test]
    fn test_keeps_first_occurrence_text() {
        let input = slides(&["CHORUS", "chorus", "Chorus"]);
        assert_eq!(deduplicate_slides(input), slides(&["CHORUS"]));
    }

    #[test]
    fn test_canonically_equivalent_accents_are_duplicates() {
        let input = slides(&["Jes\u{00e9}", "Jese\u{0301}"]);
        assert_eq!(deduplicate_slides(input), slides(&["Jes\u{00e9}"]));
    }

    #[test]
    fn test_empty_and_single() {
        assert!(deduplicate_slides(Vec::new()).is_empty());
        assert_eq!(deduplicate_slides(slides(&["Only"])), slides(&["Only"]));
    }

    #[test]
    fn test_idempotent() {
        let input = slides(&["A", "A", "B", "a", "B", "B", "C"]);
        let once = deduplicate_slides(input);
        let twice = deduplicate_slides(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once, slides(&["A", "B", "a", "B", "C"]));
    }

    #[test]
    fn test_preserves_relative_order() {
        let input = slides(&["1", "2", "2", "3", "1", "1", "4"]);
        assert_eq!(deduplicate_slides(input), slides(&["1", "2", "3", "1", "4"]));
    }
}

//! Line classification shared by the pipeline stages.
//!
//! The stripper and the reflow engine both need to know what kind of line
//! they are looking at. Keeping the patterns behind one classifier keeps the
//! reflow state machine auditable and lets the patterns be tested in
//! isolation.

use regex::Regex;
use std::sync::LazyLock;

/// Regex to match list item markers: a bullet glyph, "1." / "1)", or "a)".
static BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[•\-–]\s+|\d+[.)]\s+|[a-z]\)\s+)").unwrap());

/// Regex to match bare pagination like "12 / 56".
static PAGINATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s*/\s*\d+$").unwrap());

/// Regex to match "Page 3 ..." / "Slide 12 ..." labels.
static PAGE_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:page|slide)\s*\d+\b").unwrap());

/// Regex to match "Week 4 ..." labels.
static WEEK_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^week\s+\d+").unwrap());

/// The kind of line the pipeline stages act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Empty after trimming.
    Blank,
    /// Starts a list item (bullet glyph, numbered, or lettered marker).
    Bullet,
    /// A structural page/slide counter or label.
    PageCounter,
    /// Anything else: regular prose, possibly a wrapped fragment.
    Prose,
}

/// Classify a single line.
///
/// The line is trimmed before matching, so callers may pass lines with
/// leading or trailing whitespace.
pub fn classify(line: &str) -> LineClass {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    if BULLET_REGEX.is_match(trimmed) {
        return LineClass::Bullet;
    }

    if PAGINATION_REGEX.is_match(trimmed)
        || PAGE_LABEL_REGEX.is_match(trimmed)
        || WEEK_LABEL_REGEX.is_match(trimmed)
    {
        return LineClass::PageCounter;
    }

    LineClass::Prose
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify(""), LineClass::Blank);
        assert_eq!(classify("   "), LineClass::Blank);
        assert_eq!(classify("\t"), LineClass::Blank);
    }

    #[test]
    fn test_bullet_glyphs() {
        assert_eq!(classify("• First point"), LineClass::Bullet);
        assert_eq!(classify("- First point"), LineClass::Bullet);
        assert_eq!(classify("– First point"), LineClass::Bullet);
        assert_eq!(classify("  - indented point"), LineClass::Bullet);
    }

    #[test]
    fn test_numbered_and_lettered_items() {
        assert_eq!(classify("1. Introduction"), LineClass::Bullet);
        assert_eq!(classify("12) Results"), LineClass::Bullet);
        assert_eq!(classify("a) first case"), LineClass::Bullet);
        assert_eq!(classify("b) second case"), LineClass::Bullet);
    }

    #[test]
    fn test_bullet_requires_trailing_space() {
        // A dash glued to text is a word break or minus sign, not a marker.
        assert_eq!(classify("-wrapped fragment"), LineClass::Prose);
        assert_eq!(classify("3.14 is pi"), LineClass::Prose);
    }

    #[test]
    fn test_pagination() {
        assert_eq!(classify("12 / 56"), LineClass::PageCounter);
        assert_eq!(classify("12/56"), LineClass::PageCounter);
        assert_eq!(classify("1 /2"), LineClass::PageCounter);
    }

    #[test]
    fn test_pagination_must_be_bare() {
        // Fractions inside prose are not counters.
        assert_eq!(classify("about 12 / 56 of cases"), LineClass::Prose);
    }

    #[test]
    fn test_page_and_slide_labels() {
        assert_eq!(classify("Page 3"), LineClass::PageCounter);
        assert_eq!(classify("page 3 of 12"), LineClass::PageCounter);
        assert_eq!(classify("Slide 7"), LineClass::PageCounter);
        assert_eq!(classify("SLIDE 7: Mitosis"), LineClass::PageCounter);
        assert_eq!(classify("slide3"), LineClass::PageCounter);
    }

    #[test]
    fn test_week_labels() {
        assert_eq!(classify("Week 4"), LineClass::PageCounter);
        assert_eq!(classify("week 4 — Photosynthesis"), LineClass::PageCounter);
        // "week" needs a following number to be a label.
        assert_eq!(classify("weekly summary"), LineClass::Prose);
    }

    #[test]
    fn test_labels_need_leading_match() {
        assert_eq!(classify("The slides cover pages 3 to 9"), LineClass::Prose);
        // Slide delimiters from the extractor start with dashes, not "slide".
        assert_eq!(classify("--- Slide 3 ---"), LineClass::Prose);
    }

    #[test]
    fn test_prose() {
        assert_eq!(classify("The cell membrane is selectively"), LineClass::Prose);
        assert_eq!(classify("permeable."), LineClass::Prose);
    }
}

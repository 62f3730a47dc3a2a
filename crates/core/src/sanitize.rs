//! Unicode and control-character cleanup, the first pipeline stage.
//!
//! Extractor output arrives with whatever the source file contained: mixed
//! line endings, form feeds between PDF pages, zero-width marks, and
//! compatibility glyphs. Everything downstream assumes `\n`-separated,
//! NFKC-normalized text, which this stage establishes.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Regex to collapse runs of three or more newlines.
static NEWLINE_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Zero-width and BOM characters to delete outright.
const ZERO_WIDTH_CHARS: &[char] = &['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'];

/// C0 control characters deleted by the sanitizer: everything below space
/// except tab and newline, plus DEL. Vertical tab and form feed are excluded
/// here because they are converted to newlines before this filter runs.
fn is_stripped_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{08}' | '\u{0E}'..='\u{1F}' | '\u{7F}')
}

/// Sanitize raw extracted text.
///
/// - Applies Unicode NFKC normalization (folds fancy bullets, smart quotes,
///   fullwidth forms to canonical characters)
/// - Normalizes `\r\n` and lone `\r` to `\n`
/// - Converts vertical tab and form feed to `\n`
/// - Deletes remaining C0 control characters (except `\n` and `\t`) and DEL
/// - Deletes zero-width space, ZWNJ, ZWJ, and BOM characters
/// - Collapses 3+ consecutive newlines to exactly 2
/// - Trims trailing whitespace from every line
///
/// Total over any input string; an empty string sanitizes to an empty string.
pub fn sanitize(text: &str) -> String {
    let normalized: String = text.nfkc().collect();

    let unified = normalized
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\u{0B}', "\n")
        .replace('\u{0C}', "\n");

    let cleaned: String = unified
        .chars()
        .filter(|&c| !is_stripped_control(c) && !ZERO_WIDTH_CHARS.contains(&c))
        .collect();

    let collapsed = NEWLINE_RUN_REGEX.replace_all(&cleaned, "\n\n");

    collapsed
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

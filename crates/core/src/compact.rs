//! Final whitespace compaction, the last pipeline stage.

use regex::Regex;
use std::sync::LazyLock;

/// Regex to collapse runs of three or more newlines.
static NEWLINE_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Compact whitespace in reflowed text.
///
/// Trims trailing whitespace from every line, collapses any remaining run of
/// 3+ newlines down to 2, and trims the whole text. Trailing whitespace is
/// removed before newline runs are collapsed so that lines holding only
/// spaces cannot re-create a run; this makes the stage idempotent.
pub fn compact(text: &str) -> String {
    let trimmed = text
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n");

    NEWLINE_RUN_REGEX
        .replace_all(&trimmed, "\n\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(compact(""), "");
    }

    #[test]
    fn test_collapse_blank_line_runs() {
        assert_eq!(compact("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        assert_eq!(compact("a   \nb\t"), "a\nb");
    }

    #[test]
    fn test_whole_text_trimmed() {
        assert_eq!(compact("\n\n  hello  \n\n"), "hello");
    }

    #[test]
    fn test_whitespace_only_lines_collapse() {
        // Lines of bare spaces become blank after trimming and must still
        // collapse into a single blank line.
        assert_eq!(compact("a\n   \n \n\t\nb"), "a\n\nb");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "",
            "plain text",
            "a\n\n\n\nb",
            "a   \n   \n \nb",
            "  \n\nleading and trailing\n\n\n  ",
            "- bullet\n\ntext.",
        ];
        for input in inputs {
            let once = compact(input);
            assert_eq!(compact(&once), once, "not idempotent for {:?}", input);
        }
    }
}

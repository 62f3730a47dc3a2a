//! Wrapped-line merging, the third pipeline stage.
//!
//! Extractors emit hard line breaks wherever the source laid out text, so a
//! single sentence often arrives split across several short lines. This
//! stage joins those fragments back into logical lines while keeping list
//! items on their own line.

use crate::classify::{classify, LineClass};

/// True if the buffered text ends at a sentence boundary.
fn ends_at_sentence(buffer: &str) -> bool {
    matches!(buffer.chars().last(), Some('.' | '!' | '?' | ':'))
}

/// Merge wrapped line fragments into logical lines.
///
/// Single pass over the input with one pending buffer:
///
/// - A bullet/numbered/lettered line flushes the buffer and is emitted on
///   its own line, never joined with neighbors.
/// - A blank line flushes the buffer and is kept.
/// - A prose line joins onto the pending buffer unless the buffer already
///   ends at a sentence boundary (`.`, `!`, `?`, `:`). A buffer ending in a
///   hyphen is a word wrapped mid-break, so the hyphen is dropped and the
///   fragment concatenated without a space.
///
/// Two unrelated short lines that both lack terminal punctuation (a title
/// followed by a fresh paragraph, say) will be merged incorrectly. That is
/// accepted: downstream consumers tolerate minor merges far better than
/// heavy fragmentation.
pub fn reflow(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut buffer = String::new();
    let mut merges = 0usize;

    for raw in text.split('\n') {
        let line = raw.trim();

        match classify(line) {
            LineClass::Blank => {
                if !buffer.is_empty() {
                    out.push(std::mem::take(&mut buffer));
                }
                out.push(String::new());
            }
            LineClass::Bullet => {
                if !buffer.is_empty() {
                    out.push(std::mem::take(&mut buffer));
                }
                out.push(line.to_string());
            }
            LineClass::PageCounter | LineClass::Prose => {
                if buffer.is_empty() {
                    buffer.push_str(line);
                } else if ends_at_sentence(&buffer) {
                    out.push(std::mem::take(&mut buffer));
                    buffer.push_str(line);
                } else if buffer.ends_with('-') {
                    buffer.pop();
                    buffer.push_str(line);
                    merges += 1;
                } else {
                    buffer.push(' ');
                    buffer.push_str(line);
                    merges += 1;
                }
            }
        }
    }

    if !buffer.is_empty() {
        out.push(buffer);
    }

    if merges > 0 {
        log::debug!("Merged {} wrapped line(s)", merges);
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(reflow(""), "");
    }

    #[test]
    fn test_space_join() {
        assert_eq!(reflow("The cat sat\non the mat."), "The cat sat on the mat.");
    }

    #[test]
    fn test_hyphen_join() {
        assert_eq!(reflow("exam-\nple text."), "example text.");
    }

    #[test]
    fn test_sentence_boundary_not_merged() {
        assert_eq!(
            reflow("First sentence.\nSecond sentence."),
            "First sentence.\nSecond sentence."
        );
    }

    #[test]
    fn test_all_terminal_characters_flush() {
        for terminal in [".", "!", "?", ":"] {
            let input = format!("Heading{}\nNext line", terminal);
            let expected = format!("Heading{}\nNext line", terminal);
            assert_eq!(reflow(&input), expected);
        }
    }

    #[test]
    fn test_bullet_never_merged() {
        let input = "Some intro text\n- Item one\n- Item two";
        assert_eq!(reflow(input), "Some intro text\n- Item one\n- Item two");
    }

    #[test]
    fn test_bullet_flushes_pending_buffer() {
        // The buffer lacks terminal punctuation but may not swallow the
        // bullet line.
        let input = "A dangling fragment\n• Bullet point";
        assert_eq!(reflow(input), "A dangling fragment\n• Bullet point");
    }

    #[test]
    fn test_numbered_items_kept_separate() {
        let input = "1. First step\n2. Second step\na) sub case";
        assert_eq!(reflow(input), input);
    }

    #[test]
    fn test_blank_line_flushes() {
        let input = "A fragment without end\n\nNew paragraph starts.";
        assert_eq!(reflow(input), "A fragment without end\n\nNew paragraph starts.");
    }

    #[test]
    fn test_multi_line_wrap() {
        let input = "Photosynthesis converts light\nenergy into chemical\nenergy in plants.";
        assert_eq!(
            reflow(input),
            "Photosynthesis converts light energy into chemical energy in plants."
        );
    }

    #[test]
    fn test_trailing_fragment_flushed_at_end() {
        assert_eq!(reflow("A trailing fragment"), "A trailing fragment");
    }

    #[test]
    fn test_lines_trimmed_before_joining() {
        assert_eq!(reflow("  left side\n  right side.  "), "left side right side.");
    }
}

//! Repeated header/footer removal, the second pipeline stage.
//!
//! Slide decks and lecture PDFs carry the same short lines on every page:
//! course titles, author names, slide counters. Any short line that repeats
//! often enough is presumed to be boilerplate and every occurrence is
//! dropped, along with structurally recognizable page/slide counters.

use crate::classify::{classify, LineClass};
use std::collections::{HashMap, HashSet};

/// Strips repeated boilerplate lines and page/slide counters.
///
/// The detection heuristic has a known false-positive mode: a genuinely
/// repeated short phrase that is not boilerplate (e.g. a recurring key term
/// on its own line) is deleted too. That tradeoff is accepted for cleanup
/// quality.
#[derive(Debug, Clone)]
pub struct BoilerplateStripper {
    /// Number of occurrences at which a short line is banned.
    repeat_threshold: usize,

    /// Shortest trimmed line length considered for banning.
    min_line_len: usize,

    /// Longest trimmed line length considered for banning.
    max_line_len: usize,
}

impl Default for BoilerplateStripper {
    fn default() -> Self {
        Self {
            repeat_threshold: 3,
            min_line_len: 3,
            max_line_len: 80,
        }
    }
}

impl BoilerplateStripper {
    /// Create a stripper with the default threshold (3) and window ([3, 80]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the repetition threshold.
    pub fn with_repeat_threshold(mut self, threshold: usize) -> Self {
        self.repeat_threshold = threshold.max(2); // Below 2 every duplicate line would be banned
        self
    }

    /// Set the trimmed-length window for lines considered in the frequency
    /// count.
    pub fn with_length_window(mut self, min: usize, max: usize) -> Self {
        self.min_line_len = min.max(1);
        self.max_line_len = max.max(self.min_line_len);
        self
    }

    /// Remove boilerplate lines from sanitized text.
    ///
    /// Every line is trimmed. Lines whose trimmed length falls inside the
    /// length window are counted; any line reaching the repetition threshold
    /// is deleted everywhere it occurs, including its first occurrence.
    /// Page/slide counters are deleted regardless of frequency. Blank lines
    /// always survive.
    pub fn strip(&self, text: &str) -> String {
        let lines: Vec<&str> = text.split('\n').map(str::trim).collect();

        let mut freq: HashMap<&str, usize> = HashMap::new();
        for &line in &lines {
            let len = line.chars().count();
            if len >= self.min_line_len && len <= self.max_line_len {
                *freq.entry(line).or_insert(0) += 1;
            }
        }

        let banned: HashSet<&str> = freq
            .iter()
            .filter(|&(_, &count)| count >= self.repeat_threshold)
            .map(|(&line, _)| line)
            .collect();

        if !banned.is_empty() {
            log::debug!("Banning {} repeated boilerplate line(s)", banned.len());
        }

        let mut out: Vec<&str> = Vec::with_capacity(lines.len());
        for line in lines {
            if line.is_empty() {
                out.push("");
                continue;
            }
            if banned.contains(line) {
                continue;
            }
            if classify(line) == LineClass::PageCounter {
                continue;
            }
            out.push(line);
        }

        out.join("\n")
    }
}

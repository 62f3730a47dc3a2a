//! Text normalization pipeline for extracted lecture documents.
//!
//! Composes the four stages — sanitize, strip boilerplate, reflow, compact —
//! into a single pure transform that turns raw extractor output into clean,
//! de-duplicated, sentence-coherent text.

use crate::boilerplate::BoilerplateStripper;
use crate::compact::compact;
use crate::reflow::reflow;
use crate::sanitize::sanitize;

/// The full normalization pipeline with configurable stripper heuristics.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    stripper: BoilerplateStripper,
}

impl TextNormalizer {
    /// Create a normalizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the boilerplate repetition threshold.
    pub fn with_repeat_threshold(mut self, threshold: usize) -> Self {
        self.stripper = self.stripper.with_repeat_threshold(threshold);
        self
    }

    /// Set the trimmed-length window for boilerplate detection.
    pub fn with_length_window(mut self, min: usize, max: usize) -> Self {
        self.stripper = self.stripper.with_length_window(min, max);
        self
    }

    /// Run the full pipeline: sanitize, strip boilerplate, reflow, compact.
    ///
    /// A pure function of the input text; total over any string, and an
    /// empty input yields an empty output.
    pub fn normalize(&self, text: &str) -> String {
        let sanitized = sanitize(text);
        let stripped = self.stripper.strip(&sanitized);
        let reflowed = reflow(&stripped);
        compact(&reflowed)
    }
}

/// Normalize raw extracted text with default settings.
///
/// This is the single entry point for callers that do not need to tune the
/// stripper heuristics.
pub fn normalize(text: &str) -> String {
    TextNormalizer::new().normalize(text)
}

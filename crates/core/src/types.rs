//! Domain types for representing extracted document content.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// An extracted document: the raw per-page or per-slide text an external
/// extractor produced, before normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Original filename (without path).
    pub filename: String,

    /// Detected format of the source file.
    pub format: SourceFormat,

    /// Pages or slides in reading order.
    pub units: Vec<ExtractedUnit>,
}

impl Document {
    /// Create a new document with the given filename and format.
    pub fn new(filename: impl Into<String>, format: SourceFormat) -> Self {
        Self {
            filename: filename.into(),
            format,
            units: Vec::new(),
        }
    }

    /// Add a page or slide to the document.
    pub fn add_unit(&mut self, unit: ExtractedUnit) {
        self.units.push(unit);
    }

    /// Load a document from the JSON dump an external extractor writes.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| Error::MalformedDump(e.to_string()))
    }

    /// Assemble the extracted units into one string for normalization.
    ///
    /// Slide decks render each non-empty slide as a `--- Slide N ---` header
    /// line followed by its text blocks; PDF pages carry their blocks
    /// directly. Units are separated by a blank line, and units with no text
    /// are skipped.
    pub fn assemble(&self) -> String {
        let parts: Vec<String> = self
            .units
            .iter()
            .filter_map(|unit| {
                let blocks = unit.non_empty_blocks();
                if blocks.is_empty() {
                    return None;
                }
                Some(match self.format {
                    SourceFormat::Slides => {
                        format!("--- Slide {} ---\n{}", unit.number, blocks.join("\n"))
                    }
                    SourceFormat::Pdf => blocks.join("\n"),
                })
            })
            .collect();

        parts.join("\n\n")
    }
}

/// The format of the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    /// A paginated document (PDF).
    Pdf,
    /// A slide deck (PPT/PPTX).
    Slides,
}

impl SourceFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "ppt" | "pptx" => Some(Self::Slides),
            _ => None,
        }
    }
}

/// A single extracted page or slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedUnit {
    /// 1-based page or slide number.
    pub number: usize,

    /// Text blocks extracted from this unit, in reading order.
    pub blocks: Vec<String>,
}

impl ExtractedUnit {
    /// Create a new unit with the given number.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            blocks: Vec::new(),
        }
    }

    /// Add a text block to this unit.
    pub fn add_block(&mut self, text: impl Into<String>) {
        self.blocks.push(text.into());
    }

    /// Get text blocks that contain something besides whitespace.
    pub fn non_empty_blocks(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .map(|b| b.as_str())
            .filter(|b| !b.trim().is_empty())
            .collect()
    }
}

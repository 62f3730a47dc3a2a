//! Core domain types, line classification, and the text normalization
//! pipeline for extracted lecture documents.

pub mod boilerplate;
pub mod classify;
pub mod compact;
pub mod error;
pub mod normalize;
pub mod reflow;
pub mod sanitize;
pub mod types;

pub use boilerplate::BoilerplateStripper;
pub use classify::{classify, LineClass};
pub use compact::compact;
pub use error::{Error, Result};
pub use normalize::{normalize, TextNormalizer};
pub use reflow::reflow;
pub use sanitize::sanitize;
pub use types::{Document, ExtractedUnit, SourceFormat};

//! Error types for loading extracted documents.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading an extractor dump.
///
/// The normalization pipeline itself is total over any string input and has
/// no error outcomes; only document loading can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read the input.
    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),

    /// The extractor dump could not be decoded.
    #[error("Malformed extraction dump: {0}")]
    MalformedDump(String),
}

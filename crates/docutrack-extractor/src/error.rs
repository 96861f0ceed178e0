//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
///
/// Only document decoding can fail. Field extraction over text never does;
/// a missing field is reported as an absent value, not as an error.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Bytes are not a well-formed document container of a supported format
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// Reading the document stream or file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document exceeds the configured size limit
    #[error("Document too large: {0} bytes (max: {1})")]
    DocumentTooLarge(usize, usize),

    /// Document decoding did not finish in time
    #[error("Extraction timeout")]
    Timeout,

    /// The blocking decode task panicked or was cancelled
    #[error("Decode task failed: {0}")]
    Task(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<docx_rs::ReaderError> for ExtractorError {
    fn from(e: docx_rs::ReaderError) -> Self {
        ExtractorError::UnsupportedFormat(e.to_string())
    }
}

//! Error types for irsaliye-extract.
//!
//! This module defines the error types returned by decoding, extraction,
//! archive expansion, and export operations.

/// Error type for extraction and export operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No encoding in the trial list could decode the input bytes.
    #[error("could not decode input bytes: {0}")]
    Decode(String),

    /// A container bundle could not be opened or read.
    #[error("archive could not be read: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Processing of a single document failed; the batch continues past it.
    #[error("document processing failed: {0}")]
    Document(String),

    /// Writing tabular output failed.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// Writing structured-document output failed.
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for extraction and export operations.
pub type Result<T> = std::result::Result<T, Error>;

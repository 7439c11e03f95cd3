//! Error types for the docscore-core library.

use thiserror::Error;

/// Main error type for the docscore library.
#[derive(Error, Debug)]
pub enum DocscoreError {
    /// Input document error.
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// Encoder error from the embedding layer.
    #[error("encoder error: {0}")]
    Encoder(#[from] docscore_embed::EncoderError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to the OCR input contract.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input is not a well-formed OCR document mapping.
    #[error("malformed OCR document: {0}")]
    Malformed(String),

    /// The input file could not be parsed as JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the docscore library.
pub type Result<T> = std::result::Result<T, DocscoreError>;

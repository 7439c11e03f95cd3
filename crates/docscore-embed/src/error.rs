//! Error types for the encoder layer.

use thiserror::Error;

/// Errors that can occur while loading or running a text encoder.
#[derive(Error, Debug)]
pub enum EncoderError {
    /// Failed to load the ONNX model.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Failed to load or configure the tokenizer.
    #[error("failed to load tokenizer: {0}")]
    TokenizerLoad(String),

    /// Tokenization of the input text failed.
    #[error("tokenization failed: {0}")]
    Tokenization(String),

    /// Inference execution failed.
    #[error("encoding failed: {0}")]
    EncodingFailed(String),

    /// Output tensor extraction failed.
    #[error("failed to extract output: {0}")]
    OutputExtraction(String),

    /// I/O error when loading model files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

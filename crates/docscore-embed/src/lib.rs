//! Text-embedding encoder abstraction for docscore.
//!
//! This crate provides a unified interface for turning text into fixed-size
//! embedding vectors, used by the semantic-similarity scorer:
//! - `TextEncoder` trait for pluggable encoder implementations
//! - `TractEncoder` running a sentence-embedding ONNX model locally via tract
//! - `cosine_similarity` over the produced vectors

mod error;
mod tract;

pub use error::EncoderError;
pub use tract::TractEncoder;

/// Result type for encoder operations.
pub type Result<T> = std::result::Result<T, EncoderError>;

/// Trait for text-embedding encoders.
///
/// Implementations must be safe to call from multiple threads at once; the
/// scoring engine shares a single encoder instance across concurrent
/// document validations.
pub trait TextEncoder: Send + Sync {
    /// Encode a text into a fixed-size embedding vector.
    fn encode(&self, text: &str) -> Result<Vec<f32>>;

    /// Dimensionality of the vectors this encoder produces.
    fn dimension(&self) -> usize;
}

/// Cosine similarity between two embedding vectors.
///
/// Returns 0.0 when either vector has zero norm, so that empty or degenerate
/// embeddings read as "no similarity" rather than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    let denom = norm_a * norm_b;
    if denom == 0.0 {
        return 0.0;
    }
    dot / denom
}

//! Core library for the Document Scoring System (DSS).
//!
//! This crate provides:
//! - Text normalization and OCR-confidence aggregation
//! - Structured field extraction (dates, numeric mentions, signatures, keywords)
//! - Document-type rule registry and optional semantic similarity
//! - The weighted DSS score/flag computation and result assembly

pub mod error;
pub mod extract;
pub mod locate;
pub mod models;
pub mod registry;
pub mod score;
pub mod semantic;
pub mod text;
pub mod validator;

pub use error::{DocscoreError, Result};
pub use models::config::{DssConfig, SemanticConfig, TypeProfile, TypeRule};
pub use models::document::{OcrDocument, Page};
pub use models::result::{
    DocStatus, DocumentFields, ExtractedField, FieldValue, NumericMention, TextSnippet,
    ValidationResult,
};
pub use validator::{DocumentValidator, default_validator};

/// Re-export encoder types for callers that supply their own encoder.
pub use docscore_embed::{TextEncoder, TractEncoder, cosine_similarity};

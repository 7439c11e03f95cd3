//! Stateless field extractors over normalized document text.

pub mod dates;
pub mod keywords;
pub mod numbers;
pub mod patterns;
pub mod signature;

pub use dates::DateExtractor;
pub use keywords::keyword_coverage;
pub use numbers::NumberExtractor;
pub use signature::has_signature;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// An extracted value with its source position.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Start offset in the scanned text.
    pub start: usize,
    /// End offset in the scanned text.
    pub end: usize,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, start: usize, end: usize) -> Self {
        Self { value, start, end }
    }
}

//! Numeric mention extraction.
//!
//! Informational evidence only: no flag is raised regardless of how many
//! (or how few) numbers appear.

use super::patterns::NUMBER;
use super::{ExtractionMatch, FieldExtractor};

/// Maximum number of mentions reported per document.
pub const MAX_MENTIONS: usize = 5;

/// Number-like token extractor.
pub struct NumberExtractor;

impl NumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Returns up to the first [`MAX_MENTIONS`] matches, in document order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        NUMBER
            .find_iter(text)
            .take(MAX_MENTIONS)
            .map(|m| ExtractionMatch::new(m.as_str().to_string(), m.start(), m.end()))
            .collect()
    }
}

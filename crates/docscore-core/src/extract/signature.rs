//! Signature presence detection.

use super::patterns::SIGNATURE_KEYWORDS;

/// Whether any signature-related wording occurs in the text,
/// case-insensitively.
pub fn has_signature(text: &str) -> bool {
    let text_lc = text.to_lowercase();
    SIGNATURE_KEYWORDS.iter().any(|kw| text_lc.contains(kw))
}

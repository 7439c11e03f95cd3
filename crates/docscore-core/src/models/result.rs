//! Output models: extracted fields, snippets, and the validation result.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Value of an extracted field.
///
/// The explicit `Null` variant distinguishes "nothing was extracted" or
/// "capability unavailable" from a legitimate zero or empty value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Null
    }
}

/// A single extracted signal with its confidence and location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedField {
    /// Extracted value, or `Null` when nothing was found.
    pub value: FieldValue,

    /// Extraction confidence (0.0 - 1.0).
    pub confidence: f64,

    /// Page the value was localized to, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Bounding-box slot, reserved for OCR engines that supply geometry.
    /// Always `None` here.
    #[serde(default)]
    pub bbox: Option<serde_json::Value>,
}

impl ExtractedField {
    /// A field with a value but no page localization.
    pub fn new(value: FieldValue, confidence: f64) -> Self {
        Self { value, confidence, page: None, bbox: None }
    }

    /// An absent field: null value, zero confidence.
    pub fn absent() -> Self {
        Self::new(FieldValue::Null, 0.0)
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// A number-like token found in the document text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericMention {
    /// The matched token, verbatim.
    pub value: String,
    /// Start offset in the normalized full text.
    pub start: usize,
    /// End offset in the normalized full text.
    pub end: usize,
}

/// Evidence trail entry: where an extracted value occurs in the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSnippet {
    /// Page number the snippet was found on.
    pub page: u32,
    /// Start offset within that page's text (or the full text, for the
    /// first-page fallback).
    pub start: usize,
    /// End offset.
    pub end: usize,
    /// The matched text.
    pub text: String,
}

/// Validation status of a scored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocStatus {
    /// Document parsed with acceptable OCR confidence.
    Parsed,
    /// OCR confidence below threshold, or too little text to judge.
    LowConfidence,
    /// Internal error; only `doc_id`, `dss_flags`, and `error` are meaningful.
    Failed,
}

/// All extracted fields for one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentFields {
    /// First date found in the text, by pattern priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_date: Option<ExtractedField>,

    /// Up to the first five number-like tokens, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub numeric_mentions: Vec<NumericMention>,

    /// Fraction of the type's required keywords present in the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword_coverage: Option<ExtractedField>,

    /// Whether signature-related wording was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_signature: Option<ExtractedField>,

    /// Cosine similarity against the type's reference template, when the
    /// semantic capability is available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_similarity: Option<ExtractedField>,

    /// Type-specific fields attached by the rule registry
    /// (e.g. `issuing_authority`).
    #[serde(flatten)]
    pub extra: BTreeMap<String, ExtractedField>,
}

/// The engine's single output record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Document identifier, echoed from the input.
    pub doc_id: String,

    /// Validation status.
    pub status: DocStatus,

    /// Extracted fields. Empty on failure.
    pub fields: DocumentFields,

    /// Evidence snippets, in extraction order.
    pub text_snippets: Vec<TextSnippet>,

    /// Document-level mean OCR confidence, when any page reported one.
    pub ocr_confidence: Option<f64>,

    /// Explanatory flags, deduplicated and lexicographically sorted.
    pub dss_flags: BTreeSet<String>,

    /// DSS score in [0, 100]. Absent only when `status` is `Failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dss_score: Option<u8>,

    /// Error message. Present only when `status` is `Failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    /// The degraded record produced when scoring fails internally.
    pub fn failed(doc_id: impl Into<String>, error: impl Into<String>) -> Self {
        let mut dss_flags = BTreeSet::new();
        dss_flags.insert("exception".to_string());

        Self {
            doc_id: doc_id.into(),
            status: DocStatus::Failed,
            fields: DocumentFields::default(),
            text_snippets: Vec::new(),
            ocr_confidence: None,
            dss_flags,
            dss_score: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_failed_record_shape() {
        let result = ValidationResult::failed("d9", "pages is not a sequence");

        assert_eq!(result.status, DocStatus::Failed);
        assert_eq!(result.dss_score, None);
        assert_eq!(
            result.dss_flags.iter().cloned().collect::<Vec<_>>(),
            vec!["exception".to_string()]
        );
        assert_eq!(result.error.as_deref(), Some("pages is not a sequence"));
        assert!(result.text_snippets.is_empty());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&DocStatus::LowConfidence).unwrap(), r#""low_confidence""#);
        assert_eq!(serde_json::to_string(&DocStatus::Parsed).unwrap(), r#""parsed""#);
    }

    #[test]
    fn test_field_value_untagged() {
        let field = ExtractedField::new(FieldValue::Text("2026-01-19".to_string()), 0.9);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["value"], "2026-01-19");
        assert_eq!(json["bbox"], serde_json::Value::Null);

        let absent = ExtractedField::absent();
        let json = serde_json::to_value(&absent).unwrap();
        assert_eq!(json["value"], serde_json::Value::Null);
    }

    #[test]
    fn test_flags_sorted_and_deduplicated() {
        let mut flags = BTreeSet::new();
        flags.insert("missing_signature".to_string());
        flags.insert("low_keyword_coverage".to_string());
        flags.insert("missing_signature".to_string());

        let ordered: Vec<_> = flags.iter().cloned().collect();
        assert_eq!(ordered, vec!["low_keyword_coverage", "missing_signature"]);
    }

    #[test]
    fn test_extra_fields_flattened() {
        let mut fields = DocumentFields::default();
        fields.extra.insert(
            "issuing_authority".to_string(),
            ExtractedField::new(FieldValue::Text("present".to_string()), 0.85),
        );

        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["issuing_authority"]["value"], "present");
    }
}

//! Input models for the OCR contract.
//!
//! These types mirror the structured output of the upstream OCR collaborator
//! and are treated as read-only by the scoring engine.

use serde::{Deserialize, Serialize};

/// One page of OCR output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number.
    #[serde(default = "default_page_no")]
    pub page_no: u32,

    /// Extracted page text.
    #[serde(default)]
    pub text: String,

    /// Mean OCR confidence for the page (0.0 - 1.0), when the OCR engine
    /// reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr_conf_mean: Option<f64>,
}

fn default_page_no() -> u32 {
    1
}

/// A complete OCR'd document, as received from the OCR collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrDocument {
    /// Document identifier.
    #[serde(default = "default_doc_id", alias = "id")]
    pub doc_id: String,

    /// Document type key (free-form; compared lower-cased).
    #[serde(default = "default_doc_type")]
    pub doc_type: String,

    /// Ordered page sequence. Missing in the input means "no pages".
    #[serde(default)]
    pub pages: Vec<Page>,

    /// Pre-joined document text. Derived from pages when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
}

fn default_doc_id() -> String {
    "unknown".to_string()
}

fn default_doc_type() -> String {
    "unknown".to_string()
}

impl OcrDocument {
    /// Lower-cased document type key used for registry lookups.
    pub fn doc_type_key(&self) -> String {
        self.doc_type.trim().to_lowercase()
    }

    /// The raw full text: the supplied `full_text` when non-empty, otherwise
    /// all page texts joined with single spaces.
    pub fn raw_full_text(&self) -> String {
        match &self.full_text {
            Some(text) if !text.is_empty() => text.clone(),
            _ => self
                .pages
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_text_derived_from_pages() {
        let doc = OcrDocument {
            doc_id: "d1".to_string(),
            doc_type: "affidavit".to_string(),
            pages: vec![
                Page { page_no: 1, text: "first page".to_string(), ocr_conf_mean: Some(0.9) },
                Page { page_no: 2, text: "second page".to_string(), ocr_conf_mean: None },
            ],
            full_text: None,
        };

        assert_eq!(doc.raw_full_text(), "first page second page");
    }

    #[test]
    fn test_full_text_preferred_when_present() {
        let doc = OcrDocument {
            doc_id: "d1".to_string(),
            doc_type: "affidavit".to_string(),
            pages: vec![Page { page_no: 1, text: "page".to_string(), ocr_conf_mean: None }],
            full_text: Some("joined upstream".to_string()),
        };

        assert_eq!(doc.raw_full_text(), "joined upstream");
    }

    #[test]
    fn test_lenient_deserialization() {
        let doc: OcrDocument = serde_json::from_str(r#"{"doc_type": "Fire_Safety_Certificate"}"#)
            .expect("minimal document should deserialize");

        assert_eq!(doc.doc_id, "unknown");
        assert_eq!(doc.doc_type_key(), "fire_safety_certificate");
        assert!(doc.pages.is_empty());
        assert_eq!(doc.raw_full_text(), "");
    }

    #[test]
    fn test_id_alias() {
        let doc: OcrDocument = serde_json::from_str(r#"{"id": "alt-42"}"#).unwrap();
        assert_eq!(doc.doc_id, "alt-42");
    }
}

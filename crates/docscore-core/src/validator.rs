//! Document validator: pipeline orchestration and result assembly.
//!
//! This is the engine's outer boundary. `validate` and `validate_value`
//! never return an error to the caller; anything that goes wrong inside the
//! pipeline is converted into a `failed` result record.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{InputError, Result};
use crate::extract::{
    DateExtractor, FieldExtractor, NumberExtractor, has_signature, keyword_coverage,
};
use crate::locate::locate_snippet;
use crate::models::config::DssConfig;
use crate::models::document::OcrDocument;
use crate::models::result::{
    DocStatus, DocumentFields, ExtractedField, FieldValue, NumericMention, TextSnippet,
    ValidationResult,
};
use crate::registry::RuleRegistry;
use crate::score::{ScoreInputs, compute_dss_score};
use crate::semantic::{EncoderHandle, SemanticScorer};
use crate::text::{mean_ocr_confidence, normalize_text, word_count};

/// The single-document scoring engine.
pub struct DocumentValidator {
    config: DssConfig,
    registry: RuleRegistry,
    semantic: SemanticScorer,
}

impl DocumentValidator {
    /// Create a validator from configuration. The embedding encoder is not
    /// loaded here; it initializes lazily on the first semantic scoring
    /// call.
    pub fn new(config: DssConfig) -> Self {
        let registry = RuleRegistry::new(&config.doc_types);
        let semantic = SemanticScorer::new(config.semantic.clone());
        Self { config, registry, semantic }
    }

    /// Create a validator with an externally supplied encoder.
    pub fn with_encoder(config: DssConfig, encoder: EncoderHandle) -> Self {
        let registry = RuleRegistry::new(&config.doc_types);
        let semantic = SemanticScorer::with_encoder(config.semantic.clone(), encoder);
        Self { config, registry, semantic }
    }

    /// The effective configuration.
    pub fn config(&self) -> &DssConfig {
        &self.config
    }

    /// Score a document. Never fails outward: internal errors yield a
    /// `failed` result instead.
    pub fn validate(&self, doc: &OcrDocument) -> ValidationResult {
        match self.validate_inner(doc) {
            Ok(result) => result,
            Err(e) => ValidationResult::failed(doc.doc_id.clone(), e.to_string()),
        }
    }

    /// Score a raw JSON value from the OCR collaborator. Malformed input
    /// (e.g. `pages` not a sequence) yields a `failed` result carrying
    /// whatever `doc_id` can be recovered.
    pub fn validate_value(&self, raw: &serde_json::Value) -> ValidationResult {
        match serde_json::from_value::<OcrDocument>(raw.clone()) {
            Ok(doc) => self.validate(&doc),
            Err(e) => {
                let doc_id = raw
                    .get("doc_id")
                    .or_else(|| raw.get("id"))
                    .and_then(|v| v.as_str())
                    .unwrap_or("unknown");
                ValidationResult::failed(doc_id, InputError::Malformed(e.to_string()).to_string())
            }
        }
    }

    /// Score an OCR JSON file. I/O and JSON syntax errors are the caller's
    /// problem and are returned as errors; a structurally bad document
    /// still becomes a `failed` result.
    pub fn validate_path(&self, path: &Path) -> Result<ValidationResult> {
        let content = std::fs::read_to_string(path)?;
        let raw: serde_json::Value =
            serde_json::from_str(&content).map_err(InputError::Json)?;
        Ok(self.validate_value(&raw))
    }

    fn validate_inner(&self, doc: &OcrDocument) -> Result<ValidationResult> {
        let doc_type = doc.doc_type_key();
        let full_text = normalize_text(&doc.raw_full_text());
        debug!("Validating '{}' as type '{}'", doc.doc_id, doc_type);

        let ocr_confidence = mean_ocr_confidence(&doc.pages);

        let mut status = DocStatus::Parsed;
        if let Some(conf) = ocr_confidence {
            if conf < self.config.ocr_conf_low_threshold {
                status = DocStatus::LowConfidence;
            }
        } else if word_count(&full_text) < self.config.min_word_count {
            // Very short OCR output with no confidence signal is itself
            // evidence of a bad scan.
            status = DocStatus::LowConfidence;
        }

        let mut fields = DocumentFields::default();
        let mut text_snippets: Vec<TextSnippet> = Vec::new();
        let mut dss_flags: BTreeSet<String> = BTreeSet::new();

        // Document date: first match in pattern priority order, localized
        // back to its source page.
        let date_extractor = DateExtractor::new();
        let missing_date = match date_extractor.extract(&full_text) {
            Some(m) => {
                let snippet = locate_snippet(&doc.pages, &m.value, m.start, m.end);
                let confidence = match ocr_confidence {
                    Some(conf) if conf <= 0.8 => 0.75,
                    _ => 0.9,
                };
                fields.document_date = Some(
                    ExtractedField::new(FieldValue::Text(m.value), confidence)
                        .with_page(snippet.page),
                );
                text_snippets.push(snippet);
                false
            }
            None => {
                fields.document_date = Some(ExtractedField::absent());
                dss_flags.insert("missing_date".to_string());
                true
            }
        };

        // Numeric mentions: informational, never flagged.
        let number_extractor = NumberExtractor::new();
        fields.numeric_mentions = number_extractor
            .extract_all(&full_text)
            .into_iter()
            .map(|m| NumericMention { value: m.value, start: m.start, end: m.end })
            .collect();

        // Keyword coverage against the type's required vocabulary.
        let coverage = keyword_coverage(&full_text, self.registry.required_keywords(&doc_type));
        fields.keyword_coverage = Some(ExtractedField::new(FieldValue::Number(coverage), 0.9));
        if coverage < self.config.keyword_coverage_threshold {
            dss_flags.insert("low_keyword_coverage".to_string());
        }

        // Signature presence. Confidence never drops to zero: absence of
        // the wording is still an extraction result, not certainty.
        let signature = has_signature(&full_text);
        fields.has_signature = Some(ExtractedField::new(
            FieldValue::Bool(signature),
            if signature { 0.95 } else { 0.1 },
        ));
        if !signature {
            dss_flags.insert("missing_signature".to_string());
        }

        // Optional semantic similarity; unavailable reads as null/0.0.
        fields.semantic_similarity = Some(match self.semantic.similarity(&full_text, &doc_type) {
            Some(sim) => ExtractedField::new(FieldValue::Number(sim), 0.9),
            None => ExtractedField::absent(),
        });

        // Type-specific rules from the registry.
        for outcome in self.registry.run_rules(&doc_type, &full_text) {
            fields.extra.insert(outcome.field, outcome.value);
            if let Some(flag) = outcome.flag {
                dss_flags.insert(flag);
            }
        }

        let dss_score = compute_dss_score(&ScoreInputs {
            ocr_confidence,
            keyword_coverage: coverage,
            has_signature: signature,
            missing_date,
        });
        debug!("'{}' scored {} with {} flag(s)", doc.doc_id, dss_score, dss_flags.len());

        Ok(ValidationResult {
            doc_id: doc.doc_id.clone(),
            status,
            fields,
            text_snippets,
            ocr_confidence,
            dss_flags,
            dss_score: Some(dss_score),
            error: None,
        })
    }
}

static DEFAULT_VALIDATOR: OnceLock<DocumentValidator> = OnceLock::new();

/// Process-wide validator with default configuration, created on first use.
pub fn default_validator() -> &'static DocumentValidator {
    DEFAULT_VALIDATOR.get_or_init(|| DocumentValidator::new(DssConfig::default()))
}

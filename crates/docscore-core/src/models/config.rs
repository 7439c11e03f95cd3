//! Configuration for the scoring engine.
//!
//! Everything behavioral lives here: thresholds, the semantic-similarity
//! setup, and the per-document-type registry table. Adding a new document
//! type means adding a `doc_types` entry, not code.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration for the DSS engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DssConfig {
    /// Mean OCR confidence below which a document is `low_confidence`.
    pub ocr_conf_low_threshold: f64,

    /// Keyword coverage below which `low_keyword_coverage` is raised.
    pub keyword_coverage_threshold: f64,

    /// Minimum whitespace-delimited token count; shorter text with no OCR
    /// confidence signal is treated as a bad scan.
    pub min_word_count: usize,

    /// Semantic similarity configuration.
    pub semantic: SemanticConfig,

    /// Per-document-type registry: required keywords plus extra rules,
    /// keyed by lower-cased type.
    pub doc_types: BTreeMap<String, TypeProfile>,
}

/// Configuration for the optional semantic-similarity capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticConfig {
    /// Whether to attempt semantic similarity at all.
    pub enabled: bool,

    /// Embedding model identifier, recorded for provenance and used as the
    /// default model subdirectory name.
    pub model_name: String,

    /// Directory containing `model.onnx` and `tokenizer.json`.
    pub model_dir: PathBuf,

    /// Maximum token sequence length fed to the encoder.
    pub max_seq_len: usize,

    /// Directory of per-type reference templates (`<doc_type>.txt`).
    pub templates_dir: PathBuf,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model_name: "sentence-transformers/all-MiniLM-L6-v2".to_string(),
            model_dir: PathBuf::from("models/all-MiniLM-L6-v2"),
            max_seq_len: 256,
            templates_dir: PathBuf::from("templates"),
        }
    }
}

/// Registry entry for one document type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeProfile {
    /// Required vocabulary for keyword coverage (matched case-insensitively
    /// as substrings).
    pub required_keywords: Vec<String>,

    /// Additional type-specific rules.
    pub rules: Vec<TypeRule>,
}

/// A type-specific rule, executed by the rule registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRule {
    /// Attach a field whose presence is decided by keyword search.
    KeywordPresence {
        /// Name of the field to attach (e.g. `issuing_authority`).
        field: String,
        /// Keywords to look for, case-insensitive substrings.
        keywords: Vec<String>,
        /// Field value when any keyword is found.
        present_value: String,
        /// Field confidence when found.
        confidence: f64,
        /// Flag raised when no keyword is found.
        missing_flag: String,
    },
}

impl Default for DssConfig {
    fn default() -> Self {
        Self {
            ocr_conf_low_threshold: 0.6,
            keyword_coverage_threshold: 0.3,
            min_word_count: 20,
            semantic: SemanticConfig::default(),
            doc_types: default_doc_types(),
        }
    }
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Built-in registry table covering the baseline document types.
fn default_doc_types() -> BTreeMap<String, TypeProfile> {
    let mut types = BTreeMap::new();

    types.insert(
        "financial_statement".to_string(),
        TypeProfile {
            required_keywords: keywords(&["balance sheet", "income", "profit", "auditor", "revenue"]),
            rules: Vec::new(),
        },
    );

    types.insert(
        "faculty_list".to_string(),
        TypeProfile {
            required_keywords: keywords(&["name", "designation", "qualification", "signature"]),
            rules: Vec::new(),
        },
    );

    types.insert(
        "fire_safety_certificate".to_string(),
        TypeProfile {
            required_keywords: keywords(&["fire", "safety", "certificate", "valid", "authority", "issued"]),
            rules: vec![TypeRule::KeywordPresence {
                field: "issuing_authority".to_string(),
                keywords: keywords(&["fire department", "municipal", "authority", "fire brigade"]),
                present_value: "present".to_string(),
                confidence: 0.85,
                missing_flag: "no_issuing_authority_found".to_string(),
            }],
        },
    );

    types.insert(
        "affidavit".to_string(),
        TypeProfile {
            required_keywords: keywords(&["sworn", "affidavit", "deponent", "signed", "notary"]),
            rules: Vec::new(),
        },
    );

    types
}

impl DssConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

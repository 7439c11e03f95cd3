//! Semantic similarity scoring (optional capability).
//!
//! Compares document text against a per-type plain-text reference template
//! via a text-embedding encoder and cosine similarity. The encoder is
//! expensive to initialize, so it is created lazily and at most once; every
//! failure mode (encoder load, missing template, encoding error) degrades to
//! "unavailable" instead of failing the pipeline.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use tracing::{debug, warn};

use docscore_embed::{TextEncoder, TractEncoder, cosine_similarity};

use crate::models::config::SemanticConfig;

/// Shared handle to an encoder implementation.
pub type EncoderHandle = Arc<dyn TextEncoder>;

/// Semantic similarity scorer with a lazily-initialized encoder.
pub struct SemanticScorer {
    config: SemanticConfig,
    encoder: OnceLock<Option<EncoderHandle>>,
}

impl SemanticScorer {
    /// Create a scorer that lazily loads the configured tract encoder on
    /// first use.
    pub fn new(config: SemanticConfig) -> Self {
        Self { config, encoder: OnceLock::new() }
    }

    /// Create a scorer around an already-built encoder. Used by callers
    /// that manage the encoder themselves (and by tests).
    pub fn with_encoder(config: SemanticConfig, encoder: EncoderHandle) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(Some(encoder));
        Self { config, encoder: cell }
    }

    /// The encoder handle, initializing it on first call. `OnceLock` makes
    /// the initialization race-free under concurrent first use; a load
    /// failure is remembered so it is not retried per document.
    fn encoder(&self) -> Option<&EncoderHandle> {
        self.encoder
            .get_or_init(|| {
                if !self.config.enabled {
                    debug!("Semantic similarity disabled by configuration");
                    return None;
                }

                let model_path = self.config.model_dir.join("model.onnx");
                let tokenizer_path = self.config.model_dir.join("tokenizer.json");
                debug!(
                    "Loading embedding model '{}' from {}",
                    self.config.model_name,
                    self.config.model_dir.display()
                );

                match TractEncoder::from_files(
                    &model_path,
                    &tokenizer_path,
                    self.config.max_seq_len,
                ) {
                    Ok(encoder) => Some(Arc::new(encoder) as EncoderHandle),
                    Err(e) => {
                        warn!("Failed to load embedding encoder; semantic features disabled: {}", e);
                        None
                    }
                }
            })
            .as_ref()
    }

    fn template_path(&self, doc_type: &str) -> PathBuf {
        self.config.templates_dir.join(format!("{}.txt", doc_type))
    }

    /// Read the reference template for a document type. Absence of the file
    /// is expected for unconfigured types and is not an error.
    fn load_template(&self, doc_type: &str) -> Option<String> {
        let path = self.template_path(doc_type);
        if !path.exists() {
            debug!("No template for document type '{}'", doc_type);
            return None;
        }
        match std::fs::read_to_string(&path) {
            Ok(text) if !text.trim().is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                warn!("Failed to read template {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Cosine similarity between the document text and the type's template,
    /// or `None` when the capability is unavailable for any reason.
    pub fn similarity(&self, text: &str, doc_type: &str) -> Option<f64> {
        if !self.config.enabled {
            return None;
        }
        let template = self.load_template(doc_type)?;
        let encoder = self.encoder()?;

        let doc_vec = match encoder.encode(text) {
            Ok(v) => v,
            Err(e) => {
                warn!("Semantic similarity failed: {}", e);
                return None;
            }
        };
        let template_vec = match encoder.encode(&template) {
            Ok(v) => v,
            Err(e) => {
                warn!("Semantic similarity failed: {}", e);
                return None;
            }
        };

        Some(cosine_similarity(&doc_vec, &template_vec) as f64)
    }
}

//! Tract-based sentence-embedding encoder.

use std::path::Path;

use tokenizers::Tokenizer;
use tract_onnx::prelude::*;
use tracing::debug;

use crate::error::EncoderError;
use crate::{Result, TextEncoder};

/// Default maximum token sequence length fed to the model.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

type RunnableModel = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Sentence-embedding encoder running an ONNX transformer model via tract.
///
/// Expects the conventional sentence-transformer export: three `i64` inputs
/// (`input_ids`, `attention_mask`, `token_type_ids`, in that order) and a
/// `last_hidden_state` output of shape `[1, seq, hidden]`. Token embeddings
/// are mean-pooled under the attention mask and L2-normalized, so two calls
/// with the same text always produce the same vector.
pub struct TractEncoder {
    model: RunnableModel,
    tokenizer: Tokenizer,
    max_seq_len: usize,
    dimension: usize,
}

impl TractEncoder {
    /// Load an encoder from a directory containing `model.onnx` and
    /// `tokenizer.json`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        Self::from_files(
            dir.join("model.onnx"),
            dir.join("tokenizer.json"),
            DEFAULT_MAX_SEQ_LEN,
        )
    }

    /// Load an encoder from explicit model/tokenizer paths with a fixed
    /// maximum sequence length.
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        model_path: P,
        tokenizer_path: Q,
        max_seq_len: usize,
    ) -> Result<Self> {
        let model_path = model_path.as_ref();
        debug!("Loading embedding model with Tract from: {}", model_path.display());

        let mut model = tract_onnx::onnx()
            .model_for_path(model_path)
            .map_err(|e| EncoderError::ModelLoad(format!("Failed to load model: {}", e)))?;

        // Pin all three inputs to a concrete shape so tract can optimize
        // away the dynamic sequence dimension.
        let shape: &[usize] = &[1, max_seq_len];
        for input_idx in 0..3 {
            model
                .set_input_fact(input_idx, InferenceFact::dt_shape(i64::datum_type(), shape))
                .map_err(|e| {
                    EncoderError::ModelLoad(format!("Failed to set input shape: {}", e))
                })?;
        }

        let model = model
            .into_typed()
            .map_err(|e| EncoderError::ModelLoad(format!("Failed to type model: {}", e)))?
            .into_optimized()
            .map_err(|e| EncoderError::ModelLoad(format!("Failed to optimize: {}", e)))?
            .into_runnable()
            .map_err(|e| EncoderError::ModelLoad(e.to_string()))?;

        let tokenizer = Tokenizer::from_file(tokenizer_path.as_ref())
            .map_err(|e| EncoderError::TokenizerLoad(e.to_string()))?;

        let mut encoder = Self {
            model,
            tokenizer,
            max_seq_len,
            dimension: 0,
        };

        // Probe the hidden size once so dimension() is cheap afterwards.
        let probe = encoder.embed("")?;
        encoder.dimension = probe.len();

        Ok(encoder)
    }

    fn to_tensor(&self, data: Vec<i64>) -> Result<TValue> {
        let arr = tract_ndarray::ArrayD::from_shape_vec(
            tract_ndarray::IxDyn(&[1, self.max_seq_len]),
            data,
        )
        .map_err(|e| EncoderError::EncodingFailed(e.to_string()))?;
        Ok(arr.into_tvalue())
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| EncoderError::Tokenization(e.to_string()))?;

        // Truncate to the pinned length, pad the remainder with zeros.
        let mut input_ids = vec![0i64; self.max_seq_len];
        let mut attention_mask = vec![0i64; self.max_seq_len];
        let token_type_ids = vec![0i64; self.max_seq_len];

        let ids = encoding.get_ids();
        let len = ids.len().min(self.max_seq_len);
        for (i, &id) in ids.iter().take(len).enumerate() {
            input_ids[i] = id as i64;
            attention_mask[i] = 1;
        }

        let mask = attention_mask.clone();
        let inputs: TVec<TValue> = tvec![
            self.to_tensor(input_ids)?,
            self.to_tensor(attention_mask)?,
            self.to_tensor(token_type_ids)?,
        ];

        let outputs = self
            .model
            .run(inputs)
            .map_err(|e| EncoderError::EncodingFailed(e.to_string()))?;

        let hidden = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| EncoderError::OutputExtraction(e.to_string()))?;

        let shape = hidden.shape();
        if shape.len() != 3 {
            return Err(EncoderError::OutputExtraction(format!(
                "expected [batch, seq, hidden] output, got shape {:?}",
                shape
            )));
        }
        let hidden_size = shape[2];

        // Mean pooling over unmasked token positions.
        let mut pooled = vec![0.0f32; hidden_size];
        let mut count = 0usize;
        for (pos, &m) in mask.iter().enumerate().take(shape[1]) {
            if m == 0 {
                continue;
            }
            count += 1;
            for (j, v) in pooled.iter_mut().enumerate() {
                *v += hidden[[0, pos, j]];
            }
        }
        if count > 0 {
            for v in pooled.iter_mut() {
                *v /= count as f32;
            }
        }

        // L2 normalization keeps cosine similarity a plain dot product.
        let norm: f32 = pooled.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in pooled.iter_mut() {
                *v /= norm;
            }
        }

        Ok(pooled)
    }
}

impl TextEncoder for TractEncoder {
    fn encode(&self, text: &str) -> Result<Vec<f32>> {
        self.embed(text)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

//! Text normalization and OCR-confidence aggregation.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::document::Page;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize raw OCR text: NUL bytes become spaces, the result is trimmed,
/// and any whitespace run collapses to a single space.
///
/// Pure function with no failure mode; empty input yields an empty string.
pub fn normalize_text(text: &str) -> String {
    let replaced = text.replace('\0', " ");
    let trimmed = replaced.trim();
    WHITESPACE_RUN.replace_all(trimmed, " ").into_owned()
}

/// Count of whitespace-delimited tokens in a text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Arithmetic mean of the per-page OCR confidences, or `None` when no page
/// carries one. Pages without a confidence value are ignored, not counted
/// as zero.
pub fn mean_ocr_confidence(pages: &[Page]) -> Option<f64> {
    let confs: Vec<f64> = pages.iter().filter_map(|p| p.ocr_conf_mean).collect();
    if confs.is_empty() {
        return None;
    }
    Some(confs.iter().sum::<f64>() / confs.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(no: u32, conf: Option<f64>) -> Page {
        Page { page_no: no, text: String::new(), ocr_conf_mean: conf }
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_text("  a\t\tb\n\nc  "), "a b c");
    }

    #[test]
    fn test_normalize_strips_nul() {
        assert_eq!(normalize_text("a\0b"), "a b");
        assert_eq!(normalize_text("\0\0"), "");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two  three"), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_mean_confidence() {
        let pages = vec![page(1, Some(0.8)), page(2, None), page(3, Some(0.6))];
        let mean = mean_ocr_confidence(&pages).unwrap();
        assert!((mean - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_mean_confidence_none_available() {
        let pages = vec![page(1, None), page(2, None)];
        assert_eq!(mean_ocr_confidence(&pages), None);
        assert_eq!(mean_ocr_confidence(&[]), None);
    }
}

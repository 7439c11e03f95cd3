//! Keyword coverage scoring.

/// Fraction of the required keywords found in the text, as case-insensitive
/// substring matches. Types with no configured list yield 0.0 — an
/// unconfigured type cannot demonstrate coverage.
pub fn keyword_coverage(text: &str, required: &[String]) -> f64 {
    if required.is_empty() {
        return 0.0;
    }
    let text_lc = text.to_lowercase();
    let found = required
        .iter()
        .filter(|kw| text_lc.contains(&kw.to_lowercase()))
        .count();
    found as f64 / required.len() as f64
}

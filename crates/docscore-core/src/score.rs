//! DSS score calculation.
//!
//! Deterministic, additive-penalty model starting at 100. Penalty bands are
//! mutually exclusive within one metric but independent across metrics; the
//! sum is clamped to [0, 100] only at the end.

/// Signals that feed the score.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs {
    /// Document-level mean OCR confidence, when known.
    pub ocr_confidence: Option<f64>,
    /// Required-keyword coverage in [0, 1].
    pub keyword_coverage: f64,
    /// Whether signature wording was found.
    pub has_signature: bool,
    /// Whether no date pattern matched.
    pub missing_date: bool,
}

/// Compute the DSS score in [0, 100].
pub fn compute_dss_score(inputs: &ScoreInputs) -> u8 {
    let mut score: i32 = 100;

    if let Some(conf) = inputs.ocr_confidence {
        if conf < 0.5 {
            score -= 30;
        } else if conf < 0.7 {
            score -= 20;
        } else if conf < 0.85 {
            score -= 10;
        }
    }

    if inputs.keyword_coverage < 0.2 {
        score -= 30;
    } else if inputs.keyword_coverage < 0.4 {
        score -= 15;
    }

    if !inputs.has_signature {
        score -= 25;
    }
    if inputs.missing_date {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn clean() -> ScoreInputs {
        ScoreInputs {
            ocr_confidence: Some(0.95),
            keyword_coverage: 1.0,
            has_signature: true,
            missing_date: false,
        }
    }

    #[test]
    fn test_perfect_document() {
        assert_eq!(compute_dss_score(&clean()), 100);
    }

    #[test]
    fn test_confidence_bands() {
        let mut inputs = clean();

        inputs.ocr_confidence = Some(0.4);
        assert_eq!(compute_dss_score(&inputs), 70);

        inputs.ocr_confidence = Some(0.5);
        assert_eq!(compute_dss_score(&inputs), 80);

        inputs.ocr_confidence = Some(0.7);
        assert_eq!(compute_dss_score(&inputs), 90);

        inputs.ocr_confidence = Some(0.85);
        assert_eq!(compute_dss_score(&inputs), 100);

        inputs.ocr_confidence = None;
        assert_eq!(compute_dss_score(&inputs), 100);
    }

    #[test]
    fn test_coverage_bands() {
        let mut inputs = clean();

        inputs.keyword_coverage = 0.1;
        assert_eq!(compute_dss_score(&inputs), 70);

        inputs.keyword_coverage = 0.2;
        assert_eq!(compute_dss_score(&inputs), 85);

        inputs.keyword_coverage = 0.4;
        assert_eq!(compute_dss_score(&inputs), 100);
    }

    #[test]
    fn test_signature_and_date_penalties() {
        let mut inputs = clean();
        inputs.has_signature = false;
        assert_eq!(compute_dss_score(&inputs), 75);

        inputs.missing_date = true;
        assert_eq!(compute_dss_score(&inputs), 65);
    }

    #[test]
    fn test_penalties_are_additive_then_clamped() {
        let inputs = ScoreInputs {
            ocr_confidence: Some(0.3),
            keyword_coverage: 0.0,
            has_signature: false,
            missing_date: true,
        };
        // 100 - 30 - 30 - 25 - 10 = 5, still above the floor.
        assert_eq!(compute_dss_score(&inputs), 5);
    }

    #[test]
    fn test_empty_document_score() {
        // Unknown confidence, zero coverage, no signature, no date.
        let inputs = ScoreInputs {
            ocr_confidence: None,
            keyword_coverage: 0.0,
            has_signature: false,
            missing_date: true,
        };
        assert_eq!(compute_dss_score(&inputs), 35);
    }
}

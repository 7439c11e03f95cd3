//! Date extraction.
//!
//! Patterns are tried in priority order and the first match wins: ISO-like
//! `YYYY-MM-DD` / `YYYY/MM/DD` first, then `DD-MM-YYYY` / `DD/MM/YYYY`,
//! then month-name forms (`Jan 2026`) as a fallback. The ordering favors
//! unambiguous numeric-ISO forms over locale-ambiguous ones. Matches are
//! reported verbatim; the patterns bound month/day ranges but no deeper
//! calendar validation is applied.

use super::patterns::{DATE_DMY, DATE_ISO, DATE_MONTH_NAME};
use super::{ExtractionMatch, FieldExtractor};

/// Date field extractor.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        // YYYY-MM-DD or YYYY/MM/DD
        for m in DATE_ISO.find_iter(text) {
            results.push(ExtractionMatch::new(m.as_str().to_string(), m.start(), m.end()));
        }

        // DD-MM-YYYY or DD/MM/YYYY
        for m in DATE_DMY.find_iter(text) {
            if results.iter().any(|r: &ExtractionMatch<String>| r.start == m.start()) {
                continue;
            }
            results.push(ExtractionMatch::new(m.as_str().to_string(), m.start(), m.end()));
        }

        // Month-name fallback: "Jan 2026", "September, 2026"
        for m in DATE_MONTH_NAME.find_iter(text) {
            if results.iter().any(|r| r.start <= m.start() && m.start() < r.end) {
                continue;
            }
            results.push(ExtractionMatch::new(m.as_str().to_string(), m.start(), m.end()));
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_iso_date() {
        let extractor = DateExtractor::new();

        let result = extractor.extract("Valid Upto: 2026-01-19.").unwrap();
        assert_eq!(result.value, "2026-01-19");
        assert_eq!(result.start, 12);
        assert_eq!(result.end, 22);
    }

    #[test]
    fn test_extract_slash_iso_date() {
        let extractor = DateExtractor::new();
        let result = extractor.extract("issued 2025/11/03 onwards").unwrap();
        assert_eq!(result.value, "2025/11/03");
    }

    #[test]
    fn test_iso_preferred_over_dmy() {
        let extractor = DateExtractor::new();

        // DMY appears first in the text; ISO still wins on priority.
        let result = extractor.extract("from 19-01-2026 until 2026-12-31").unwrap();
        assert_eq!(result.value, "2026-12-31");
    }

    #[test]
    fn test_extract_dmy_date() {
        let extractor = DateExtractor::new();
        let result = extractor.extract("dated 19/01/2026").unwrap();
        assert_eq!(result.value, "19/01/2026");
    }

    #[test]
    fn test_month_name_fallback() {
        let extractor = DateExtractor::new();
        let result = extractor.extract("expires in January 2027").unwrap();
        assert_eq!(result.value, "January 2027");
    }

    #[test]
    fn test_in_range_but_impossible_dates_reported_verbatim() {
        let extractor = DateExtractor::new();

        // Feb 31 is within the pattern's digit ranges; it is reported as
        // matched, not second-guessed against a calendar.
        let result = extractor.extract("valid upto 2026-02-31 only").unwrap();
        assert_eq!(result.value, "2026-02-31");
    }

    #[test]
    fn test_no_date() {
        let extractor = DateExtractor::new();
        assert_eq!(extractor.extract("no dates here, only 12345"), None);
    }

    #[test]
    fn test_pre_2000_years_not_matched() {
        let extractor = DateExtractor::new();
        assert_eq!(extractor.extract("1999-01-19"), None);
    }

    #[test]
    fn test_out_of_range_components_not_matched() {
        let extractor = DateExtractor::new();
        assert_eq!(extractor.extract("2026-13-01"), None);
        assert_eq!(extractor.extract("2026-01-32"), None);
    }
}

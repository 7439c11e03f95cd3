//! Snippet localization: mapping an extracted value back to the page and
//! offsets where it textually occurs.

use regex::RegexBuilder;

use crate::models::document::Page;
use crate::models::result::TextSnippet;

/// Find the first page whose text contains `value` (case-insensitively) and
/// return a snippet with page-local offsets.
///
/// The search runs directly on the original page text with a
/// case-insensitive literal match, so the reported byte offsets are always
/// valid for that text even when case folding would change its length
/// (e.g. dotted capital I).
///
/// When no page contains the value — OCR page text and the joined full text
/// can disagree after normalization — the fallback is the first page number
/// (1 when there are no pages) with the offsets observed in the full text.
pub fn locate_snippet(
    pages: &[Page],
    value: &str,
    full_text_start: usize,
    full_text_end: usize,
) -> TextSnippet {
    let needle = RegexBuilder::new(&regex::escape(value))
        .case_insensitive(true)
        .build();

    if let Ok(needle) = needle {
        for page in pages {
            if let Some(m) = needle.find(&page.text) {
                return TextSnippet {
                    page: page.page_no,
                    start: m.start(),
                    end: m.end(),
                    text: m.as_str().to_string(),
                };
            }
        }
    }

    TextSnippet {
        page: pages.first().map(|p| p.page_no).unwrap_or(1),
        start: full_text_start,
        end: full_text_end,
        text: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(no: u32, text: &str) -> Page {
        Page { page_no: no, text: text.to_string(), ocr_conf_mean: None }
    }

    #[test]
    fn test_locates_on_second_page() {
        let pages = vec![page(1, "nothing here"), page(2, "valid upto 2026-01-19 only")];
        let snippet = locate_snippet(&pages, "2026-01-19", 0, 10);

        assert_eq!(snippet.page, 2);
        assert_eq!(snippet.start, 11);
        assert_eq!(snippet.end, 21);
        assert_eq!(snippet.text, "2026-01-19");
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let pages = vec![page(1, "SIGNED BY CFO")];
        let snippet = locate_snippet(&pages, "signed by cfo", 0, 13);
        assert_eq!(snippet.page, 1);
        assert_eq!(snippet.text, "SIGNED BY CFO");
    }

    #[test]
    fn test_offsets_valid_with_length_changing_case_folds() {
        // "İ" (U+0130) grows from 2 to 3 bytes when lowercased; offsets
        // must come from the original text, not a folded copy.
        let pages = vec![page(1, "İstanbul sworn 2026-01-19")];
        let snippet = locate_snippet(&pages, "2026-01-19", 0, 10);

        assert_eq!(snippet.page, 1);
        assert_eq!((snippet.start, snippet.end), (16, 26));
        assert_eq!(snippet.text, "2026-01-19");
    }

    #[test]
    fn test_case_insensitive_after_non_ascii_prefix() {
        let pages = vec![page(1, "İSTANBUL FIRE DEPARTMENT, SIGNED")];
        let snippet = locate_snippet(&pages, "signed", 0, 6);

        assert_eq!(snippet.page, 1);
        assert_eq!(snippet.text, "SIGNED");
        assert_eq!(&pages[0].text[snippet.start..snippet.end], "SIGNED");
    }

    #[test]
    fn test_fallback_to_first_page() {
        let pages = vec![page(3, "unrelated"), page(4, "also unrelated")];
        let snippet = locate_snippet(&pages, "2026-01-19", 7, 17);

        assert_eq!(snippet.page, 3);
        assert_eq!((snippet.start, snippet.end), (7, 17));
        assert_eq!(snippet.text, "2026-01-19");
    }

    #[test]
    fn test_fallback_with_no_pages() {
        let snippet = locate_snippet(&[], "42", 0, 2);
        assert_eq!(snippet.page, 1);
    }
}

//! Common regex patterns and keyword tables for field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date patterns, in priority order: unambiguous ISO-like forms first,
    // then day-first numeric, then month-name forms as a fallback.
    pub static ref DATE_ISO: Regex = Regex::new(
        r"\b(20\d{2})[-/](0[1-9]|1[0-2])[-/](0[1-9]|[12]\d|3[01])\b"
    ).unwrap();

    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(0[1-9]|[12]\d|3[01])[-/](0[1-9]|1[0-2])[-/](20\d{2})\b"
    ).unwrap();

    pub static ref DATE_MONTH_NAME: Regex = Regex::new(
        r"(?i)\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)[a-z]*[ ,.-]*(20\d{2})\b"
    ).unwrap();

    // Number-like tokens: optionally comma-grouped integers with an
    // optional decimal part.
    pub static ref NUMBER: Regex = Regex::new(
        r"(?:(?:\d{1,3}(?:,\d{3})+)|\d+)(?:\.\d+)?"
    ).unwrap();
}

/// Signature-related wording, matched case-insensitively as substrings.
pub const SIGNATURE_KEYWORDS: &[&str] = &[
    "signature",
    "signed",
    "signatory",
    "authorised signatory",
    "authorised",
    "autho",
];

//! Best-effort split of completion text on the `1.` / `2.` / `3.` headings the prompt
//! asks for. Each section is resolved on its own; a missing marker only affects the
//! section it opens or closes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{generation_result::NOT_FOUND_MARKER, GenerationResult};

static SUMMARY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)1\. (.+?)2\.").expect("SUMMARY_REGEX is a valid regex pattern")
});

// Only used when the text has no `2.` at all.
static SUMMARY_BEFORE_BLANKS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)1\. (.+?)3\.").expect("SUMMARY_BEFORE_BLANKS_REGEX is a valid regex pattern")
});

static MCQS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)2\. (.+?)3\.").expect("MCQS_REGEX is a valid regex pattern")
});

static FILL_BLANKS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)3\. (.+)").expect("FILL_BLANKS_REGEX is a valid regex pattern")
});

fn capture_section(regex: &Regex, text: &str) -> String {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|section| !section.is_empty())
        .unwrap_or(NOT_FOUND_MARKER)
        .to_string()
}

pub fn segment(text: &str) -> GenerationResult {
    let summary_regex = if text.contains("2.") {
        &*SUMMARY_REGEX
    } else {
        &*SUMMARY_BEFORE_BLANKS_REGEX
    };

    GenerationResult::done(
        capture_section(summary_regex, text),
        capture_section(&MCQS_REGEX, text),
        capture_section(&FILL_BLANKS_REGEX, text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::GenerationStatus;
    use crate::test_utils::fixtures;

    #[test]
    fn test_well_formed_completion() {
        let result = segment("1.  The summary.  2. Q1\nQ2\nQ3 \n3. Blank one\nBlank two\n");

        assert_eq!(result.summary, "The summary.");
        assert_eq!(result.mcqs, "Q1\nQ2\nQ3");
        assert_eq!(result.fill_blanks, "Blank one\nBlank two");
        assert_eq!(result.status, GenerationStatus::Done);
    }

    #[test]
    fn test_multiline_fixture() {
        let result = segment(fixtures::WELL_FORMED_COMPLETION);

        assert!(result.summary.starts_with("**Summary:**"));
        assert!(result.mcqs.contains("a) Photosynthesis"));
        assert!(result.fill_blanks.contains("_____"));
        assert!(!result.summary.contains("MCQs"));
    }

    #[test]
    fn test_missing_second_marker() {
        let result = segment("1. Summary text. 3. Fill text.");

        assert_eq!(result.summary, "Summary text.");
        assert_eq!(result.mcqs, "Not found.");
        assert_eq!(result.fill_blanks, "Fill text.");
    }

    #[test]
    fn test_missing_third_marker() {
        let result = segment("1. Summary text. 2. Questions.");

        assert_eq!(result.summary, "Summary text.");
        assert_eq!(result.mcqs, "Not found.");
        assert_eq!(result.fill_blanks, "Not found.");
    }

    #[test]
    fn test_decimal_in_summary_does_not_end_it() {
        let result = segment("1. Growth was 3.5 percent last year. 2. Q one 3. Blank one");

        assert_eq!(result.summary, "Growth was 3.5 percent last year.");
        assert_eq!(result.mcqs, "Q one");
        assert_eq!(result.fill_blanks, "Blank one");
    }

    #[test]
    fn test_summary_without_later_markers_is_not_found() {
        let result = segment("1. Just a summary with no further sections");

        assert_eq!(result.summary, "Not found.");
        assert_eq!(result.mcqs, "Not found.");
        assert_eq!(result.fill_blanks, "Not found.");
    }

    #[test]
    fn test_no_markers() {
        let result = segment("No response.");

        assert_eq!(result.summary, "Not found.");
        assert_eq!(result.mcqs, "Not found.");
        assert_eq!(result.fill_blanks, "Not found.");
        assert_eq!(result.status, GenerationStatus::Done);
    }

    #[test]
    fn test_blank_section_is_not_found() {
        let result = segment("1.  \n 2. Questions 3. Blanks");

        assert_eq!(result.summary, "Not found.");
        assert_eq!(result.mcqs, "Questions");
        assert_eq!(result.fill_blanks, "Blanks");
    }

    #[test]
    fn test_marker_requires_trailing_space() {
        let result = segment("1.Summary 2.Questions 3.Blanks");

        assert_eq!(result.summary, "Not found.");
        assert_eq!(result.mcqs, "Not found.");
        assert_eq!(result.fill_blanks, "Not found.");
    }
}

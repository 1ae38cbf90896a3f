//! Instructional prompt sent with every generation.
//!
//! The numbered headings are what the segmenter splits on, so the order and the
//! `1.` / `2.` / `3.` markers must not change without updating
//! [`crate::services::segmenter`].

pub const QUIZ_PROMPT_PREAMBLE: &str = "You are a quiz generator. Based on the article below, generate:

1. A 3-sentence summary.
2. Three multiple-choice questions (MCQs).
3. Two fill-in-the-blank questions.";

pub const ARTICLE_DELIMITER: &str = "\"\"\"";

/// Embeds the article verbatim between triple quotes after the fixed instructions.
pub fn build_quiz_prompt(article: &str) -> String {
    format!(
        "\n{QUIZ_PROMPT_PREAMBLE}\n\nArticle:\n{ARTICLE_DELIMITER}{article}{ARTICLE_DELIMITER}\n"
    )
}

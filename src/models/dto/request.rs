use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const EMPTY_ARTICLE_MESSAGE: &str = "Please paste or upload an article first.";
pub const NO_FILE_MESSAGE: &str = "Please select a .txt file";

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank_article");
        error.message = Some(Cow::Borrowed(EMPTY_ARTICLE_MESSAGE));
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct GenerateRequestDto {
    #[validate(custom(function = "validate_not_blank"))]
    pub article: String,
}

/// Paste-edit of the article textarea. Blank text is allowed; it only blocks generation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateArticleRequestDto {
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArticleFileParams {
    #[serde(default)]
    pub file_name: Option<String>,
}

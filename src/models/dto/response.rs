use serde::Serialize;

use crate::models::domain::{Article, ArticleSource};

#[derive(Debug, Clone, Serialize)]
pub struct ArticleDto {
    pub text: String,
    pub source: ArticleSource,
    pub char_count: usize,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        ArticleDto {
            char_count: article.text.chars().count(),
            text: article.text,
            source: article.source,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub api_key_configured: bool,
}

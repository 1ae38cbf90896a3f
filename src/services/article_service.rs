use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Article,
        dto::request::{UpdateArticleRequestDto, NO_FILE_MESSAGE},
    },
    repositories::ArticleRepository,
};

pub struct ArticleService {
    repository: Arc<dyn ArticleRepository>,
}

impl ArticleService {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_article(&self) -> AppResult<Article> {
        self.repository.get().await
    }

    pub async fn paste_article(&self, request: UpdateArticleRequestDto) -> AppResult<Article> {
        let article = Article::pasted(&request.text);
        self.repository.replace(article.clone()).await?;
        log::info!("Article replaced from paste ({} chars)", article.text.len());
        Ok(article)
    }

    /// Replaces the article with a file's decoded text. The file name marks that a
    /// file was chosen; without it the current article is left alone. An empty file
    /// is still a file and yields an empty article.
    pub async fn load_file(&self, bytes: &[u8], file_name: Option<&str>) -> AppResult<Article> {
        let file_name = file_name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::ValidationError(NO_FILE_MESSAGE.to_string()))?;

        let article = Article::from_file(bytes, Some(file_name));
        self.repository.replace(article.clone()).await?;
        log::info!(
            "Article replaced from file {:?} ({} bytes)",
            file_name,
            bytes.len()
        );
        Ok(article)
    }
}

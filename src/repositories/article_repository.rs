use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{errors::AppResult, models::domain::Article};

/// Holds the single current article.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn get(&self) -> AppResult<Article>;
    /// Replaces the stored article wholesale and returns the previous one.
    async fn replace(&self, article: Article) -> AppResult<Article>;
}

#[derive(Default)]
pub struct InMemoryArticleRepository {
    article: RwLock<Article>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn get(&self) -> AppResult<Article> {
        Ok(self.article.read().await.clone())
    }

    async fn replace(&self, article: Article) -> AppResult<Article> {
        let mut current = self.article.write().await;
        Ok(std::mem::replace(&mut *current, article))
    }
}

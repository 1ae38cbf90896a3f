use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{errors::AppResult, models::domain::GenerationResult};

/// Holds the single live generation result. Writers overwrite; the last write wins.
#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn get(&self) -> AppResult<GenerationResult>;
    async fn set(&self, result: GenerationResult) -> AppResult<()>;
}

#[derive(Default)]
pub struct InMemoryResultRepository {
    result: RwLock<GenerationResult>,
}

impl InMemoryResultRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultRepository for InMemoryResultRepository {
    async fn get(&self) -> AppResult<GenerationResult> {
        Ok(self.result.read().await.clone())
    }

    async fn set(&self, result: GenerationResult) -> AppResult<()> {
        *self.result.write().await = result;
        Ok(())
    }
}

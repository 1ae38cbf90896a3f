use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{InMemoryArticleRepository, InMemoryResultRepository},
    services::{ArticleService, CompletionClient, ExportService, GeminiClient, GenerationService},
};

#[derive(Clone)]
pub struct AppState {
    pub article_service: Arc<ArticleService>,
    pub generation_service: Arc<GenerationService>,
    pub export_service: Arc<ExportService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let client = Arc::new(GeminiClient::new(&config));
        log::info!("Completion endpoint: {}", client.endpoint());
        Self::with_client(config, client)
    }

    /// Wires the stores and services around any completion client.
    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> AppResult<Self> {
        let article_repository = Arc::new(InMemoryArticleRepository::new());
        let result_repository = Arc::new(InMemoryResultRepository::new());

        let article_service = Arc::new(ArticleService::new(article_repository.clone()));
        let generation_service = Arc::new(GenerationService::new(
            client,
            article_repository,
            result_repository,
        ));
        let export_service = Arc::new(ExportService::new(&config.export_file_name));

        Ok(Self {
            article_service,
            generation_service,
            export_service,
            config: Arc::new(config),
        })
    }
}

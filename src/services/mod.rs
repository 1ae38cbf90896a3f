pub mod article_service;
pub mod completion_client;
pub mod export_service;
pub mod generation_service;
pub mod segmenter;

pub use article_service::ArticleService;
pub use completion_client::{CompletionClient, CompletionError, GeminiClient};
pub use export_service::ExportService;
pub use generation_service::GenerationService;

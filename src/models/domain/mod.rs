pub mod article;
pub mod generation_request;
pub mod generation_result;
pub use article::{Article, ArticleSource};
pub use generation_request::{GenerationParameters, GenerationRequest, SafetySetting};
pub use generation_result::{GenerationResult, GenerationStatus};

pub mod article_repository;
pub mod result_repository;

pub use article_repository::{ArticleRepository, InMemoryArticleRepository};
pub use result_repository::{InMemoryResultRepository, ResultRepository};

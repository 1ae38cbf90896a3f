pub mod article_handler;
pub mod export_handler;
pub mod generation_handler;
pub mod health_handler;
pub mod page_handler;

use actix_web::web;

pub use article_handler::{get_article, update_article, upload_article_file};
pub use export_handler::export_pdf;
pub use generation_handler::{generate, get_result};
pub use health_handler::health_check;
pub use page_handler::index;

/// Upper bound for an article, pasted or uploaded.
pub const MAX_ARTICLE_BYTES: usize = 5 * 1024 * 1024;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_ARTICLE_BYTES))
        .app_data(web::JsonConfig::default().limit(MAX_ARTICLE_BYTES))
        .service(index)
        .service(health_check)
        .service(get_article)
        .service(update_article)
        .service(upload_article_file)
        .service(generate)
        .service(get_result)
        .service(export_pdf);
}

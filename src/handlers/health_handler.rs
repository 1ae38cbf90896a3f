use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, models::dto::response::HealthResponse};

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        api_key_configured: state.config.has_api_key(),
    })
}

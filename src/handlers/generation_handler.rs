use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::GenerateRequestDto,
};

/// Provider failures are reported inside the result body with a 200; only a blank
/// article is a request error.
#[post("/api/generate")]
pub async fn generate(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateRequestDto>,
) -> Result<HttpResponse, AppError> {
    log::info!(
        "[{}] Generation requested ({} chars)",
        get_request_id(&req).unwrap_or_default(),
        request.article.len()
    );

    let result = state
        .generation_service
        .generate(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[get("/api/result")]
pub async fn get_result(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let result = state.generation_service.current_result().await?;
    Ok(HttpResponse::Ok().json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::{
        config::Config,
        services::completion_client::{CompletionError, MockCompletionClient},
    };

    fn state_with(client: MockCompletionClient) -> web::Data<AppState> {
        web::Data::new(AppState::with_client(Config::test_config(), Arc::new(client)).unwrap())
    }

    #[actix_web::test]
    async fn test_generate_returns_sections() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .times(1)
            .returning(|_| Ok("1. Sum. 2. Questions. 3. Blanks.".to_string()));
        let app = test::init_service(
            App::new()
                .app_data(state_with(client))
                .service(generate)
                .service(get_result),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({ "article": "Some article." }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["summary"], "Sum.");
        assert_eq!(body["mcqs"], "Questions.");
        assert_eq!(body["fill_blanks"], "Blanks.");
        assert_eq!(body["status"], "done");

        let req = test::TestRequest::get().uri("/api/result").to_request();
        let stored: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stored, body);
    }

    #[actix_web::test]
    async fn test_blank_article_is_bad_request() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().never();
        let app = test::init_service(
            App::new()
                .app_data(state_with(client))
                .service(generate)
                .service(get_result),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({ "article": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Please paste or upload an article first.");

        let req = test::TestRequest::get().uri("/api/result").to_request();
        let stored: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stored["status"], "idle");
    }

    #[actix_web::test]
    async fn test_provider_error_is_reported_in_result() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .returning(|_| Err(CompletionError::Status(403)));
        let app = test::init_service(App::new().app_data(state_with(client)).service(generate)).await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({ "article": "text" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["summary"],
            "Forbidden. You don't have permission to use this API."
        );
        assert_eq!(body["mcqs"], "");
        assert_eq!(body["status"], "error");
    }
}

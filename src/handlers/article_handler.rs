use actix_web::{get, post, put, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{ArticleFileParams, UpdateArticleRequestDto},
        response::ArticleDto,
    },
};

#[get("/api/article")]
pub async fn get_article(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let article = state.article_service.get_article().await?;
    Ok(HttpResponse::Ok().json(ArticleDto::from(article)))
}

#[put("/api/article")]
pub async fn update_article(
    state: web::Data<AppState>,
    request: web::Json<UpdateArticleRequestDto>,
) -> Result<HttpResponse, AppError> {
    let article = state
        .article_service
        .paste_article(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ArticleDto::from(article)))
}

/// Raw file contents in the body, named by `file_name`; the page restricts the picker to `.txt`.
#[post("/api/article/file")]
pub async fn upload_article_file(
    req: HttpRequest,
    state: web::Data<AppState>,
    params: web::Query<ArticleFileParams>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    log::info!(
        "[{}] Article file upload ({} bytes)",
        get_request_id(&req).unwrap_or_default(),
        body.len()
    );

    let article = state
        .article_service
        .load_file(&body, params.file_name.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(ArticleDto::from(article)))
}

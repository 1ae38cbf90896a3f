use actix_web::{
    get,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    web, HttpResponse,
};

use crate::{app_state::AppState, errors::AppError};

#[get("/api/export")]
pub async fn export_pdf(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let result = state.generation_service.current_result().await?;
    let bytes = state.export_service.render(&result)?;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(
                state.export_service.file_name().to_string(),
            )],
        })
        .body(bytes))
}

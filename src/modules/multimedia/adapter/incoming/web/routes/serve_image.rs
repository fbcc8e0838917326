use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::multimedia::application::domain::entities::ImageCategory;
use crate::modules::multimedia::application::ports::incoming::use_cases::UploadError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/images/{category}/{file_name}")]
pub async fn serve_image_handler(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (category, file_name) = path.into_inner();

    let Some(category) = ImageCategory::from_path(&category) else {
        return ApiResponse::not_found("UNKNOWN_CATEGORY", "No such image category");
    };

    match data.uploads.fetch_image(category, &file_name).await {
        Ok(Some(image)) => HttpResponse::Ok()
            .content_type(image.content_type)
            .body(image.bytes),
        Ok(None) => ApiResponse::not_found("IMAGE_NOT_FOUND", "No such image"),
        Err(UploadError::Storage(e)) => {
            error!("image read failed: {}", e);
            ApiResponse::internal_error()
        }
        Err(_) => ApiResponse::internal_error(),
    }
}

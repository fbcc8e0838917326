use actix_web::{delete, put, web, Responder};
use serde::Deserialize;

use crate::modules::auth::adapter::incoming::web::extractors::admin::AdminSession;
use crate::modules::content::adapter::incoming::web::error::content_error_response;
use crate::modules::content::application::ports::incoming::use_cases::SaveGalleryItemData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct ConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// Create or update a gallery item; an absent id means create.
#[put("/api/secure/home/gallery")]
pub async fn save_gallery_item_handler(
    _admin: AdminSession,
    req: web::Json<SaveGalleryItemData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.home_content.save_gallery_item(req.into_inner()).await {
        Ok(item) => ApiResponse::success(item),
        Err(e) => content_error_response(e),
    }
}

/// Deleting is destructive, so the client must opt in with `?confirm=true`.
/// Unknown ids are a no-op.
#[delete("/api/secure/home/gallery/{id}")]
pub async fn delete_gallery_item_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    query: web::Query<ConfirmQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    if !query.confirm {
        return ApiResponse::bad_request(
            "CONFIRMATION_REQUIRED",
            "Pass confirm=true to delete this record",
        );
    }
    data.home_content.delete_gallery_item(&path.into_inner()).await;
    ApiResponse::no_content()
}

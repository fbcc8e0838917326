use actix_web::{delete, put, web, Responder};
use serde::Deserialize;

use crate::modules::auth::adapter::incoming::web::extractors::admin::AdminSession;
use crate::modules::content::adapter::incoming::web::error::content_error_response;
use crate::modules::content::application::ports::incoming::use_cases::SaveAchievementData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct ConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[put("/api/secure/home/achievements")]
pub async fn save_achievement_handler(
    _admin: AdminSession,
    req: web::Json<SaveAchievementData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.home_content.save_achievement(req.into_inner()).await {
        Ok(achievement) => ApiResponse::success(achievement),
        Err(e) => content_error_response(e),
    }
}

#[delete("/api/secure/home/achievements/{id}")]
pub async fn delete_achievement_handler(
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
    data.home_content.delete_achievement(&path.into_inner()).await;
    ApiResponse::no_content()
}

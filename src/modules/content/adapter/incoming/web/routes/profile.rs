use actix_web::{patch, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::admin::AdminSession;
use crate::modules::content::adapter::incoming::web::error::content_error_response;
use crate::modules::content::application::ports::incoming::use_cases::PatchProfileData;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Partial profile update. Omitted optional fields keep their value, an
/// explicit `null` clears them.
#[patch("/api/secure/portfolio/profile")]
pub async fn patch_profile_handler(
    _admin: AdminSession,
    req: web::Json<PatchProfileData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio_content.update_profile(req.into_inner()).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => content_error_response(e),
    }
}

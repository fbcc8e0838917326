use actix_web::{delete, put, web, Responder};
use serde::Deserialize;

use crate::modules::auth::adapter::incoming::web::extractors::admin::AdminSession;
use crate::modules::content::adapter::incoming::web::error::content_error_response;
use crate::modules::content::application::domain::entities::ContentSection;
use crate::modules::content::application::ports::incoming::use_cases::SaveSectionData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct ConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[put("/api/secure/portfolio/sections")]
pub async fn save_portfolio_section_handler(
    _admin: AdminSession,
    req: web::Json<SaveSectionData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio_content.save_section(req.into_inner()).await {
        Ok(section) => ApiResponse::success(section),
        Err(e) => content_error_response(e),
    }
}

#[delete("/api/secure/portfolio/sections/{id}")]
pub async fn delete_portfolio_section_handler(
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
    data.portfolio_content.delete_section(&path.into_inner()).await;
    ApiResponse::no_content()
}

/// Replace the section order wholesale (drag-and-drop result).
#[put("/api/secure/portfolio/sections/order")]
pub async fn reorder_portfolio_sections_handler(
    _admin: AdminSession,
    req: web::Json<Vec<ContentSection>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ordered = data.portfolio_content.reorder_sections(req.into_inner()).await;
    ApiResponse::success(ordered)
}

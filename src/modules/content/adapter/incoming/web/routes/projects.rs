use actix_web::{delete, put, web, Responder};
use serde::Deserialize;

use crate::modules::auth::adapter::incoming::web::extractors::admin::AdminSession;
use crate::modules::content::adapter::incoming::web::error::content_error_response;
use crate::modules::content::application::ports::incoming::use_cases::SaveProjectData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct ConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[put("/api/secure/portfolio/projects")]
pub async fn save_project_handler(
    _admin: AdminSession,
    req: web::Json<SaveProjectData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio_content.save_project(req.into_inner()).await {
        Ok(project) => ApiResponse::success(project),
        Err(e) => content_error_response(e),
    }
}

#[delete("/api/secure/portfolio/projects/{id}")]
pub async fn delete_project_handler(
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
    data.portfolio_content.delete_project(&path.into_inner()).await;
    ApiResponse::no_content()
}

use actix_web::{delete, post, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::admin::AdminSession;
use crate::modules::content::adapter::incoming::web::error::content_error_response;
use crate::modules::content::application::ports::incoming::use_cases::{
    HomeDraftKind, PortfolioDraftKind, StartDraftData,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Open an add/edit draft for a home-page record type. Editing an existing
/// record requires `confirm: true`; replacing a pending draft requires
/// `discard: true`.
#[post("/api/secure/home/drafts/{kind}")]
pub async fn start_home_draft_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    req: web::Json<StartDraftData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(kind) = HomeDraftKind::from_path(&path.into_inner()) else {
        return ApiResponse::not_found("UNKNOWN_DRAFT_KIND", "No such record type");
    };
    match data.home_content.start_draft(kind, req.into_inner()).await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => content_error_response(e),
    }
}

#[delete("/api/secure/home/drafts/{kind}")]
pub async fn cancel_home_draft_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(kind) = HomeDraftKind::from_path(&path.into_inner()) else {
        return ApiResponse::not_found("UNKNOWN_DRAFT_KIND", "No such record type");
    };
    ApiResponse::success(data.home_content.cancel_draft(kind).await)
}

#[post("/api/secure/portfolio/drafts/{kind}")]
pub async fn start_portfolio_draft_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    req: web::Json<StartDraftData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(kind) = PortfolioDraftKind::from_path(&path.into_inner()) else {
        return ApiResponse::not_found("UNKNOWN_DRAFT_KIND", "No such record type");
    };
    match data
        .portfolio_content
        .start_draft(kind, req.into_inner())
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(e) => content_error_response(e),
    }
}

#[delete("/api/secure/portfolio/drafts/{kind}")]
pub async fn cancel_portfolio_draft_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(kind) = PortfolioDraftKind::from_path(&path.into_inner()) else {
        return ApiResponse::not_found("UNKNOWN_DRAFT_KIND", "No such record type");
    };
    ApiResponse::success(data.portfolio_content.cancel_draft(kind).await)
}

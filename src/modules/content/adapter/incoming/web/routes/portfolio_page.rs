use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public read of the merged portfolio page. Unlike the home page, reading
/// never writes back; only edits persist.
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.portfolio_content.load_page().await)
}

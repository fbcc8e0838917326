use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public read of the merged home page. Loading also writes the merged
/// result back, so a partial snapshot heals itself.
#[get("/api/home")]
pub async fn get_home_page_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.home_content.load_page().await)
}

/// Current carousel position for the profile image rotation.
#[get("/api/home/carousel")]
pub async fn get_carousel_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.home_content.carousel().await)
}

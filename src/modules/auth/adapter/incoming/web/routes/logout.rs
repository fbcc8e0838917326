use actix_web::{post, web, HttpRequest, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Revokes the caller's session token. Deliberately lenient: an absent or
/// unknown token still returns 204 so the client can always reset its state.
#[post("/api/auth/logout")]
pub async fn logout_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    if let Some(token) = bearer_token(&req) {
        data.auth.logout(&token).await;
    }
    ApiResponse::no_content()
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::modules::auth::application::domain::entities::AdminUser;
use crate::modules::auth::application::services::session_store::SessionStore;
use crate::shared::api::ApiResponse;

/// Secure-mode gate: a request carrying a valid admin session token.
///
/// This is the only authorization check in the system — advisory by design,
/// gating the editing surface rather than protecting data.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub user: AdminUser,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let sessions = match req.app_data::<actix_web::web::Data<Arc<SessionStore>>>() {
            Some(store) => store,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match sessions.validate(&token) {
            Some(user) => ready(Ok(AdminSession { user })),
            None => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Unknown or revoked session token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

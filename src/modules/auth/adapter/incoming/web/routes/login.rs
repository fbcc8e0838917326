use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{info, warn};

use crate::modules::auth::application::ports::incoming::use_cases::LoginError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginRequestDto {
    pub username: String,
    pub password: String,
}

#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    if dto.username.trim().is_empty() || dto.password.is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "username and password are required");
    }

    match data.auth.login(&dto.username, &dto.password).await {
        Ok(result) => {
            info!(username = %result.user.username, "admin logged in");
            ApiResponse::success(result)
        }
        Err(LoginError::InvalidCredentials) => {
            warn!("login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};

    fn login_json(username: &str, password: &str) -> serde_json::Value {
        serde_json::json!({ "username": username, "password": password })
    }

    #[actix_web::test]
    async fn test_login_with_default_credentials_returns_token() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(login_json("admin", "admin123"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["data"]["token"].is_string());
        assert_eq!(body["data"]["user"]["username"], "admin");
        assert_eq!(body["data"]["user"]["role"], "admin");
        assert!(body.get("error").is_none());
    }

    #[actix_web::test]
    async fn test_login_with_wrong_password_is_unauthorized() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(login_json("admin", "letmein"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
        assert!(body.get("data").is_none());
    }

    #[actix_web::test]
    async fn test_login_with_blank_fields_is_rejected() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        for (username, password) in [("", "admin123"), ("admin", ""), ("   ", "admin123")] {
            let req = test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(login_json(username, password))
                .to_request();

            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }
}

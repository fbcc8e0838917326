use actix_web::{post, web, HttpRequest, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::admin::AdminSession;
use crate::modules::multimedia::application::domain::entities::ImageCategory;
use crate::modules::multimedia::application::ports::incoming::use_cases::UploadError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/secure/images/{category}")]
pub async fn upload_image_handler(
    _admin: AdminSession,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(category) = ImageCategory::from_path(&path.into_inner()) else {
        return ApiResponse::not_found("UNKNOWN_CATEGORY", "No such image category");
    };

    let content_type = req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    match data
        .uploads
        .store_image(category, content_type.as_deref(), body.to_vec())
        .await
    {
        Ok(stored) => ApiResponse::created(stored),
        Err(UploadError::TooLarge) => ApiResponse::payload_too_large(
            "ENTITY_TOO_LARGE",
            "The file exceeds the 5MB upload limit",
        ),
        Err(UploadError::UnsupportedType) => ApiResponse::unsupported_media_type(
            "UNSUPPORTED_MEDIA_TYPE",
            "Only JPEG, PNG and WebP images are accepted",
        ),
        Err(UploadError::Storage(e)) => {
            error!("image upload failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};

    const TEN_MB: usize = 10 * 1024 * 1024;

    async fn call(
        body: Vec<u8>,
        content_type: &str,
        category: &str,
        token: Option<&str>,
    ) -> (u16, serde_json::Value) {
        let builder = TestAppStateBuilder::default();
        let sessions = builder.session_data();
        let minted = builder.issue_token();
        let app_state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(sessions)
                .app_data(web::PayloadConfig::new(TEN_MB))
                .service(upload_image_handler),
        )
        .await;

        let mut req = test::TestRequest::post()
            .uri(&format!("/api/secure/images/{}", category))
            .insert_header(("Content-Type", content_type))
            .set_payload(body);
        if token.is_some() {
            req = req.insert_header(("Authorization", format!("Bearer {}", minted)));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_upload_png_returns_created_with_url() {
        let (status, body) = call(vec![1, 2, 3], "image/png", "gallery", Some("t")).await;
        assert_eq!(status, 201);
        assert_eq!(body["success"], true);
        let url = body["data"]["url"].as_str().unwrap();
        assert!(url.starts_with("/api/images/gallery/"));
        assert!(url.ends_with(".png"));
    }

    #[actix_web::test]
    async fn test_oversized_upload_is_413() {
        let (status, body) = call(
            vec![0u8; 5 * 1024 * 1024 + 1],
            "image/png",
            "gallery",
            Some("t"),
        )
        .await;
        assert_eq!(status, 413);
        assert_eq!(body["error"]["code"], "ENTITY_TOO_LARGE");
    }

    #[actix_web::test]
    async fn test_non_image_type_is_415() {
        let (status, body) = call(vec![1], "application/pdf", "gallery", Some("t")).await;
        assert_eq!(status, 415);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[actix_web::test]
    async fn test_unknown_category_is_404() {
        let (status, body) = call(vec![1], "image/png", "videos", Some("t")).await;
        assert_eq!(status, 404);
        assert_eq!(body["error"]["code"], "UNKNOWN_CATEGORY");
    }

    #[actix_web::test]
    async fn test_upload_without_session_is_401() {
        let (status, body) = call(vec![1], "image/png", "gallery", None).await;
        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }
}

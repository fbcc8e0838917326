use actix_web::{put, web, Responder};
use serde::Deserialize;

use crate::modules::auth::adapter::incoming::web::extractors::admin::AdminSession;
use crate::modules::content::application::domain::entities::SectionHeadings;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct BioDto {
    pub bio: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileImagesDto {
    pub images: Vec<String>,
}

/// Replace the free-text welcome bio.
#[put("/api/secure/home/bio")]
pub async fn update_bio_handler(
    _admin: AdminSession,
    req: web::Json<BioDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    data.home_content.update_bio(req.into_inner().bio).await;
    ApiResponse::success(serde_json::json!({ "updated": true }))
}

/// Replace the per-section heading overrides wholesale.
#[put("/api/secure/home/headings")]
pub async fn update_headings_handler(
    _admin: AdminSession,
    req: web::Json<SectionHeadings>,
    data: web::Data<AppState>,
) -> impl Responder {
    data.home_content.update_headings(req.into_inner()).await;
    ApiResponse::success(serde_json::json!({ "updated": true }))
}

/// Replace the carousel image list. The rotation restarts from the first
/// image whenever the list changes.
#[put("/api/secure/home/profile-images")]
pub async fn update_profile_images_handler(
    _admin: AdminSession,
    req: web::Json<ProfileImagesDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    data.home_content
        .update_profile_images(req.into_inner().images)
        .await;
    ApiResponse::success(serde_json::json!({ "updated": true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_bio_and_headings_survive_a_reload() {
        let builder = TestAppStateBuilder::default();
        let token = builder.issue_token();
        let sessions = builder.session_data();
        let state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .app_data(sessions)
                .service(update_bio_handler)
                .service(update_headings_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/secure/home/bio")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({ "bio": "I build things." }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);

        let req = test::TestRequest::put()
            .uri("/api/secure/home/headings")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({ "galleryTitle": "My Gallery" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);

        let page = state.home_content.load_page().await;
        assert_eq!(page.bio_data.as_deref(), Some("I build things."));
        assert_eq!(
            page.section_headings
                .unwrap()
                .gallery_title
                .as_deref(),
            Some("My Gallery")
        );
    }

    #[actix_web::test]
    async fn test_shrinking_the_image_list_resets_the_carousel() {
        let builder = TestAppStateBuilder::default();
        let token = builder.issue_token();
        let sessions = builder.session_data();
        let state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .app_data(sessions)
                .service(update_profile_images_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/secure/home/profile-images")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({ "images": ["/a.jpg"] }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);

        let view = state.home_content.carousel().await;
        assert_eq!(view.count, 1);
        assert_eq!(view.index, 0);
        assert_eq!(view.image.as_deref(), Some("/a.jpg"));
    }
}

use actix_web::{delete, put, web, Responder};
use serde::Deserialize;

use crate::modules::auth::adapter::incoming::web::extractors::admin::AdminSession;
use crate::modules::content::adapter::incoming::web::error::content_error_response;
use crate::modules::content::application::ports::incoming::use_cases::SaveSectionData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct ConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[put("/api/secure/home/sections")]
pub async fn save_home_section_handler(
    _admin: AdminSession,
    req: web::Json<SaveSectionData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.home_content.save_section(req.into_inner()).await {
        Ok(section) => ApiResponse::success(section),
        Err(e) => content_error_response(e),
    }
}

#[delete("/api/secure/home/sections/{id}")]
pub async fn delete_home_section_handler(
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
    data.home_content.delete_section(&path.into_inner()).await;
    ApiResponse::no_content()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_custom_section_add_edit_delete_lifecycle() {
        let builder = TestAppStateBuilder::default();
        let token = builder.issue_token();
        let sessions = builder.session_data();
        let state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .app_data(sessions)
                .service(save_home_section_handler)
                .service(delete_home_section_handler),
        )
        .await;

        let create = test::TestRequest::put()
            .uri("/api/secure/home/sections")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({
                "title": "Talks",
                "subtitle": "Conferences",
                "content": "Things I have presented."
            }))
            .to_request();
        let created: serde_json::Value =
            test::read_body_json(test::call_service(&app, create).await).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let edit = test::TestRequest::put()
            .uri("/api/secure/home/sections")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({
                "id": id,
                "title": "Talks",
                "content": "Updated."
            }))
            .to_request();
        let resp = test::call_service(&app, edit).await;
        assert_eq!(resp.status(), 200);

        let page = state.home_content.load_page().await;
        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].content, "Updated.");
        // Omitting the subtitle on edit clears it; sections replace whole.
        assert!(page.sections[0].subtitle.is_none());

        let del = test::TestRequest::delete()
            .uri(&format!("/api/secure/home/sections/{}?confirm=true", id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        assert_eq!(test::call_service(&app, del).await.status(), 204);
        assert!(state.home_content.load_page().await.sections.is_empty());
    }

    #[actix_web::test]
    async fn test_section_without_content_is_rejected() {
        let builder = TestAppStateBuilder::default();
        let token = builder.issue_token();
        let sessions = builder.session_data();
        let app_state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(sessions)
                .service(save_home_section_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/secure/home/sections")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({ "title": "T", "content": "" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "content");
    }
}

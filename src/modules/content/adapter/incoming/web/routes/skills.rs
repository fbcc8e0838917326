use actix_web::{delete, put, web, Responder};
use serde::Deserialize;

use crate::modules::auth::adapter::incoming::web::extractors::admin::AdminSession;
use crate::modules::content::adapter::incoming::web::error::content_error_response;
use crate::modules::content::application::ports::incoming::use_cases::SaveSkillData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct ConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[put("/api/secure/portfolio/skills")]
pub async fn save_skill_handler(
    _admin: AdminSession,
    req: web::Json<SaveSkillData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio_content.save_skill(req.into_inner()).await {
        Ok(skill) => ApiResponse::success(skill),
        Err(e) => content_error_response(e),
    }
}

#[delete("/api/secure/portfolio/skills/{id}")]
pub async fn delete_skill_handler(
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
    data.portfolio_content.delete_skill(&path.into_inner()).await;
    ApiResponse::no_content()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_new_skill_is_added_with_its_category() {
        let builder = TestAppStateBuilder::default();
        let token = builder.issue_token();
        let sessions = builder.session_data();
        let state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .app_data(sessions)
                .service(save_skill_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/secure/portfolio/skills")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({
                "name": "Rust",
                "category": "backend",
                "proficiency": 80
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "Rust");
        assert_eq!(body["data"]["category"], "backend");
        assert_eq!(body["data"]["proficiency"], 80);

        let page = state.portfolio_content.load_page().await;
        assert_eq!(page.skills.len(), 10);
    }

    #[actix_web::test]
    async fn test_out_of_range_proficiency_is_stored_as_given() {
        // Proficiency is advisory display data; the original accepted any
        // number and so do we.
        let builder = TestAppStateBuilder::default();
        let token = builder.issue_token();
        let sessions = builder.session_data();
        let app_state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(sessions)
                .service(save_skill_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/secure/portfolio/skills")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({
                "name": "Chess",
                "category": "other",
                "proficiency": 250
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["proficiency"], 250);
    }

    #[actix_web::test]
    async fn test_unknown_category_fails_json_deserialization() {
        let builder = TestAppStateBuilder::default();
        let token = builder.issue_token();
        let sessions = builder.session_data();
        let app_state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(sessions)
                .app_data(crate::shared::api::custom_json_config())
                .service(save_skill_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/secure/portfolio/skills")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({
                "name": "X",
                "category": "hardware",
                "proficiency": 10
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_delete_skill_with_confirm() {
        let builder = TestAppStateBuilder::default();
        let token = builder.issue_token();
        let sessions = builder.session_data();
        let state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .app_data(sessions)
                .service(delete_skill_handler),
        )
        .await;

        let id = state.portfolio_content.load_page().await.skills[0].id.clone();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/secure/portfolio/skills/{}?confirm=true", id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 204);

        let page = state.portfolio_content.load_page().await;
        assert_eq!(page.skills.len(), 8);
        assert!(page.skills.iter().all(|s| s.id != id));
    }
}

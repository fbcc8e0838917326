use actix_web::{http::StatusCode, post, web, Responder};
use serde::Deserialize;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactError, SubmitContactData,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequestDto {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let submission = SubmitContactData {
        name: dto.name,
        email: dto.email,
        subject: dto.subject,
        message: dto.message,
    };

    match data.contact.submit(submission).await {
        Ok(()) => ApiResponse::success(serde_json::json!({ "delivered": true })),
        Err(ContactError::Validation(field)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", field)
        }
        Err(ContactError::DeliveryFailed) => ApiResponse::error(
            StatusCode::BAD_GATEWAY,
            "DELIVERY_FAILED",
            "The message could not be delivered. Please try again later.",
        ),
    }
}

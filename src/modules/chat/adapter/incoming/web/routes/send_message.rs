use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::modules::chat::application::ports::incoming::use_cases::ChatError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct ChatRequestDto {
    pub message: String,
}

#[post("/api/chat")]
pub async fn send_message_handler(
    req: web::Json<ChatRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.chat.send_message(&req.message).await {
        Ok(response) => ApiResponse::success(response),
        Err(ChatError::Validation(field)) => ApiResponse::bad_request("VALIDATION_ERROR", field),
    }
}

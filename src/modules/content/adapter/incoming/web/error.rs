use actix_web::HttpResponse;

use crate::modules::content::application::ports::incoming::use_cases::ContentError;
use crate::shared::api::ApiResponse;

/// One mapping for every content operation, so each record type fails the
/// same way on the wire.
pub fn content_error_response(err: ContentError) -> HttpResponse {
    match err {
        ContentError::Validation(field) => ApiResponse::bad_request("VALIDATION_ERROR", field),
        ContentError::NotFound => ApiResponse::not_found("NOT_FOUND", "Record not found"),
        ContentError::DraftPending => ApiResponse::conflict(
            "DRAFT_PENDING",
            "Another draft is open; discard it first",
        ),
        ContentError::ConfirmationRequired => ApiResponse::bad_request(
            "CONFIRMATION_REQUIRED",
            "This operation must be confirmed",
        ),
    }
}

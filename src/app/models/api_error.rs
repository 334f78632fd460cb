use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use validator::ValidationErrors;

use crate::app::errors::DefaultApiError;

#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("rejected request body: {}", rejection);

        match rejection {
            JsonRejection::JsonDataError(_) => DefaultApiError::InvalidField.value(),
            r if r.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                DefaultApiError::PayloadTooLarge.value()
            }
            _ => DefaultApiError::InvalidJson.value(),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError {
            code: StatusCode::BAD_REQUEST,
            message: first_message(&errors).unwrap_or_else(|| errors.to_string()),
        }
    }
}

// validator's Display prefixes every message with its field name
fn first_message(errors: &ValidationErrors) -> Option<String> {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
}

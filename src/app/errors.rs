use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InvalidJson,
    InvalidField,
    PayloadTooLarge,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InvalidJson => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Request body must be valid JSON.".to_string(),
            },
            Self::InvalidField => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Request body has an invalid field.".to_string(),
            },
            Self::PayloadTooLarge => ApiError {
                code: StatusCode::PAYLOAD_TOO_LARGE,
                message: "Request body is too large.".to_string(),
            },
        }
    }
}

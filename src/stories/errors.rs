use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum StoriesApiError {
    GenerationFailed,
}

impl StoriesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::GenerationFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Story generation failed".to_string(),
            },
        }
    }
}

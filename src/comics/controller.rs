use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::generate_comic_dto::GenerateComicDto, errors::ComicsApiError, models::comic::Comic,
    service,
};

pub async fn generate_comic(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<GenerateComicDto>,
) -> Result<Json<Comic>, ApiError> {
    tracing::info!("generate_comic request received");

    if let Err(e) = dto.validate() {
        return Err(e.into());
    }

    let story = dto.story.unwrap_or_default();

    match service::generate_comic(&story, &state).await {
        Ok(comic) => Ok(Json(comic)),
        Err(e) => {
            tracing::error!(kind = e.kind(), "generate_comic failed: {}", e);
            Err(ComicsApiError::GenerationFailed.value())
        }
    }
}

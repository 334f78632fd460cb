use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::generate_story_dto::GenerateStoryDto, errors::StoriesApiError, models::story::Story,
    service,
};

pub async fn generate_story(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<GenerateStoryDto>,
) -> Result<Json<Story>, ApiError> {
    tracing::info!("generate_story request received");

    if let Err(e) = dto.validate() {
        return Err(e.into());
    }

    let prompt = dto.prompt.unwrap_or_default();

    match service::generate_story(&prompt, &state).await {
        Ok(story) => {
            tracing::debug!(chars = story.story.len(), "story generated");
            Ok(Json(story))
        }
        Err(e) => {
            tracing::error!(kind = e.kind(), "generate_story failed: {}", e);
            Err(StoriesApiError::GenerationFailed.value())
        }
    }
}

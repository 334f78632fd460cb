use std::sync::Arc;

use serde_json::json;

use crate::{relay::errors::RelayError, AppState};

use super::{models::story::Story, structs::upstream_story_response::UpstreamStoryResponse};

pub const UPSTREAM_PATH: &str = "generate-story";

pub async fn generate_story(prompt: &str, state: &Arc<AppState>) -> Result<Story, RelayError> {
    let url = state.envy.generator_endpoint(UPSTREAM_PATH);
    let value = state.relay.post(&url, &json!({ "prompt": prompt })).await?;

    let response: UpstreamStoryResponse = serde_json::from_value(value)
        .map_err(|e| RelayError::UpstreamProtocol(e.to_string()))?;

    match response.into_text() {
        Some(story) => Ok(Story { story }),
        None => Err(RelayError::UpstreamProtocol(
            "no story in upstream response".to_string(),
        )),
    }
}

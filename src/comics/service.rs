use std::sync::Arc;

use serde_json::json;

use crate::{relay::errors::RelayError, AppState};

use super::{models::comic::Comic, structs::upstream_comic_response::UpstreamComicResponse};

pub const UPSTREAM_PATH: &str = "generate-comic";

pub async fn generate_comic(story: &str, state: &Arc<AppState>) -> Result<Comic, RelayError> {
    let url = state.envy.generator_endpoint(UPSTREAM_PATH);
    let value = state.relay.post(&url, &json!({ "story": story })).await?;

    tracing::debug!(response = %value, "image generator responded");

    let response: UpstreamComicResponse = serde_json::from_value(value)
        .map_err(|e| RelayError::UpstreamProtocol(e.to_string()))?;

    let Some(image_url) = response.into_image_url() else {
        return Err(RelayError::UpstreamProtocol(
            "no image url in upstream response".to_string(),
        ));
    };

    Ok(Comic { image_url })
}

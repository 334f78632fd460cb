use reqwest::StatusCode;
use serde_json::json;
use thiserror::Error;

use crate::{comics::models::comic::Comic, stories::models::story::Story};

#[derive(Debug, Error)]
pub enum ScreenClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend returned {0}")]
    Status(StatusCode),
}

/// Calls the relay endpoints from the screen's side.
#[derive(Debug, Clone)]
pub struct ScreenClient {
    client: reqwest::Client,
    base_url: String,
}

impl ScreenClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn generate_story(&self, prompt: &str) -> Result<String, ScreenClientError> {
        let res = self
            .client
            .post(format!("{}/api/generate-story", self.base_url))
            .json(&json!({ "prompt": prompt }))
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(ScreenClientError::Status(res.status()));
        }

        let story: Story = res.json().await?;
        Ok(story.story)
    }

    pub async fn generate_comic(&self, story: &str) -> Result<String, ScreenClientError> {
        let res = self
            .client
            .post(format!("{}/api/generate-comic", self.base_url))
            .json(&json!({ "story": story }))
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(ScreenClientError::Status(res.status()));
        }

        let comic: Comic = res.json().await?;
        Ok(comic.image_url)
    }
}

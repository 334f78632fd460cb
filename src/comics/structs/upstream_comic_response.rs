use serde::Deserialize;

/// Image generator reply. Depending on the backend the locator comes back as
/// `imageUrl` or `image_url`.
#[derive(Debug, Deserialize)]
pub struct UpstreamComicResponse {
    #[serde(rename(deserialize = "imageUrl"))]
    pub image_url_camel: Option<String>,
    #[serde(rename(deserialize = "image_url"))]
    pub image_url_snake: Option<String>,
}

impl UpstreamComicResponse {
    pub fn into_image_url(self) -> Option<String> {
        self.image_url_camel
            .filter(|url| !url.is_empty())
            .or(self.image_url_snake.filter(|url| !url.is_empty()))
    }
}

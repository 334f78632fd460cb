use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comic {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

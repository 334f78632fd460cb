use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct UpstreamStoryResponse {
    pub story: Option<Value>,
}

impl UpstreamStoryResponse {
    /// The story as display text. Strings pass through untouched, any other
    /// JSON value is rendered as its JSON text.
    pub fn into_text(self) -> Option<String> {
        match self.story? {
            Value::Null => None,
            Value::String(text) => Some(text),
            other => Some(other.to_string()),
        }
    }
}

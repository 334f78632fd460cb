use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct GenerateComicDto {
    #[validate(required(message = "Story required"), custom(function = "validate_story"))]
    pub story: Option<String>,
}

fn validate_story(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut e = ValidationError::new("validate_story");
        e.message = Some(Cow::from("Story required"));
        return Err(e);
    }

    return Ok(());
}

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct GenerateStoryDto {
    #[validate(
        required(message = "Prompt required"),
        custom(function = "validate_prompt")
    )]
    pub prompt: Option<String>,
}

fn validate_prompt(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut e = ValidationError::new("validate_prompt");
        e.message = Some(Cow::from("Prompt required"));
        return Err(e);
    }

    return Ok(());
}

pub mod generate_story_dto;

pub mod upstream_story_response;

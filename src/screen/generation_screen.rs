use super::{
    client::ScreenClient,
    state::{Command, ScreenState},
};

/// Drives a [`ScreenState`] against the backend.
pub struct GenerationScreen {
    state: ScreenState,
    client: ScreenClient,
}

impl GenerationScreen {
    pub fn new(client: ScreenClient) -> Self {
        Self {
            state: ScreenState::default(),
            client,
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn edit_prompt(&mut self, text: impl Into<String>) {
        self.state = std::mem::take(&mut self.state).edit_prompt(text);
    }

    pub async fn submit(&mut self) {
        let (state, command) = std::mem::take(&mut self.state).submit();
        self.state = state;
        self.run(command).await;
    }

    pub async fn regenerate(&mut self) {
        let (state, command) = std::mem::take(&mut self.state).regenerate();
        self.state = state;
        self.run(command).await;
    }

    pub async fn generate_comic(&mut self) {
        let (state, command) = std::mem::take(&mut self.state).generate_comic();
        self.state = state;
        self.run(command).await;
    }

    async fn run(&mut self, command: Option<Command>) {
        let Some(command) = command else {
            return;
        };

        match command {
            Command::GenerateStory { prompt } => {
                let result = self.client.generate_story(&prompt).await;
                let state = std::mem::take(&mut self.state);

                self.state = match result {
                    Ok(story) => state.story_received(story),
                    Err(e) => {
                        tracing::warn!("story request failed: {}", e);
                        state.story_failed()
                    }
                };
            }
            Command::GenerateComic { story } => {
                let result = self.client.generate_comic(&story).await;
                let state = std::mem::take(&mut self.state);

                self.state = match result {
                    Ok(image_url) => state.comic_received(image_url),
                    Err(e) => {
                        tracing::warn!("comic request failed: {}", e);
                        state.comic_failed()
                    }
                };
            }
        }
    }
}

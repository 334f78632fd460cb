use regex::Regex;

pub const REGENERATE_SUFFIX: &str = "\n\nRegenerate the story with more dramatic details.";
pub const STORY_ERROR: &str = "Something went wrong while generating the story.";
pub const COMIC_ERROR: &str = "Something went wrong while generating the comic image.";

lazy_static! {
    static ref SENTENCE_BREAK: Regex = Regex::new(r"\.\s+").unwrap();
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Ready,
    SubmittingImage,
    Complete,
}

/// Backend call requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GenerateStory { prompt: String },
    GenerateComic { story: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    prompt: String,
    last_submitted: Option<String>,
    story: Option<String>,
    image_url: Option<String>,
    error: Option<String>,
    phase: Phase,
    pending_prompt: Option<String>,
}

impl ScreenState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn last_submitted(&self) -> Option<&str> {
        self.last_submitted.as_deref()
    }

    pub fn story(&self) -> Option<&str> {
        self.story.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, Phase::Submitting | Phase::SubmittingImage)
    }

    /// Story text broken into one sentence per line.
    pub fn formatted_story(&self) -> Option<String> {
        self.story
            .as_deref()
            .map(|story| SENTENCE_BREAK.replace_all(story, ".\n").into_owned())
    }

    pub fn edit_prompt(mut self, text: impl Into<String>) -> Self {
        self.prompt = text.into();
        self
    }

    /// Submits the prompt currently in the input.
    pub fn submit(self) -> (Self, Option<Command>) {
        let prompt = self.prompt.clone();
        self.submit_with(prompt)
    }

    pub fn submit_with(mut self, prompt: String) -> (Self, Option<Command>) {
        if self.is_in_flight() || prompt.trim().is_empty() {
            return (self, None);
        }

        self.error = None;
        self.image_url = None;
        self.phase = Phase::Submitting;
        self.pending_prompt = Some(prompt.clone());

        (self, Some(Command::GenerateStory { prompt }))
    }

    /// Resubmits the last submitted prompt with [`REGENERATE_SUFFIX`] appended.
    pub fn regenerate(self) -> (Self, Option<Command>) {
        let Some(last) = self.last_submitted.clone() else {
            return (self, None);
        };

        let prompt = format!("{}{}", last, REGENERATE_SUFFIX);
        self.submit_with(prompt)
    }

    pub fn story_received(mut self, story: String) -> Self {
        if self.phase != Phase::Submitting {
            return self;
        }

        self.story = Some(story);
        self.last_submitted = self.pending_prompt.take();
        self.phase = Phase::Ready;
        self
    }

    pub fn story_failed(mut self) -> Self {
        if self.phase != Phase::Submitting {
            return self;
        }

        self.error = Some(STORY_ERROR.to_string());
        self.pending_prompt = None;
        self.phase = if self.story.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        };
        self
    }

    pub fn generate_comic(mut self) -> (Self, Option<Command>) {
        if self.is_in_flight() {
            return (self, None);
        }

        let Some(story) = self.story.clone() else {
            return (self, None);
        };

        self.error = None;
        self.phase = Phase::SubmittingImage;

        (self, Some(Command::GenerateComic { story }))
    }

    pub fn comic_received(mut self, image_url: String) -> Self {
        if self.phase != Phase::SubmittingImage {
            return self;
        }

        self.image_url = Some(image_url);
        self.phase = Phase::Complete;
        self
    }

    pub fn comic_failed(mut self) -> Self {
        if self.phase != Phase::SubmittingImage {
            return self;
        }

        self.error = Some(COMIC_ERROR.to_string());
        self.phase = if self.image_url.is_some() {
            Phase::Complete
        } else {
            Phase::Ready
        };
        self
    }
}

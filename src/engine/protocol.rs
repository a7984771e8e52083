use crate::engine::story_client::ApiConfig;
use crate::model::request::GenerateStoryRequest;
use crate::model::story::Story;

pub enum EngineCommand {
    GenerateStory {
        request_id: u64,
        request: GenerateStoryRequest,
    },
    RunGame,
    Configure(ApiConfig),
}

/// Every `GenerateStory` gets exactly one of the two responses back.
#[derive(Debug)]
pub enum EngineResponse {
    StoryGenerated {
        request_id: u64,
        story: Story,
    },

    GenerationFailed {
        request_id: u64,
        error: String,
    },
}

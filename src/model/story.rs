use serde::Deserialize;

/// Story returned by the generation endpoint. Read-only once received.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Story {
    pub intro: String,
    pub stages: Vec<StoryStage>,
    pub good_ending: String,
    pub bad_ending: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoryStage {
    pub description: String,
    pub success_message: String,
    pub failure_message: String,
}

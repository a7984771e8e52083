use std::sync::mpsc::{Receiver, Sender};

use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::story_client::StoryBackend;

/// Background worker that performs the HTTP calls for the form.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    backend: Box<dyn StoryBackend>,
}

impl Engine {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        backend: Box<dyn StoryBackend>,
    ) -> Self {
        Self { rx, tx, backend }
    }

    /// Runs until the UI side hangs up.
    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::GenerateStory { request_id, request } => {
                    let response = match self.backend.generate_story(&request) {
                        Ok(story) => {
                            tracing::info!(request_id, stages = story.stages.len(), "story generated");
                            EngineResponse::StoryGenerated { request_id, story }
                        }
                        Err(e) => {
                            tracing::error!(request_id, error = %e, "error generating story");
                            EngineResponse::GenerationFailed {
                                request_id,
                                error: e.to_string(),
                            }
                        }
                    };

                    if self.tx.send(response).is_err() {
                        break;
                    }
                }

                EngineCommand::RunGame => match self.backend.run_game() {
                    Ok(body) => tracing::info!(response = %body, "run action response"),
                    Err(e) => tracing::error!(error = %e, "error running action"),
                },

                EngineCommand::Configure(config) => {
                    tracing::info!(base_url = %config.base_url, "backend reconfigured");
                    self.backend.configure(config);
                }
            }
        }

        tracing::debug!("engine stopped");
    }
}

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::story_client::ApiConfig;
use crate::model::form_state::FormState;
use crate::model::story::Story;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Completed,
}

/// Form state plus the submission workflow, independent of any widgets.
///
/// The submission lock is held only while a generation request is out.
/// Whatever the worker answers, success or failure, releases it.
pub struct FormController {
    pub form: FormState,
    story: Option<Story>,
    in_flight: Option<u64>,
    next_request_id: u64,

    cmd_tx: Sender<EngineCommand>,
    resp_rx: Receiver<EngineResponse>,
}

impl FormController {
    pub fn new(cmd_tx: Sender<EngineCommand>, resp_rx: Receiver<EngineResponse>) -> Self {
        Self {
            form: FormState::default(),
            story: None,
            in_flight: None,
            next_request_id: 1,
            cmd_tx,
            resp_rx,
        }
    }

    pub fn story(&self) -> Option<&Story> {
        self.story.as_ref()
    }

    pub fn submission_locked(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn phase(&self) -> Phase {
        match (self.in_flight, &self.story) {
            (Some(_), _) => Phase::Submitting,
            (None, Some(_)) => Phase::Completed,
            (None, None) => Phase::Idle,
        }
    }

    /// Starts a generation request. Returns false if one is already out.
    pub fn submit(&mut self) -> bool {
        if let Some(request_id) = self.in_flight {
            tracing::debug!(request_id, "submission locked, ignoring submit");
            return false;
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(request_id);

        tracing::info!(
            request_id,
            theme = %self.form.theme(),
            stages = self.form.stages().len(),
            "submitting story request"
        );

        let cmd = EngineCommand::GenerateStory {
            request_id,
            request: self.form.to_request(),
        };
        if self.cmd_tx.send(cmd).is_err() {
            tracing::error!(request_id, "engine is gone, story request dropped");
            self.in_flight = None;
            return false;
        }

        true
    }

    pub fn run_game(&self) {
        if self.story.is_none() {
            tracing::debug!("no story yet, ignoring run");
            return;
        }
        if self.cmd_tx.send(EngineCommand::RunGame).is_err() {
            tracing::error!("engine is gone, run request dropped");
        }
    }

    pub fn configure(&self, config: ApiConfig) {
        if self.cmd_tx.send(EngineCommand::Configure(config)).is_err() {
            tracing::error!("engine is gone, configuration dropped");
        }
    }

    /// Clears form, story and lock. A request still in flight is forgotten;
    /// its answer will be dropped when it arrives.
    pub fn reset(&mut self) {
        self.form.reset();
        self.story = None;
        self.in_flight = None;
    }

    pub fn fill_demo(&mut self) {
        self.form.fill_demo();
    }

    /// Drains worker responses. Returns true if anything was applied.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.resp_rx.try_recv() {
                Ok(resp) => changed |= self.handle_response(resp),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if let Some(request_id) = self.in_flight.take() {
                        tracing::error!(request_id, "engine stopped, releasing submission lock");
                        changed = true;
                    }
                    break;
                }
            }
        }
        changed
    }

    fn handle_response(&mut self, resp: EngineResponse) -> bool {
        let request_id = match &resp {
            EngineResponse::StoryGenerated { request_id, .. }
            | EngineResponse::GenerationFailed { request_id, .. } => *request_id,
        };

        if self.in_flight != Some(request_id) {
            tracing::debug!(request_id, "dropping stale response");
            return false;
        }
        self.in_flight = None;

        match resp {
            EngineResponse::StoryGenerated { story, .. } => {
                self.story = Some(story);
            }
            EngineResponse::GenerationFailed { error, .. } => {
                tracing::debug!(request_id, %error, "generation failed, submission unlocked");
            }
        }
        true
    }
}

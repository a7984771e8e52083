use crate::model::number_input::NumberInput;
use crate::model::request::GenerateStoryRequest;

pub const DEMO_THEME: &str = "Escape from a submarine";
pub const DEMO_STAGE: &str = "There is a box with 5 switches, each connected to a light. \
Each light can be different colors. Make all the lights match by flipping switches.";
pub const DEMO_PLAYERS: i64 = 3;
pub const DEMO_TIME_LIMIT_MIN: i64 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Everything the user has typed into the form.
///
/// Setters replace fields wholesale and never validate: an empty theme or a
/// `NotANumber` player count goes to the backend as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    theme: String,
    difficulty: Option<Difficulty>,
    /// Never empty.
    stages: Vec<String>,
    num_players: NumberInput,
    time_limit_min: NumberInput,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            theme: String::new(),
            difficulty: None,
            stages: vec![String::new()],
            num_players: NumberInput::Unset,
            time_limit_min: NumberInput::Unset,
        }
    }
}

impl FormState {
    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn stages(&self) -> &[String] {
        &self.stages
    }

    pub fn num_players(&self) -> NumberInput {
        self.num_players
    }

    pub fn time_limit_min(&self) -> NumberInput {
        self.time_limit_min
    }

    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.theme = theme.into();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = Some(difficulty);
    }

    pub fn add_stage(&mut self) {
        self.stages.push(String::new());
    }

    pub fn edit_stage_at(&mut self, index: usize, value: impl Into<String>) {
        match self.stages.get_mut(index) {
            Some(stage) => *stage = value.into(),
            None => tracing::debug!(index, len = self.stages.len(), "ignoring edit of missing stage"),
        }
    }

    pub fn set_num_players(&mut self, raw: &str) {
        self.num_players = NumberInput::parse(raw);
    }

    pub fn set_time_limit(&mut self, raw: &str) {
        self.time_limit_min = NumberInput::parse(raw);
    }

    /// Back to a blank form. Numbers become zero rather than unset and the
    /// difficulty drops back to Easy.
    pub fn reset(&mut self) {
        *self = Self {
            theme: String::new(),
            difficulty: Some(Difficulty::Easy),
            stages: vec![String::new()],
            num_players: NumberInput::Value(0),
            time_limit_min: NumberInput::Value(0),
        };
    }

    pub fn fill_demo(&mut self) {
        *self = Self {
            theme: DEMO_THEME.to_string(),
            difficulty: Some(Difficulty::Hard),
            stages: vec![DEMO_STAGE.to_string()],
            num_players: NumberInput::Value(DEMO_PLAYERS),
            time_limit_min: NumberInput::Value(DEMO_TIME_LIMIT_MIN),
        };
    }

    pub fn to_request(&self) -> GenerateStoryRequest {
        GenerateStoryRequest {
            theme: self.theme.clone(),
            difficulty: self
                .difficulty
                .map(|d| d.as_str().to_string())
                .unwrap_or_default(),
            stage_physical_descriptions: self.stages.clone(),
            num_players: self.num_players,
            time_limit_min: self.time_limit_min,
        }
    }
}

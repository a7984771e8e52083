use serde::{Deserialize, Serialize};

use crate::engine::story_client::{
    ApiConfig, DEFAULT_API_BASE_URL, DEFAULT_GENERATE_PATH, DEFAULT_RUN_GAME_PATH,
    DEFAULT_TIMEOUT_SECS,
};

pub const BASE_URL_ENV: &str = "STORY_API_BASE_URL";

pub const UI_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.75..=2.0;
pub const TIMEOUT_SECS_RANGE: std::ops::RangeInclusive<u64> = 1..=600;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub ui_scale: f32,

    pub api_base_url: String,
    pub generate_path: String,
    pub run_game_path: String,
    pub request_timeout_secs: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            api_base_url: DEFAULT_API_BASE_URL.into(),
            generate_path: DEFAULT_GENERATE_PATH.into(),
            run_game_path: DEFAULT_RUN_GAME_PATH.into(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppSettings {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_base_url.clone(),
            generate_path: self.generate_path.clone(),
            run_game_path: self.run_game_path.clone(),
            timeout_secs: self.request_timeout_secs,
        }
    }

    /// Pulls values edited outside the settings window back into the
    /// ranges the window allows.
    pub fn clamped(mut self) -> Self {
        self.ui_scale = if self.ui_scale.is_finite() {
            self.ui_scale.clamp(*UI_SCALE_RANGE.start(), *UI_SCALE_RANGE.end())
        } else {
            AppSettings::default().ui_scale
        };
        self.request_timeout_secs = self
            .request_timeout_secs
            .clamp(*TIMEOUT_SECS_RANGE.start(), *TIMEOUT_SECS_RANGE.end());
        self
    }

    /// Environment wins over the saved base URL.
    pub fn with_env_overrides(mut self) -> Self {
        self.apply_base_url_override(std::env::var(BASE_URL_ENV).ok());
        self
    }

    fn apply_base_url_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
    }
}

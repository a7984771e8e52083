use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::ui::settings::AppSettings;

const APP_DIR: &str = "escape_room_story_form";
const SETTINGS_FILE: &str = "settings.json";

pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push(SETTINGS_FILE);
    path
}

/// Missing or unreadable settings fall back to defaults.
pub fn load_settings() -> AppSettings {
    let path = settings_path();
    match read_settings(&path) {
        Ok(settings) => settings,
        Err(e) => {
            if path.exists() {
                tracing::warn!(path = %path.display(), error = %e, "using default settings");
            }
            AppSettings::default()
        }
    }
}

pub fn save_settings(settings: &AppSettings) -> anyhow::Result<()> {
    write_settings(&settings_path(), settings)
}

fn read_settings(path: &Path) -> anyhow::Result<AppSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let settings: AppSettings =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(settings.clamped())
}

fn write_settings(path: &Path, settings: &AppSettings) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

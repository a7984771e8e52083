mod engine;
mod model;
mod ui;

use tracing_subscriber::EnvFilter;

use crate::ui::settings_io::load_settings;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("escape_room_story_form=info")),
        )
        .init();

    let settings = load_settings().with_env_overrides();
    tracing::info!(base_url = %settings.api_base_url, "starting story form");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([520.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Escape Room Story Generator",
        options,
        Box::new(move |_cc| Ok(Box::new(ui::app::StoryFormApp::new(settings)))),
    )
    .map_err(|e| anyhow::anyhow!("window closed with error: {e}"))
}

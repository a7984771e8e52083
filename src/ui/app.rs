use eframe::egui;
use std::sync::mpsc;
use std::time::Duration;

use crate::engine::engine::Engine;
use crate::engine::story_client::HttpStoryClient;
use crate::ui::controller::{FormController, Phase};
use crate::ui::form_panel::{draw_form, NumberBuffers};
use crate::ui::settings::{AppSettings, TIMEOUT_SECS_RANGE, UI_SCALE_RANGE};
use crate::ui::settings_io::save_settings;
use crate::ui::story_panel::draw_story;

const FORM_MAX_WIDTH: f32 = 448.0;

pub struct StoryFormApp {
    controller: FormController,
    numbers: NumberBuffers,

    settings: AppSettings,
    show_settings: bool,
}

impl StoryFormApp {
    pub fn new(settings: AppSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        let backend = HttpStoryClient::new(settings.api_config());
        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx, Box::new(backend));
            engine.run();
        });

        let controller = FormController::new(cmd_tx, resp_rx);
        let mut numbers = NumberBuffers::default();
        numbers.sync_from(&controller);

        Self {
            controller,
            numbers,
            settings,
            show_settings: false,
        }
    }

    fn draw_settings_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings;

        egui::Window::new("Settings")
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("UI Scale");
                ui.add(egui::Slider::new(&mut self.settings.ui_scale, UI_SCALE_RANGE));

                ui.separator();
                ui.label("API base URL");
                ui.text_edit_singleline(&mut self.settings.api_base_url);
                ui.label("Generate path");
                ui.text_edit_singleline(&mut self.settings.generate_path);
                ui.label("Run path");
                ui.text_edit_singleline(&mut self.settings.run_game_path);
                ui.label("Timeout (seconds)");
                ui.add(egui::DragValue::new(&mut self.settings.request_timeout_secs).range(TIMEOUT_SECS_RANGE));

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Apply").clicked() {
                        self.controller.configure(self.settings.api_config());
                    }
                    if ui.button("Save").clicked() {
                        self.controller.configure(self.settings.api_config());
                        if let Err(e) = save_settings(&self.settings) {
                            tracing::warn!(error = %e, "could not save settings");
                        }
                    }
                });
            });

        self.show_settings = open;
    }
}

impl eframe::App for StoryFormApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_zoom_factor(self.settings.ui_scale);

        self.controller.poll();
        if self.controller.phase() == Phase::Submitting {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.selectable_label(self.show_settings, "Settings").clicked() {
                    self.show_settings = !self.show_settings;
                }
                if self.controller.phase() == Phase::Submitting {
                    ui.spinner();
                }
            });
        });

        if self.show_settings {
            self.draw_settings_window(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(FORM_MAX_WIDTH);

                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                        draw_form(ui, &mut self.controller, &mut self.numbers);

                        if let Some(story) = self.controller.story() {
                            ui.add_space(24.0);
                            draw_story(ui, story);
                        }
                    });
                });
            });
        });
    }
}

use eframe::egui;

use crate::model::form_state::Difficulty;
use crate::ui::controller::FormController;

/// Raw text behind the two number inputs. Parsed into the form on every
/// edit, refreshed from the form after reset or demo.
#[derive(Default)]
pub struct NumberBuffers {
    pub num_players: String,
    pub time_limit: String,
}

impl NumberBuffers {
    pub fn sync_from(&mut self, controller: &FormController) {
        self.num_players = controller.form.num_players().display_text();
        self.time_limit = controller.form.time_limit_min().display_text();
    }
}

pub fn draw_form(ui: &mut egui::Ui, controller: &mut FormController, numbers: &mut NumberBuffers) {
    let full_width = ui.available_width();

    ui.vertical_centered(|ui| {
        ui.heading("Generate Your Escape Room Story");
    });
    ui.add_space(12.0);

    let mut theme = controller.form.theme().to_string();
    if ui
        .add_sized(
            [full_width, 24.0],
            egui::TextEdit::singleline(&mut theme).hint_text("Enter Theme"),
        )
        .changed()
    {
        controller.form.set_theme(theme);
    }

    let selected = controller
        .form
        .difficulty()
        .map(|d| d.as_str())
        .unwrap_or("Select Difficulty");
    egui::ComboBox::from_id_salt("difficulty")
        .width(full_width)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for d in Difficulty::ALL {
                let is_selected = controller.form.difficulty() == Some(d);
                if ui.selectable_label(is_selected, d.as_str()).clicked() {
                    controller.form.set_difficulty(d);
                }
            }
        });

    let mut edited: Option<(usize, String)> = None;
    for (i, stage) in controller.form.stages().iter().enumerate() {
        let mut text = stage.clone();
        let response = ui.add_sized(
            [full_width, 24.0],
            egui::TextEdit::singleline(&mut text).hint_text(format!("Stage {} Description", i + 1)),
        );
        if response.changed() {
            edited = Some((i, text));
        }
    }
    if let Some((i, text)) = edited {
        controller.form.edit_stage_at(i, text);
    }

    ui.vertical_centered(|ui| {
        if ui.button("Add Stage").clicked() {
            controller.form.add_stage();
        }
    });

    if ui
        .add_sized(
            [full_width, 24.0],
            egui::TextEdit::singleline(&mut numbers.num_players).hint_text("Number of Players"),
        )
        .changed()
    {
        controller.form.set_num_players(&numbers.num_players);
    }

    if ui
        .add_sized(
            [full_width, 24.0],
            egui::TextEdit::singleline(&mut numbers.time_limit).hint_text("Time Limit (minutes)"),
        )
        .changed()
    {
        controller.form.set_time_limit(&numbers.time_limit);
    }

    ui.add_space(8.0);

    if ui.add_sized([full_width, 28.0], egui::Button::new("Fill Demo")).clicked() {
        controller.fill_demo();
        numbers.sync_from(controller);
    }

    let can_submit = !controller.submission_locked();
    if ui
        .add_enabled_ui(can_submit, |ui| {
            ui.add_sized([full_width, 28.0], egui::Button::new("Generate Story"))
        })
        .inner
        .clicked()
    {
        controller.submit();
    }

    let has_story = controller.story().is_some();
    if ui
        .add_enabled_ui(has_story, |ui| {
            ui.add_sized([full_width, 28.0], egui::Button::new("Run"))
        })
        .inner
        .clicked()
    {
        controller.run_game();
    }

    if ui
        .add_enabled_ui(has_story, |ui| {
            ui.add_sized([full_width, 28.0], egui::Button::new("Reset"))
        })
        .inner
        .clicked()
    {
        controller.reset();
        numbers.sync_from(controller);
    }
}

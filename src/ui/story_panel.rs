use eframe::egui;

use crate::model::story::Story;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryLine {
    Heading(String),
    SubHeading(String),
    Labeled { label: String, text: String },
    Plain(String),
}

/// Flattens a story into display order. Text is kept verbatim.
pub fn story_lines(story: &Story) -> Vec<StoryLine> {
    let mut lines = vec![
        StoryLine::Heading("Generated Story".into()),
        labeled("Intro", &story.intro),
        StoryLine::SubHeading("Stages:".into()),
    ];

    for (i, stage) in story.stages.iter().enumerate() {
        lines.push(StoryLine::Plain(format!("Stage {}: {}", i + 1, stage.description)));
        lines.push(StoryLine::Plain(format!("Success Message: {}", stage.success_message)));
        lines.push(StoryLine::Plain(format!("Failure Message: {}", stage.failure_message)));
    }

    lines.push(labeled("Good Ending", &story.good_ending));
    lines.push(labeled("Bad Ending", &story.bad_ending));
    lines
}

fn labeled(label: &str, text: &str) -> StoryLine {
    StoryLine::Labeled {
        label: label.into(),
        text: text.into(),
    }
}

pub fn draw_story(ui: &mut egui::Ui, story: &Story) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        for line in story_lines(story) {
            match line {
                StoryLine::Heading(t) => {
                    ui.heading(t);
                }
                StoryLine::SubHeading(t) => {
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(t).strong());
                }
                StoryLine::Labeled { label, text } => {
                    ui.add_space(4.0);
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(format!("{label}:")).strong());
                        ui.label(text);
                    });
                }
                StoryLine::Plain(t) => {
                    ui.label(t);
                }
            }
        }
    });
}

pub mod app;
pub mod controller;
pub mod form_panel;
pub mod settings;
pub mod settings_io;
pub mod story_panel;

pub mod form_state;
pub mod number_input;
pub mod request;
pub mod story;

use serde::Serialize;

use crate::model::number_input::NumberInput;

/// Body of the story generation call.
///
/// Unset numbers are left out of the JSON entirely; `NotANumber` is sent
/// as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateStoryRequest {
    pub theme: String,
    pub difficulty: String,
    pub stage_physical_descriptions: Vec<String>,
    #[serde(skip_serializing_if = "NumberInput::is_unset")]
    pub num_players: NumberInput,
    #[serde(skip_serializing_if = "NumberInput::is_unset")]
    pub time_limit_min: NumberInput,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::model::form_state::{Difficulty, FormState};

    #[test]
    fn submarine_form_builds_exact_body() {
        let mut form = FormState::default();
        form.set_theme("Submarine");
        form.set_difficulty(Difficulty::Hard);
        form.edit_stage_at(0, "desc");
        form.set_num_players("3");
        form.set_time_limit("25");

        let body = serde_json::to_value(form.to_request()).unwrap();

        assert_eq!(
            body,
            json!({
                "theme": "Submarine",
                "difficulty": "Hard",
                "stage_physical_descriptions": ["desc"],
                "num_players": 3,
                "time_limit_min": 25
            })
        );
    }

    #[test]
    fn untouched_form_omits_numbers() {
        let body = serde_json::to_value(FormState::default().to_request()).unwrap();

        assert_eq!(
            body,
            json!({
                "theme": "",
                "difficulty": "",
                "stage_physical_descriptions": [""]
            })
        );
    }

    #[test]
    fn unparseable_numbers_go_out_as_null() {
        let mut form = FormState::default();
        form.set_num_players("many");
        form.set_time_limit("");

        let body = serde_json::to_value(form.to_request()).unwrap();

        assert_eq!(body["num_players"], serde_json::Value::Null);
        assert_eq!(body["time_limit_min"], serde_json::Value::Null);
        assert!(body.as_object().unwrap().contains_key("num_players"));
    }
}

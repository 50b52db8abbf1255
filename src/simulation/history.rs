use serde::{Deserialize, Serialize};

use crate::data::scenarios::{Choice, Scenario};

/// One resolved decision. `turn` is the turn the choice was made on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub turn: u32,
    pub scenario_title: String,
    pub scenario_description: String,
    pub choice_label: String,
    pub result_text: String,
}

impl HistoryEntry {
    pub fn record(turn: u32, scenario: &Scenario, choice: &Choice) -> Self {
        Self {
            turn,
            scenario_title: scenario.title.clone(),
            scenario_description: scenario.description.clone(),
            choice_label: choice.label.clone(),
            result_text: choice.impact.narrative_result.clone(),
        }
    }
}

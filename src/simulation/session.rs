use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data::locale::Language;
use crate::data::scenarios::Scenario;
use crate::simulation::history::HistoryEntry;
use crate::simulation::outcome::GameState;
use crate::simulation::stats::GameStats;

/// The whole mutable state of one playthrough. This is also the save format.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub stats: GameStats,
    pub game_state: GameState,
    pub current_scenario: Option<Scenario>,
    #[serde(default)]
    pub shown_scenario_titles: Vec<String>,
    #[serde(default)]
    pub last_result: String,
    /// Most recent first.
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub language: Language,
}

impl GameSession {
    /// Opening position for a new playthrough in `language`.
    pub fn fresh(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }
}

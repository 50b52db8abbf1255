use serde::{Deserialize, Serialize};

use crate::data::rules::{DEFEAT_THRESHOLD, VICTORY_THRESHOLD, VICTORY_TURN};
use crate::simulation::stats::GameStats;

/// Lifecycle of a single playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    #[default]
    Start,
    Playing,
    Result,
    GameOver,
    Victory,
}

impl GameState {
    pub fn as_str(self) -> &'static str {
        match self {
            GameState::Start => "START",
            GameState::Playing => "PLAYING",
            GameState::Result => "RESULT",
            GameState::GameOver => "GAME_OVER",
            GameState::Victory => "VICTORY",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::GameOver | GameState::Victory)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State after a resolved choice. Defeat wins over victory; territory never
/// counts toward defeat.
pub fn evaluate_outcome(stats: &GameStats) -> GameState {
    if stats.military <= DEFEAT_THRESHOLD
        || stats.diplomacy <= DEFEAT_THRESHOLD
        || stats.economy <= DEFEAT_THRESHOLD
    {
        return GameState::GameOver;
    }
    if stats.turn >= VICTORY_TURN
        && stats.military >= VICTORY_THRESHOLD
        && stats.diplomacy >= VICTORY_THRESHOLD
        && stats.economy >= VICTORY_THRESHOLD
    {
        return GameState::Victory;
    }
    GameState::Result
}

use thiserror::Error;

use crate::data::locale::Language;
use crate::persistence::StoreError;
use crate::simulation::outcome::GameState;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no scenarios available for language {language}")]
    ContentUnavailable { language: Language },
    #[error("cannot {operation} while game is {state}")]
    InvalidState {
        operation: &'static str,
        state: GameState,
    },
    #[error("current scenario has no choice {choice_id}")]
    UnknownChoice { choice_id: String },
    #[error("failed to read saved data: {0}")]
    Deserialization(#[source] serde_json::Error),
    #[error("failed to encode save data: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("another operation is already running on this session")]
    SessionBusy,
}

// Re-export core modules for use by the binary or other consumers
pub mod core;
pub mod data;
pub mod persistence;
pub mod simulation;
pub mod systems;
pub mod ui;

// Expose the main Game wrapper and types needed for interaction
pub use crate::core::error::GameError;
pub use crate::core::shared::SharedGame;
pub use crate::core::world::{Game, TurnOutcome};
pub use crate::simulation::session::GameSession;

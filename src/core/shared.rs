use std::sync::{Arc, Mutex, TryLockError};

use bevy_utils::tracing::warn;

use crate::core::error::GameError;
use crate::core::world::Game;

/// A `Game` shared between threads. At most one operation runs at a time;
/// overlapping calls fail fast with `SessionBusy`.
#[derive(Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    pub fn with<T>(
        &self,
        op: impl FnOnce(&mut Game) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let mut game = match self.inner.try_lock() {
            Ok(game) => game,
            Err(TryLockError::WouldBlock) => {
                warn!("session busy, operation rejected");
                return Err(GameError::SessionBusy);
            }
            // Operations commit whole values, so a poisoned game is still usable.
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        };
        op(&mut game)
    }
}

use crate::core::error::GameError;
use crate::data::locale::Theme;
use crate::persistence::{KeyValueStore, ACHIEVEMENTS_KEY, SAVE_KEY, THEME_KEY};
use crate::simulation::achievements::Achievement;
use crate::simulation::session::GameSession;

pub fn session_to_json(session: &GameSession) -> Result<String, GameError> {
    serde_json::to_string(session).map_err(GameError::Serialization)
}

pub fn session_from_json(raw: &str) -> Result<GameSession, GameError> {
    serde_json::from_str(raw).map_err(GameError::Deserialization)
}

pub fn achievements_to_json(achievements: &[Achievement]) -> Result<String, GameError> {
    serde_json::to_string(achievements).map_err(GameError::Serialization)
}

pub fn achievements_from_json(raw: &str) -> Result<Vec<Achievement>, GameError> {
    serde_json::from_str(raw).map_err(GameError::Deserialization)
}

/// Both blobs as stored, parsed before anything live is touched.
pub fn read_saved(
    store: &dyn KeyValueStore,
) -> Result<Option<(GameSession, Vec<Achievement>)>, GameError> {
    let Some(raw_session) = store.get(SAVE_KEY)? else {
        return Ok(None);
    };
    let session = session_from_json(&raw_session)?;
    let achievements = read_achievements(store)?;
    Ok(Some((session, achievements)))
}

pub fn read_achievements(store: &dyn KeyValueStore) -> Result<Vec<Achievement>, GameError> {
    match store.get(ACHIEVEMENTS_KEY)? {
        Some(raw) => achievements_from_json(&raw),
        None => Ok(Vec::new()),
    }
}

pub fn write_achievements(
    store: &mut dyn KeyValueStore,
    achievements: &[Achievement],
) -> Result<(), GameError> {
    let blob = achievements_to_json(achievements)?;
    store.set(ACHIEVEMENTS_KEY, &blob)?;
    Ok(())
}

/// Snapshot and ledger go out in one `set_many`, so a transactional store
/// never pairs a new snapshot with a stale ledger.
pub fn write_saved(
    store: &mut dyn KeyValueStore,
    session: &GameSession,
    achievements: &[Achievement],
) -> Result<(), GameError> {
    let session_blob = session_to_json(session)?;
    let achievements_blob = achievements_to_json(achievements)?;
    store.set_many(&[
        (SAVE_KEY, session_blob.as_str()),
        (ACHIEVEMENTS_KEY, achievements_blob.as_str()),
    ])?;
    Ok(())
}

/// Stored theme, falling back to the default for absent or unknown values.
pub fn load_theme(store: &dyn KeyValueStore) -> Result<Theme, GameError> {
    Ok(store
        .get(THEME_KEY)?
        .and_then(|raw| raw.parse::<Theme>().ok())
        .unwrap_or_default())
}

pub fn save_theme(store: &mut dyn KeyValueStore, theme: Theme) -> Result<(), GameError> {
    store.set(THEME_KEY, theme.as_str())?;
    Ok(())
}

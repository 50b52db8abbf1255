pub mod memory;
pub mod repository;
pub mod sqlite;

pub use memory::MemoryStore;
pub use repository::{KeyValueStore, StoreError};
pub use sqlite::SqliteStore;

/// Serialized `GameSession`.
pub const SAVE_KEY: &str = "me_hegemony_save_v1";
/// Serialized achievement ledger (`Achievement[]`).
pub const ACHIEVEMENTS_KEY: &str = "me_hegemony_achievements";
pub const THEME_KEY: &str = "me_hegemony_theme";

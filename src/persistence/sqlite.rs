use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::persistence::repository::{KeyValueStore, StoreError};

const STORE_SCHEMA_VERSION: i64 = 1;

const STORE_DB_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS store_meta (
  id INTEGER PRIMARY KEY CHECK (id = 1),
  schema_version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS kv_store (
  key TEXT PRIMARY KEY,
  value TEXT NOT NULL
);
"#;

const UPSERT_SQL: &str = "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
 ON CONFLICT(key) DO UPDATE SET value = excluded.value";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        let store = Self { conn };
        store.conn.execute_batch(STORE_DB_SCHEMA)?;
        store.ensure_store_meta()?;
        Ok(store)
    }

    fn ensure_store_meta(&self) -> Result<(), StoreError> {
        let version = self
            .conn
            .query_row(
                "SELECT schema_version FROM store_meta WHERE id = 1",
                [],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;

        match version {
            Some(STORE_SCHEMA_VERSION) => Ok(()),
            Some(other) => Err(StoreError::InvalidData(format!(
                "store_meta version mismatch (found {}, expected {})",
                other, STORE_SCHEMA_VERSION
            ))),
            None => {
                self.conn.execute(
                    "INSERT INTO store_meta (id, schema_version) VALUES (1, ?1)",
                    params![STORE_SCHEMA_VERSION],
                )?;
                Ok(())
            }
        }
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(UPSERT_SQL, params![key, value])?;
        Ok(())
    }

    fn set_many(&mut self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        for (key, value) in entries {
            tx.execute(UPSERT_SQL, params![key, value])?;
        }
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("hegemony.db");
        {
            let mut store = SqliteStore::open(&path).expect("open");
            store.set("me_hegemony_theme", "light").expect("set");
            store.set("me_hegemony_theme", "dark").expect("set");
        }
        let store = SqliteStore::open(&path).expect("reopen");
        assert_eq!(
            store.get("me_hegemony_theme").expect("get").as_deref(),
            Some("dark")
        );
        assert_eq!(store.get("missing").expect("get"), None);
    }

    #[test]
    fn failed_batch_rolls_back() {
        let mut store = SqliteStore::open_in_memory().expect("open");
        store
            .set_many(&[("save", "old"), ("badges", "old")])
            .expect("first batch");
        store
            .conn
            .execute_batch(
                "CREATE TRIGGER reject_badges BEFORE UPDATE ON kv_store
                 WHEN NEW.key = 'badges'
                 BEGIN SELECT RAISE(ABORT, 'badges locked'); END;",
            )
            .expect("trigger");

        let result = store.set_many(&[("save", "new"), ("badges", "new")]);
        assert!(matches!(result, Err(StoreError::Sqlite(_))));
        assert_eq!(store.get("save").expect("get").as_deref(), Some("old"));
        assert_eq!(store.get("badges").expect("get").as_deref(), Some("old"));
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("future.db");
        {
            let conn = Connection::open(&path).expect("open");
            conn.execute_batch(STORE_DB_SCHEMA).expect("schema");
            conn.execute("INSERT INTO store_meta (id, schema_version) VALUES (1, 99)", [])
                .expect("meta");
        }
        assert!(matches!(
            SqliteStore::open(&path),
            Err(StoreError::InvalidData(_))
        ));
    }
}

use crate::errors::{HeadlinesError, HeadlinesResult};
use crate::storage::sqlite::SqliteStorage;
use crate::storage::traits::KeyValueStorage;

pub struct SqliteKeyValueStorage {
    storage: SqliteStorage,
}

impl SqliteKeyValueStorage {
    pub fn new(storage: SqliteStorage) -> Self {
        Self { storage }
    }
}

impl KeyValueStorage for SqliteKeyValueStorage {
    fn get(&self, key: &str) -> HeadlinesResult<Option<String>> {
        let conn = self.storage.connection()?;
        let mut stmt = conn.prepare("SELECT value FROM kv_store WHERE key = ?1")?;

        match stmt.query_row([key], |row| row.get(0)) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(HeadlinesError::from(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> HeadlinesResult<()> {
        let conn = self.storage.connection()?;
        conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
            (key, value),
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> HeadlinesResult<()> {
        let conn = self.storage.connection()?;
        conn.execute("DELETE FROM kv_store WHERE key = ?1", [key])?;
        Ok(())
    }
}

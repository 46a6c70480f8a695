//! `SQLite` database connection and key-value operations.
//!
//! The database is stored at `~/.focuswave/focuswave.db` and holds a single
//! `kv_store` table of JSON blobs.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::config::Paths;
use crate::error::FocusError;

use super::kv::KeyValueStore;
use super::migrations;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database under `paths`.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open(paths: &Paths) -> Result<Self, FocusError> {
        paths.ensure_dirs()?;
        Self::open_at(&paths.database)
    }

    /// Open the database at a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &std::path::Path) -> Result<Self, FocusError> {
        let conn = Connection::open(path).map_err(|e| {
            FocusError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, FocusError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            FocusError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    fn migrate(&self) -> Result<(), FocusError> {
        migrations::run(&self.conn)
    }

    #[cfg(test)]
    fn schema_version(&self) -> Result<i32, FocusError> {
        migrations::get_version(&self.conn)
    }
}

impl KeyValueStore for Database {
    fn load(&self, key: &str) -> Result<Option<String>, FocusError> {
        self.conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| FocusError::Database(format!("Failed to load {key}: {e}")))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), FocusError> {
        self.conn
            .execute(
                r"INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
                  ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, value, Utc::now().to_rfc3339()],
            )
            .map_err(|e| FocusError::Database(format!("Failed to save {key}: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.schema_version().unwrap() > 0);
    }

    #[test]
    fn test_open_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("fw"));

        let db = Database::open(&paths).unwrap();
        assert!(db.schema_version().unwrap() > 0);
        assert!(paths.database.exists());
    }

    #[test]
    fn test_load_missing_key() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.load("nothing").unwrap().is_none());
    }

    #[test]
    fn test_save_overwrites() {
        let db = Database::open_in_memory().unwrap();
        db.save("state", "{\"a\":1}").unwrap();
        db.save("state", "{\"a\":2}").unwrap();

        assert_eq!(db.load("state").unwrap().as_deref(), Some("{\"a\":2}"));
    }

    #[test]
    fn test_value_survives_reopen() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        {
            let db = Database::open_at(&db_path).unwrap();
            db.save("state", "persisted").unwrap();
        }

        let db = Database::open_at(&db_path).unwrap();
        assert_eq!(db.load("state").unwrap().as_deref(), Some("persisted"));
    }
}

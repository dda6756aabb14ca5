//! Database schema and connection management

use super::models::Collection;
use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// Document store backed by SQLite, one table per collection
pub struct DocumentStore {
    pub(crate) conn: Connection,
}

impl DocumentStore {
    /// Open (or create) the store at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "opening document store");
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Create a throwaway in-memory store
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        for collection in Collection::ALL {
            self.conn.execute(
                &format!(
                    "CREATE TABLE IF NOT EXISTS {} (
                        key TEXT PRIMARY KEY,
                        id INTEGER NOT NULL,
                        name TEXT,
                        body TEXT NOT NULL,
                        updated_at INTEGER NOT NULL
                    )",
                    collection.name()
                ),
                [],
            )?;
        }

        Ok(())
    }
}

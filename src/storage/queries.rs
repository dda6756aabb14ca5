//! Document read/write operations

use super::{models::*, schema::DocumentStore};
use crate::error::{MoneyballError, Result};
use rusqlite::{params, OptionalExtension};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::error;

impl DocumentSink for DocumentStore {
    /// Insert a document or replace every field of the existing one.
    ///
    /// Records without an identifier are rejected before the write. Store
    /// failures are logged with the record's name and id, then returned.
    fn upsert<D: Document>(&mut self, collection: Collection, doc: &D) -> Result<()> {
        let key = doc.document_key(collection)?;
        let id = doc
            .document_id()
            .ok_or_else(|| MoneyballError::MissingDocumentId {
                collection: collection.to_string(),
                name: doc.display_name(),
            })?;

        let result = self.write_document(collection, &key, id, doc);
        if let Err(e) = &result {
            error!(
                collection = %collection,
                name = %doc.display_name(),
                id = %key,
                error = %e,
                "failed to upsert document"
            );
        }
        result
    }
}

impl DocumentStore {
    fn write_document<D: Document>(
        &mut self,
        collection: Collection,
        key: &str,
        id: i64,
        doc: &D,
    ) -> Result<()> {
        let body = serde_json::to_string(doc)?;
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

        self.conn.execute(
            &format!(
                "INSERT OR REPLACE INTO {} (key, id, name, body, updated_at)
                 VALUES (?, ?, ?, ?, ?)",
                collection.name()
            ),
            params![key, id, doc.display_name(), body, now as i64],
        )?;
        Ok(())
    }

    /// Fetch one document by key
    pub fn get(&self, collection: Collection, key: &str) -> Result<Option<Value>> {
        let body: Option<String> = self
            .conn
            .query_row(
                &format!("SELECT body FROM {} WHERE key = ?", collection.name()),
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        match body {
            Some(b) => Ok(Some(serde_json::from_str(&b)?)),
            None => Ok(None),
        }
    }

    /// All documents of a collection, ordered by key
    pub fn list(&self, collection: Collection) -> Result<Vec<Value>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT body FROM {} ORDER BY key", collection.name()))?;

        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut docs = Vec::new();
        for row in rows {
            docs.push(serde_json::from_str(&row?)?);
        }
        Ok(docs)
    }

    /// Number of documents in a collection
    pub fn count(&self, collection: Collection) -> Result<u64> {
        let n: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", collection.name()),
            [],
            |row| row.get(0),
        )?;
        Ok(n as u64)
    }

    /// Every collection with its document count
    pub fn collections(&self) -> Result<Vec<(Collection, u64)>> {
        Collection::ALL
            .into_iter()
            .map(|c| -> Result<(Collection, u64)> { Ok((c, self.count(c)?)) })
            .collect()
    }
}

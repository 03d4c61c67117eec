//! Snippet storage operations backed by redb.

use crate::{db::tables::SNIPPETS, error::AppError, models::snippet::Snippet};
use chrono::{DateTime, Utc};
use redb::{ReadableDatabase, ReadableTable, ReadableTableMetadata};
use std::sync::Arc;

/// Accessor for the snippet table.
pub struct SnippetDb {
    db: Arc<redb::Database>,
}

fn deserialize_snippet(bytes: &[u8]) -> Result<Snippet, AppError> {
    Ok(bincode::deserialize(bytes)?)
}

impl SnippetDb {
    /// Initialize the snippet table if it does not exist yet.
    ///
    /// # Errors
    /// Returns an error when redb transaction/table initialization fails.
    pub fn new(db: Arc<redb::Database>) -> Result<Self, AppError> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(SNIPPETS)?;
        write_txn.commit()?;
        Ok(Self { db })
    }

    /// Insert a snippet created now.
    ///
    /// # Returns
    /// The new snippet id.
    ///
    /// # Errors
    /// Returns an error when serialization or storage fails.
    pub fn insert(&self, title: &str, content: &str, expires_days: i64) -> Result<u64, AppError> {
        self.insert_at(title, content, expires_days, Utc::now())
    }

    /// Insert a snippet with an explicit creation timestamp.
    ///
    /// The id is one past the current highest id, assigned inside the write
    /// transaction so concurrent inserts never share an id.
    ///
    /// # Returns
    /// The new snippet id (first id is 1).
    ///
    /// # Errors
    /// Returns an error when serialization or storage fails, or the id space
    /// is exhausted.
    pub fn insert_at(
        &self,
        title: &str,
        content: &str,
        expires_days: i64,
        created: DateTime<Utc>,
    ) -> Result<u64, AppError> {
        let write_txn = self.db.begin_write()?;
        let id = {
            let mut snippets = write_txn.open_table(SNIPPETS)?;
            let last_id = match snippets.last()? {
                Some((key, _)) => key.value(),
                None => 0,
            };
            let id = last_id
                .checked_add(1)
                .ok_or_else(|| AppError::Storage("Snippet id space exhausted".to_string()))?;
            let snippet = Snippet::new(id, title, content, expires_days, created);
            let encoded = bincode::serialize(&snippet)?;
            snippets.insert(id, encoded.as_slice())?;
            id
        };
        write_txn.commit()?;
        tracing::debug!(snippet_id = id, expires_days, "Inserted snippet");
        Ok(id)
    }

    /// Fetch an unexpired snippet by id.
    ///
    /// # Returns
    /// `Ok(None)` when the id is unknown or the snippet has expired.
    ///
    /// # Errors
    /// Returns an error when storage access or deserialization fails.
    pub fn get(&self, id: u64) -> Result<Option<Snippet>, AppError> {
        self.get_at(id, Utc::now())
    }

    /// [`SnippetDb::get`] evaluated against an explicit clock.
    pub fn get_at(&self, id: u64, now: DateTime<Utc>) -> Result<Option<Snippet>, AppError> {
        let read_txn = self.db.begin_read()?;
        let snippets = read_txn.open_table(SNIPPETS)?;
        let Some(guard) = snippets.get(id)? else {
            return Ok(None);
        };
        let snippet = deserialize_snippet(guard.value())?;
        Ok((!snippet.is_expired_at(now)).then_some(snippet))
    }

    /// List unexpired snippets, newest (highest id) first.
    ///
    /// # Arguments
    /// - `limit`: Maximum rows to return.
    ///
    /// # Errors
    /// Returns an error when storage access or deserialization fails.
    pub fn latest(&self, limit: usize) -> Result<Vec<Snippet>, AppError> {
        self.latest_at(limit, Utc::now())
    }

    /// [`SnippetDb::latest`] evaluated against an explicit clock.
    pub fn latest_at(&self, limit: usize, now: DateTime<Utc>) -> Result<Vec<Snippet>, AppError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SNIPPETS)?;
        let mut snippets = Vec::new();

        for item in table.iter()?.rev() {
            let (_, value) = item?;
            let snippet = deserialize_snippet(value.value())?;
            if snippet.is_expired_at(now) {
                continue;
            }
            snippets.push(snippet);
            if snippets.len() >= limit {
                break;
            }
        }

        Ok(snippets)
    }

    /// Count stored rows, expired ones included.
    ///
    /// # Errors
    /// Returns an error when storage access fails.
    pub fn count(&self) -> Result<u64, AppError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SNIPPETS)?;
        Ok(table.len()?)
    }
}

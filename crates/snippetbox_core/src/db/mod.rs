//! Database layer for Snippetbox.

/// Snippet storage helpers.
pub mod snippet;
/// redb table definitions.
pub mod tables;

use crate::{
    constants::{DB_FILE_NAME, DEFAULT_LATEST_LIMIT},
    error::AppError,
    models::snippet::Snippet,
    store::SnippetStore,
};
use std::path::Path;
use std::sync::Arc;

/// Database handle with access to the snippet tables.
pub struct Database {
    pub snippets: snippet::SnippetDb,
    latest_limit: usize,
}

impl Database {
    /// Open (or create) the database stored in directory `path`.
    ///
    /// # Arguments
    /// - `path`: Directory that holds the redb file; created when missing.
    ///
    /// # Returns
    /// A ready [`Database`] with tables initialized.
    ///
    /// # Errors
    /// Returns an error when the directory cannot be created or redb fails to
    /// open the file.
    pub fn new(path: &str) -> Result<Self, AppError> {
        let dir = Path::new(path);
        std::fs::create_dir_all(dir)?;
        let file = dir.join(DB_FILE_NAME);
        tracing::debug!("Opening snippet database at {}", file.display());
        let db = Arc::new(redb::Database::create(&file)?);
        Self::from_shared(db)
    }

    /// Build a handle over an already-open redb database.
    ///
    /// # Errors
    /// Returns an error when table initialization fails.
    pub fn from_shared(db: Arc<redb::Database>) -> Result<Self, AppError> {
        let snippets = snippet::SnippetDb::new(db)?;
        Ok(Self {
            snippets,
            latest_limit: DEFAULT_LATEST_LIMIT,
        })
    }

    /// Set how many snippets [`SnippetStore::latest`] returns.
    pub fn with_latest_limit(mut self, limit: usize) -> Self {
        self.latest_limit = limit;
        self
    }
}

impl SnippetStore for Database {
    fn latest(&self) -> Result<Vec<Snippet>, AppError> {
        self.snippets.latest(self.latest_limit)
    }

    fn get(&self, id: u64) -> Result<Option<Snippet>, AppError> {
        self.snippets.get(id)
    }

    fn insert(&self, title: &str, content: &str, expires_days: i64) -> Result<u64, AppError> {
        self.snippets.insert(title, content, expires_days)
    }
}

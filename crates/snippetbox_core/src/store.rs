//! Storage collaborator consumed by the HTTP layer.

use crate::{error::AppError, models::snippet::Snippet};

/// Snippet persistence as seen by request handlers.
///
/// Implementations hide expired snippets from both lookups. Calls may block
/// on I/O; callers neither retry nor time them out.
pub trait SnippetStore: Send + Sync {
    /// Most recent unexpired snippets, newest first.
    fn latest(&self) -> Result<Vec<Snippet>, AppError>;

    /// Fetch an unexpired snippet by id.
    ///
    /// # Returns
    /// `Ok(None)` when no such snippet exists or it has expired.
    fn get(&self, id: u64) -> Result<Option<Snippet>, AppError>;

    /// Persist a new snippet expiring `expires_days` from now.
    ///
    /// # Returns
    /// The store-assigned identifier, retrievable once this returns.
    fn insert(&self, title: &str, content: &str, expires_days: i64) -> Result<u64, AppError>;
}

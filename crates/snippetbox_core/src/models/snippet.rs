//! Snippet data model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A persisted text snippet with a fixed expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub expires: DateTime<Utc>,
}

impl Snippet {
    /// Build a snippet created at `created` that expires `expires_days` later.
    ///
    /// # Arguments
    /// - `id`: Store-assigned identifier.
    /// - `title`: Snippet title.
    /// - `content`: Snippet body.
    /// - `expires_days`: Expiry offset in days.
    /// - `created`: Creation timestamp.
    ///
    /// # Returns
    /// A new [`Snippet`].
    pub fn new(
        id: u64,
        title: impl Into<String>,
        content: impl Into<String>,
        expires_days: i64,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created,
            expires: created + Duration::days(expires_days),
        }
    }

    /// Whether the snippet has passed its expiry at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }

    /// Canonical URL path for viewing this snippet.
    pub fn view_path(&self) -> String {
        view_path(self.id)
    }
}

/// Canonical URL path for viewing the snippet with `id`.
pub fn view_path(id: u64) -> String {
    format!("/snippet/view/{}", id)
}

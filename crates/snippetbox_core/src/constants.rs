//! Shared constants used across Snippetbox crates.

/// Default HTTP port for Snippetbox.
pub const DEFAULT_PORT: u16 = 4000;

/// Default maximum urlencoded form body accepted by the HTTP layer.
pub const DEFAULT_MAX_FORM_SIZE: usize = 64 * 1024;

/// Default number of snippets shown on the home page.
pub const DEFAULT_LATEST_LIMIT: usize = 10;

/// Expiry used to pre-fill the create form.
pub const DEFAULT_EXPIRES_DAYS: i64 = 365;

/// Expiry offsets (in days) a snippet may be created with.
pub const ALLOWED_EXPIRES_DAYS: [i64; 3] = [1, 7, 365];

/// Maximum title length in Unicode code points.
pub const MAX_TITLE_CHARS: usize = 100;

/// File name for the redb database within the configured DB directory.
pub const DB_FILE_NAME: &str = "snippets.redb";

//! Core domain library for Snippetbox (config, storage, models, validation).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants.
pub mod constants;
/// Database access layer.
pub mod db;
/// Process-global environment mutation helpers.
pub mod env;
/// Application error types (storage/domain).
pub mod error;
/// Snippet creation form state.
pub mod forms;
/// Data models for persistence and rendering.
pub mod models;
/// Storage collaborator trait consumed by request handlers.
pub mod store;
/// Field validation rules for submitted snippets.
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use constants::DEFAULT_PORT;
pub use db::Database;
pub use error::AppError;
pub use forms::SnippetCreateForm;
pub use models::snippet::Snippet;
pub use store::SnippetStore;
pub use validation::FieldErrors;

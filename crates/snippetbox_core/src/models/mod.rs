//! Data models shared by storage and rendering.

/// Snippet record stored in the database and shown by the web UI.
pub mod snippet;

#[cfg(test)]
mod tests;

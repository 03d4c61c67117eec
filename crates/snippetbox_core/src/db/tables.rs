//! redb table definitions shared by storage modules.

use redb::TableDefinition;

/// Canonical snippet rows keyed by id (`Snippet`, bincode-encoded).
pub const SNIPPETS: TableDefinition<u64, &[u8]> = TableDefinition::new("snippets");

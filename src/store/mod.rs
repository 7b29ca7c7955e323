//! Concrete bill stores.

/// SeaORM/SQLite implementation of the bill store
pub mod sqlite;

pub use sqlite::SqliteBillStore;

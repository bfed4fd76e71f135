//! Entity statements
//!
//! Insert statements for every row this layer creates, plus the re-reads
//! used to show the operator what was stored.

mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;

//! HotelOps Store - the storage engine client over SQLite
//!
//! Provides:
//! - Connection config and connect/close
//! - Embedded schema migrations with checksums
//! - Parameterized statement builder and the `Client` that runs it
//! - Surrogate key allocation with claim-then-insert transactions
//! - Referential integrity checks
//! - Entity insert/display statements and report queries

pub mod allocator;
pub mod client;
pub mod db;
pub mod errors;
pub mod integrity;
pub mod migrations;
pub mod reports;
pub mod repo;
pub mod statement;

// Re-export key types
pub use allocator::SurrogateKey;
pub use client::Client;
pub use db::ConnectionConfig;
pub use errors::Result;
pub use integrity::Reference;
pub use reports::ReportQuery;
pub use repo::SqliteRepo;
pub use statement::Statement;

//! Schema bootstrap
//!
//! The SQL under `migrations/` is compiled in. Each file is applied once and
//! recorded in `schema_version` with its SHA-256. A database built from an
//! edited file still opens; the mismatch is logged.

mod embedded;
mod runner;

pub use embedded::{Migration, MIGRATIONS};
pub use runner::apply_migrations;

//! Error handling for hotelops-store
//!
//! Wraps hotelops-core ExError with store-specific helpers

use hotelops_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// The store refused or failed a statement; the store's own message is kept
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Statement)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// The database could not be opened or prepared for use
pub fn connection_error(target: &str, reason: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Connection)
        .with_op("connect")
        .with_entity_id(target.to_string())
        .with_message(format!("Unable to connect to database {}: {}", target, reason))
}

pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Migration)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// A stored value did not have the shape the schema promises
pub fn corrupt_value(what: &str, value: &str) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op("decode")
        .with_message(format!("Unexpected {} value: {}", what, value))
}

//! Connection configuration and opening
//!
//! The operator names a database, a port and a user on the command line.
//! The embedded engine only needs the database name, which resolves to a
//! SQLite file; the rest is kept for logging and diagnostics.

use crate::errors::{connection_error, Result};
use hotelops_core_types::Sensitive;
use rusqlite::{Connection, OpenFlags};
use std::path::PathBuf;
use std::time::Duration;

/// Database name that selects a private in-memory store
pub const IN_MEMORY: &str = ":memory:";

/// How long a writer waits for another writer's lock before failing
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: Sensitive<String>,
}

impl ConnectionConfig {
    /// Config for a local database with an empty password
    pub fn new(database: impl Into<String>, port: u16, user: impl Into<String>) -> Self {
        Self {
            host: "localhost".to_string(),
            port,
            database: database.into(),
            user: user.into(),
            password: Sensitive::default(),
        }
    }

    /// File backing the database; `None` for the in-memory store.
    /// A name without an extension gets `.db`.
    pub fn database_path(&self) -> Option<PathBuf> {
        if self.database == IN_MEMORY {
            return None;
        }
        let mut path = PathBuf::from(&self.database);
        if path.extension().is_none() {
            path.set_extension("db");
        }
        Some(path)
    }

    /// Human-readable target, without credentials
    pub fn describe(&self) -> String {
        let target = self
            .database_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| IN_MEMORY.to_string());
        format!("sqlite://{}@{}:{}/{}", self.user, self.host, self.port, target)
    }
}

/// Open the database named by `config`, creating the file if needed
pub fn open(config: &ConnectionConfig) -> Result<Connection> {
    let target = config.describe();
    let conn = match config.database_path() {
        Some(path) => Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        ),
        None => Connection::open_in_memory(),
    }
    .map_err(|e| connection_error(&target, e))?;

    configure(&conn, config.database_path().is_some())
        .map_err(|e| connection_error(&target, e.message()))?;
    Ok(conn)
}

/// Open an in-memory database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(|e| connection_error(IN_MEMORY, e))?;
    configure(&conn, false)?;
    Ok(conn)
}

/// Enable foreign keys and a busy timeout; WAL only applies to files
pub fn configure(conn: &Connection, file_backed: bool) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON")
        .map_err(crate::errors::from_rusqlite)?;
    conn.busy_timeout(BUSY_TIMEOUT)
        .map_err(crate::errors::from_rusqlite)?;

    if file_backed {
        // journal_mode answers with the resulting mode, so it must be read as a query
        let _mode: String = conn
            .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))
            .map_err(crate::errors::from_rusqlite)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path_appends_extension() {
        let config = ConnectionConfig::new("hotel", 5432, "operator");
        assert_eq!(config.database_path(), Some(PathBuf::from("hotel.db")));
    }

    #[test]
    fn test_database_path_keeps_existing_extension() {
        let config = ConnectionConfig::new("data/hotel.sqlite", 5432, "operator");
        assert_eq!(
            config.database_path(),
            Some(PathBuf::from("data/hotel.sqlite"))
        );
    }

    #[test]
    fn test_in_memory_has_no_path() {
        let config = ConnectionConfig::new(IN_MEMORY, 5432, "operator");
        assert_eq!(config.database_path(), None);
    }

    #[test]
    fn test_describe_never_shows_password() {
        let mut config = ConnectionConfig::new("hotel", 5432, "operator");
        config.password = Sensitive::new("s3cret".to_string());
        let described = config.describe();
        assert!(described.contains("operator@localhost:5432"));
        assert!(!described.contains("s3cret"));
        assert!(!format!("{:?}", config).contains("s3cret"));
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let conn = open_in_memory().unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_open_missing_directory_is_connection_error() {
        let config = ConnectionConfig::new("/nonexistent-dir-for-hotelops/hotel", 5432, "op");
        let err = open(&config).unwrap_err();
        assert_eq!(err.kind(), hotelops_core::ExErrorKind::Connection);
    }
}

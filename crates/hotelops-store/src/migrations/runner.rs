use super::embedded::{Migration, MIGRATIONS};
use crate::errors::{from_rusqlite, migration_error, Result};
use rusqlite::{params, Connection};
use std::collections::HashMap;

const CREATE_VERSION_TABLE: &str = "CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY,
    migration_id TEXT NOT NULL UNIQUE,
    applied_at INTEGER NOT NULL,
    checksum TEXT
)";

/// Apply every entry of [`MIGRATIONS`] not yet recorded in `schema_version`
///
/// Safe to call on every connect. A recorded checksum that differs from the
/// compiled-in SQL is logged as a warning; the database is used as it is.
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    conn.execute(CREATE_VERSION_TABLE, []).map_err(from_rusqlite)?;
    let recorded = recorded_checksums(conn)?;

    for migration in MIGRATIONS {
        let checksum = migration.checksum();
        match recorded.get(migration.id) {
            None => apply(conn, migration, &checksum)?,
            Some(Some(previous)) if *previous != checksum => {
                tracing::warn!(
                    migration_id = migration.id,
                    recorded = %previous,
                    embedded = %checksum,
                    "schema was built from different SQL"
                );
            }
            Some(_) => {}
        }
    }
    Ok(())
}

fn recorded_checksums(conn: &Connection) -> Result<HashMap<String, Option<String>>> {
    let mut stmt = conn
        .prepare("SELECT migration_id, checksum FROM schema_version")
        .map_err(from_rusqlite)?;
    let rows = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(from_rusqlite)?;
    rows.collect::<rusqlite::Result<_>>().map_err(from_rusqlite)
}

fn apply(conn: &mut Connection, migration: &Migration, checksum: &str) -> Result<()> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    tx.execute_batch(migration.sql)
        .map_err(|e| migration_error(migration.id, &e.to_string()))?;
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?1, ?2, ?3)",
        params![migration.id, chrono::Utc::now().timestamp(), checksum],
    )
    .map_err(from_rusqlite)?;
    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(migration_id = migration.id, "applied migration");
    Ok(())
}

//! Identifier allocator
//!
//! Surrogate keys are `MAX(key) + 1` over the owning table, starting at 1.
//! Reading the maximum alone is not a reservation; inserts go through
//! `Client::claim_and_insert`, which holds the write lock across the read
//! and the insert.

use crate::errors::{corrupt_value, from_rusqlite, Result};
use rusqlite::Connection;

/// Keys this layer allocates itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurrogateKey {
    Repair,
    Booking,
    Assignment,
    Request,
}

impl SurrogateKey {
    pub fn table(self) -> &'static str {
        match self {
            SurrogateKey::Repair => "Repair",
            SurrogateKey::Booking => "Booking",
            SurrogateKey::Assignment => "Assigned",
            SurrogateKey::Request => "Request",
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            SurrogateKey::Repair => "rID",
            SurrogateKey::Booking => "bID",
            SurrogateKey::Assignment => "asgID",
            SurrogateKey::Request => "reqID",
        }
    }
}

/// Next free id for `key`: 1 on an empty table, otherwise max + 1
pub fn next_id(conn: &Connection, key: SurrogateKey) -> Result<i64> {
    // table and column names come from the closed enum above, never from input
    let sql = format!(
        "SELECT COALESCE(MAX({}), 0) FROM {}",
        key.column(),
        key.table()
    );
    let max: i64 = conn
        .query_row(&sql, [], |row| row.get(0))
        .map_err(from_rusqlite)?;

    let next = max
        .checked_add(1)
        .ok_or_else(|| corrupt_value(key.column(), &max.to_string()))?;

    tracing::debug!(table = key.table(), allocated_id = next, "next id");
    Ok(next)
}

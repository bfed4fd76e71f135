//! Storage engine client
//!
//! One `Client` owns the single connection the console holds for its whole
//! lifetime. Everything the command layer sends to SQLite goes through it.

use crate::allocator::{self, SurrogateKey};
use crate::db::{self, ConnectionConfig};
use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;
use crate::statement::Statement;
use hotelops_core::QueryResult;
use rusqlite::{Connection, TransactionBehavior};

pub struct Client {
    conn: Connection,
}

impl Client {
    /// Open the configured database and bring its schema up to date
    ///
    /// Every failure here is a `Connection` error: the caller cannot do
    /// anything useful without the store.
    pub fn connect(config: &ConnectionConfig) -> Result<Self> {
        let target = config.describe();
        tracing::debug!(target_db = %target, "connecting");

        let mut conn = db::open(config)?;
        apply_migrations(&mut conn)
            .map_err(|e| crate::errors::connection_error(&target, e.message()))?;

        tracing::debug!(target_db = %target, "connected");
        Ok(Self { conn })
    }

    /// Wrap an already-open connection (tests, in-memory stores)
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        db::configure(&conn, false)?;
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Fresh in-memory store with the schema applied
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Run a mutation; returns the affected row count
    pub fn execute(&self, statement: &Statement) -> Result<usize> {
        statement.execute_on(&self.conn)
    }

    /// Run a read and materialize every row as text
    pub fn query(&self, statement: &Statement) -> Result<QueryResult> {
        statement.query_on(&self.conn)
    }

    /// Peek at the id the next insert for `key` would get
    pub fn next_id(&self, key: SurrogateKey) -> Result<i64> {
        allocator::next_id(&self.conn, key)
    }

    /// Allocate the next id for `key` and insert the row `build` produces
    /// for it, in one immediate transaction
    ///
    /// The write lock is held from before the id is read until the insert
    /// commits, so two writers can never claim the same id. On any error
    /// the transaction rolls back and nothing is written.
    pub fn claim_and_insert<F>(&mut self, key: SurrogateKey, build: F) -> Result<i64>
    where
        F: FnOnce(i64) -> Statement,
    {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(from_rusqlite)?;

        let id = allocator::next_id(&tx, key)?;
        build(id).execute_on(&tx)?;
        tx.commit().map_err(from_rusqlite)?;

        tracing::debug!(table = key.table(), allocated_id = id, "claimed surrogate key");
        Ok(id)
    }

    /// Direct access for fixtures and diagnostics
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Release the connection; a failing close is logged and otherwise ignored
    pub fn close(self) {
        if let Err((_conn, err)) = self.conn.close() {
            tracing::debug!(error = %err, "close failed");
        }
    }
}

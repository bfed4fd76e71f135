//! Parameterized statement builder
//!
//! SQL text is fixed at the call site; every operator-supplied value goes
//! through `bind` and reaches SQLite as a bound parameter.

use crate::errors::{from_rusqlite, Result};
use hotelops_core::QueryResult;
use rusqlite::types::{Value, ValueRef};
use rusqlite::{params_from_iter, Connection};

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<Value>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Append the next positional parameter (`?1`, `?2`, ...)
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub(crate) fn execute_on(&self, conn: &Connection) -> Result<usize> {
        let mut prepared = conn.prepare(&self.sql).map_err(from_rusqlite)?;
        prepared
            .execute(params_from_iter(self.params.iter()))
            .map_err(from_rusqlite)
    }

    pub(crate) fn query_on(&self, conn: &Connection) -> Result<QueryResult> {
        let mut prepared = conn.prepare(&self.sql).map_err(from_rusqlite)?;
        let columns: Vec<String> = prepared
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let mut rows = prepared
            .query(params_from_iter(self.params.iter()))
            .map_err(from_rusqlite)?;

        let mut materialized = Vec::new();
        while let Some(row) = rows.next().map_err(from_rusqlite)? {
            let mut cells = Vec::with_capacity(columns.len());
            for idx in 0..columns.len() {
                cells.push(cell_text(row.get_ref(idx).map_err(from_rusqlite)?));
            }
            materialized.push(cells);
        }

        Ok(QueryResult::new(columns, materialized))
    }
}

/// Text form of one cell; NULL stays `None`
fn cell_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) => Some(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Some(hex::encode(b)),
    }
}

//! Per-run context handed to every operation

use crate::console::Console;
use hotelops_core::render::render_table;
use hotelops_store::{Client, Result, Statement};

/// The store connection and the console, owned for the life of the loop
pub struct Session<C: Console> {
    pub client: Client,
    pub console: C,
}

impl<C: Console> Session<C> {
    pub fn new(client: Client, console: C) -> Self {
        Self { client, console }
    }

    /// Run `statement` and print its rows as a table; returns the row count
    pub fn show(&mut self, statement: &Statement) -> Result<usize> {
        let result = self.client.query(statement)?;
        self.console.print(&render_table(&result));
        Ok(result.row_count())
    }

    pub fn into_parts(self) -> (Client, C) {
        (self.client, self.console)
    }
}

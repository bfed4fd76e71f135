//! Text rendering for query results

pub mod table;

pub use table::{render_table, COLUMN_GAP};

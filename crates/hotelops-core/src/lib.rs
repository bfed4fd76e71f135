//! HotelOps Core - pure domain layer for the hotel operations console
//!
//! This crate provides the pieces of the command layer that never touch
//! storage or the terminal:
//! - Structured error facility (`ExError`, `ExErrorKind`, `HotelOpsError`)
//! - Logging facility (profiles, operation macros, test capture)
//! - Domain model for the hotel schema
//! - Input validation rules used by the prompt loops
//! - The numbered menu `Command` inventory
//! - A generic aligned-table renderer for query results

pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod rules;

pub use commands::Command;
pub use errors::{ExError, ExErrorKind, HotelOpsError, Result};
pub use model::QueryResult;

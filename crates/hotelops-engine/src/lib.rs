//! HotelOps Engine - the interactive command layer
//!
//! Ties the menu, the prompt loops and the store together:
//! - `Console` abstraction over line-based terminal I/O
//! - `Session` context passed to every operation
//! - Prompt loops enforcing the per-field input contracts
//! - The sixteen domain operations and the dispatcher that runs them

pub mod commands;
pub mod console;
pub mod prompts;
pub mod session;

pub use commands::{run, LoopState};
pub use console::{Console, ScriptedConsole, StdConsole};
pub use session::Session;

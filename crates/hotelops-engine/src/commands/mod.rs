//! Domain operations and the menu loop
//!
//! - `create`: the seven operations that append rows
//! - `reports`: the nine read-only reports
//! - `dispatch`: menu, command lookup and the read-execute-repeat loop

pub mod create;
pub mod dispatch;
pub mod reports;

pub use dispatch::{execute, handler_for, run, step, Handler, LoopState};

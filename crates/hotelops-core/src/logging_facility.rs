//! Structured logging
//!
//! [`init`] installs the process subscriber once, from `main`. Commands log
//! through [`log_op_start!`](crate::log_op_start), [`log_op_end!`](crate::log_op_end)
//! and [`log_op_error!`](crate::log_op_error). Tests swap the subscriber for
//! [`init_test_capture`] and assert on what was recorded.
//!
//! Log output goes to stderr. Stdout belongs to the menu and result tables.
//!
//! ```rust
//! use hotelops_core::logging_facility::{init, Profile};
//!
//! init(Profile::Interactive);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};

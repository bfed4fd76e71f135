//! Types shared by the error and logging facilities
//!
//! - [`RequestId`] correlates the events of one dispatched command
//! - [`Sensitive`] keeps credentials out of `Debug` output
//! - [`schema`] names the structured log fields

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::RequestId;
pub use sensitive::Sensitive;

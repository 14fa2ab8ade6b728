//! Command-line command handlers for solar.
//!
//! Each command lives in its own submodule and prints its result to stdout.

pub mod report;
pub mod whitepoint;

pub use report::{Report, handle_report_command};
pub use whitepoint::handle_whitepoint_command;

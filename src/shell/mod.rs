//! Subprocess execution with output capture.

pub mod command;

pub use command::{display_command, execute, execute_check, CommandOptions, CommandResult};

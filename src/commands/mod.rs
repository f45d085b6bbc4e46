//! Command implementations

pub mod simple;

pub use simple::{Command, CommandError, execute, run_simple};

//! Terminal output formatting
//!
//! Display utilities for session reports.

pub mod display;
pub mod formatters;

pub use display::{print_report, write_feedback_error, write_report};
pub use formatters::render_report;

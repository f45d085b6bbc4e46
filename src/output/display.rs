//! Colored terminal display of session reports

use super::formatters::format_suggestion;
use crate::core::FeedbackError;
use crate::engine::Report;
use colored::Colorize;
use std::io::{self, Write};

/// Write a report, highlighting the count and any suggestion
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let count = report.remaining.to_string();
    let count = match report.remaining {
        0 => count.red().bold(),
        1 => count.bright_green().bold(),
        _ => count.bright_yellow().bold(),
    };
    writeln!(out, "{count} words remaining.")?;

    if let Some(line) = report.suggestion.as_ref().and_then(format_suggestion) {
        writeln!(out, "{}", "Try the following:".bright_cyan())?;
        writeln!(out, "  {}", line.bright_white().bold())?;
    }

    Ok(())
}

/// Print a report to stdout
///
/// # Errors
///
/// Returns any I/O error writing to stdout.
pub fn print_report(report: &Report) -> io::Result<()> {
    write_report(&mut io::stdout().lock(), report)
}

/// Write why a guess/score pair was rejected
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn write_feedback_error<W: Write>(out: &mut W, error: &FeedbackError) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().red())
}

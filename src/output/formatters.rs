//! Formatting utilities for terminal output

use crate::core::{Feedback, Word};
use crate::engine::{Report, Suggestion};

/// Join words with ", "
#[must_use]
pub fn format_word_list(words: &[Word]) -> String {
    words
        .iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line summary of a suggestion, `None` when there is nothing to offer
#[must_use]
pub fn format_suggestion(suggestion: &Suggestion) -> Option<String> {
    match suggestion {
        Suggestion::Empty => None,
        Suggestion::Single(word) => Some(format!("it must be {word}")),
        Suggestion::List(words) => Some(format_word_list(words)),
    }
}

/// Plain-text report, no colors
///
/// # Examples
/// ```
/// use wordle_helper::engine::Report;
/// use wordle_helper::output::formatters::render_report;
///
/// let report = Report { remaining: 42, suggestion: None };
/// assert_eq!(render_report(&report), "42 words remaining.\n");
/// ```
#[must_use]
pub fn render_report(report: &Report) -> String {
    let mut out = format!("{} words remaining.\n", report.remaining);

    if let Some(line) = report.suggestion.as_ref().and_then(format_suggestion) {
        out.push_str("Try the following:\n");
        out.push_str(&format!("  {line}\n"));
    }

    out
}

/// Guess followed by its feedback squares, e.g. "CRANE ⬜⬜🟩⬜🟩"
#[must_use]
pub fn feedback_line(guess: &Word, feedback: &Feedback) -> String {
    format!("{} {}", guess.text().to_uppercase(), feedback.to_emoji())
}

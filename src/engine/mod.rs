//! Candidate narrowing and suggestion
//!
//! The session applies constraints to the live candidate set; the recommender
//! picks words to try next once the set is small.

mod constraint;
mod recommender;
mod session;

pub use constraint::Constraint;
pub use recommender::{Suggestion, letter_ranking, suggest};
pub use session::{Report, SUGGESTION_THRESHOLD, Session};

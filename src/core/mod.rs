//! Core domain types
//!
//! Words, candidate sets, guess feedback and the error taxonomy. Nothing here
//! touches the filesystem or holds session state.

mod candidates;
mod error;
mod feedback;
mod word;

pub use candidates::CandidateSet;
pub use error::CorpusError;
pub use feedback::{Feedback, FeedbackError, Mark};
pub use word::{WORD_LENGTH, Word, WordError};

//! Single-step word predicates
//!
//! Every session operation is expressed as one or more of these, applied in
//! order against the live candidate set.

use crate::core::Word;
use std::fmt;

/// A predicate a candidate must satisfy to stay in the set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Letter appears somewhere
    Contains(u8),
    /// Letter appears nowhere
    Absent(u8),
    /// Contiguous substring appears somewhere
    Substring(String),
    Prefix(String),
    Suffix(String),
    /// Green: letter sits at this position
    Exact { letter: u8, position: usize },
    /// Yellow: letter appears, but not at this position
    Misplaced { letter: u8, position: usize },
}

impl Constraint {
    /// Check whether a word satisfies this constraint
    ///
    /// A position past the end of the word never holds a letter, so `Exact`
    /// fails there and `Misplaced` reduces to `Contains`.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    /// use wordle_helper::engine::Constraint;
    ///
    /// let crane = Word::new("crane").unwrap();
    /// assert!(Constraint::Exact { letter: b'a', position: 2 }.matches(&crane));
    /// assert!(!Constraint::Misplaced { letter: b'a', position: 2 }.matches(&crane));
    /// assert!(Constraint::Misplaced { letter: b'a', position: 0 }.matches(&crane));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        match self {
            Self::Contains(letter) => word.has_letter(*letter),
            Self::Absent(letter) => !word.has_letter(*letter),
            Self::Substring(s) => word.text().contains(s.as_str()),
            Self::Prefix(s) => word.text().starts_with(s.as_str()),
            Self::Suffix(s) => word.text().ends_with(s.as_str()),
            Self::Exact { letter, position } => word.char_at(*position) == Some(*letter),
            Self::Misplaced { letter, position } => {
                word.has_letter(*letter) && word.char_at(*position) != Some(*letter)
            }
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contains(l) => write!(f, "contains '{}'", char::from(*l)),
            Self::Absent(l) => write!(f, "lacks '{}'", char::from(*l)),
            Self::Substring(s) => write!(f, "contains \"{s}\""),
            Self::Prefix(s) => write!(f, "starts with \"{s}\""),
            Self::Suffix(s) => write!(f, "ends with \"{s}\""),
            Self::Exact { letter, position } => {
                write!(f, "'{}' at {position}", char::from(*letter))
            }
            Self::Misplaced { letter, position } => {
                write!(f, "'{}' not at {position}", char::from(*letter))
            }
        }
    }
}

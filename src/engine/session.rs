//! Interactive solving session
//!
//! A session owns the live candidate set and shrinks it as feedback arrives.
//! Every operation returns a [`Report`] describing what is left; rendering is
//! up to the caller.

use super::constraint::Constraint;
use super::recommender::{Suggestion, suggest};
use crate::core::{CandidateSet, CorpusError, Feedback, FeedbackError, Mark, Word};
use crate::corpus::CorpusSource;
use log::{debug, warn};

/// Below this many candidates a report includes a suggestion
pub const SUGGESTION_THRESHOLD: usize = 10;

/// Snapshot of the session after an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Number of candidates still consistent with every constraint
    pub remaining: usize,
    /// Present only when `remaining` is below [`SUGGESTION_THRESHOLD`]
    pub suggestion: Option<Suggestion>,
}

impl Report {
    #[must_use]
    pub fn for_candidates(candidates: &CandidateSet) -> Self {
        let remaining = candidates.len();
        Self {
            remaining,
            suggestion: (remaining < SUGGESTION_THRESHOLD).then(|| suggest(candidates)),
        }
    }
}

/// Candidate narrowing session over a corpus source
///
/// Constraints only ever remove words, and never reorder the survivors.
/// [`Session::reset`] reloads from the source and forgets everything applied.
pub struct Session<S: CorpusSource> {
    source: S,
    exclude_used: bool,
    candidates: CandidateSet,
}

impl<S: CorpusSource> Session<S> {
    /// Load the initial candidate set from `source`
    ///
    /// # Errors
    ///
    /// Returns any `CorpusError` raised while loading.
    pub fn new(source: S, exclude_used: bool) -> Result<Self, CorpusError> {
        let candidates = source.load_candidates(exclude_used)?;
        Ok(Self {
            source,
            exclude_used,
            candidates,
        })
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub const fn excludes_used(&self) -> bool {
        self.exclude_used
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Reload the candidates from the source, discarding all constraints
    ///
    /// On error the current candidates are left as they were.
    ///
    /// # Errors
    ///
    /// Returns any `CorpusError` raised while reloading.
    pub fn reset(&mut self) -> Result<Report, CorpusError> {
        self.candidates = self.source.load_candidates(self.exclude_used)?;
        debug!("session reset: {} candidates", self.candidates.len());
        Ok(self.report())
    }

    #[must_use]
    pub fn report(&self) -> Report {
        Report::for_candidates(&self.candidates)
    }

    /// Keep words containing every one of `letters`
    pub fn include_letters(&mut self, letters: &str) -> Report {
        self.apply_all(letter_bytes(letters).map(Constraint::Contains))
    }

    /// Keep words containing `substring` contiguously
    pub fn include_substring(&mut self, substring: &str) -> Report {
        self.apply_all([Constraint::Substring(substring.to_lowercase())])
    }

    pub fn starts_with(&mut self, prefix: &str) -> Report {
        self.apply_all([Constraint::Prefix(prefix.to_lowercase())])
    }

    pub fn ends_with(&mut self, suffix: &str) -> Report {
        self.apply_all([Constraint::Suffix(suffix.to_lowercase())])
    }

    /// Keep words containing none of `letters`
    pub fn exclude_letters(&mut self, letters: &str) -> Report {
        self.apply_all(letter_bytes(letters).map(Constraint::Absent))
    }

    /// Green: keep words with `letter` at `position` (0-based)
    pub fn match_position(&mut self, letter: char, position: usize) -> Report {
        self.apply_all([Constraint::Exact {
            letter: letter_byte(letter),
            position,
        }])
    }

    /// Yellow: keep words containing `letter`, but not at `position` (0-based)
    pub fn exclude_position(&mut self, letter: char, position: usize) -> Report {
        self.apply_all([Constraint::Misplaced {
            letter: letter_byte(letter),
            position,
        }])
    }

    /// Green for every letter of `pattern` at its index
    ///
    /// Non-letters (e.g. `_` or `.`) mark unknown positions and are skipped.
    pub fn match_word(&mut self, pattern: &str) -> Report {
        self.apply_all(
            pattern_letters(pattern)
                .map(|(position, letter)| Constraint::Exact { letter, position }),
        )
    }

    /// Yellow for every letter of `pattern` at its index
    pub fn exclude_word(&mut self, pattern: &str) -> Report {
        self.apply_all(
            pattern_letters(pattern)
                .map(|(position, letter)| Constraint::Misplaced { letter, position }),
        )
    }

    /// Apply one guess and its `b`/`g`/`y` score
    ///
    /// Positions are processed in order: `b` excludes the letter everywhere,
    /// `g` fixes it in place and `y` requires it elsewhere. A letter that is
    /// black in one slot is excluded from the whole word even if another slot
    /// of the same guess marked it green or yellow, which empties the set for
    /// answers with that letter.
    ///
    /// # Errors
    ///
    /// Returns `FeedbackError` for a malformed word or score; the candidates
    /// are not touched in that case.
    pub fn apply_feedback(&mut self, word: &str, score: &str) -> Result<Report, FeedbackError> {
        let (guess, feedback) = Feedback::parse(word, score).inspect_err(|e| {
            warn!("rejected feedback '{word}' / '{score}': {e}");
        })?;

        Ok(self.apply_guess(&guess, &feedback))
    }

    /// Apply an already validated guess and its feedback
    ///
    /// Same per-position rules as [`Session::apply_feedback`].
    pub fn apply_guess(&mut self, guess: &Word, feedback: &Feedback) -> Report {
        let constraints = guess
            .chars()
            .iter()
            .zip(feedback.marks())
            .enumerate()
            .map(|(position, (&letter, mark))| match mark {
                Mark::Absent => Constraint::Absent(letter),
                Mark::Exact => Constraint::Exact { letter, position },
                Mark::Misplaced => Constraint::Misplaced { letter, position },
            });

        self.apply_all(constraints)
    }

    fn apply_all<I>(&mut self, constraints: I) -> Report
    where
        I: IntoIterator<Item = Constraint>,
    {
        for constraint in constraints {
            let before = self.candidates.len();
            self.candidates = self.candidates.filter(|w| constraint.matches(w));
            debug!(
                "applied {constraint}: {before} -> {}",
                self.candidates.len()
            );
        }
        self.report()
    }
}

fn letter_byte(letter: char) -> u8 {
    // non-ASCII letters never occur in corpus words
    u8::try_from(letter.to_ascii_lowercase()).unwrap_or(0)
}

fn letter_bytes(letters: &str) -> impl Iterator<Item = u8> + '_ {
    letters.chars().map(letter_byte)
}

fn pattern_letters(pattern: &str) -> impl Iterator<Item = (usize, u8)> + '_ {
    pattern
        .chars()
        .enumerate()
        .filter(|(_, ch)| ch.is_alphabetic())
        .map(|(position, ch)| (position, letter_byte(ch)))
}

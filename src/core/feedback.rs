//! Guess feedback parsing and calculation
//!
//! Feedback for a guess is one mark per position:
//! - `b` = Absent (letter not in word)
//! - `g` = Exact (letter in correct position)
//! - `y` = Misplaced (letter in word, wrong position)

use super::word::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Black: letter confirmed absent
    Absent,
    /// Green: letter confirmed at this position
    Exact,
    /// Yellow: letter present, but not at this position
    Misplaced,
}

impl Mark {
    /// Parse a single score character (`b`, `g` or `y`, any case)
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'b' => Some(Self::Absent),
            'g' => Some(Self::Exact),
            'y' => Some(Self::Misplaced),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Absent => 'b',
            Self::Exact => 'g',
            Self::Misplaced => 'y',
        }
    }

    #[must_use]
    pub const fn as_emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Exact => '🟩',
            Self::Misplaced => '🟨',
        }
    }
}

/// Reasons a guess/score pair is rejected
///
/// Messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    #[error("Uh, this word is {0} letters long.")]
    WordLength(usize),
    #[error("Uh, this score is {0} letters long.")]
    ScoreLength(usize),
    #[error("I don't understand this word.")]
    NonAlphabetic,
    #[error("The score should only use the letters 'b', 'g', or 'y'.")]
    InvalidScore,
}

/// Marks for all five positions of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self([Mark::Exact; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Validate a guess and its score string together
    ///
    /// Checks run in a fixed order: word length, score length, word letters,
    /// score letters. The first failure wins.
    ///
    /// # Errors
    /// Returns the `FeedbackError` describing the first problem found.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Feedback, FeedbackError, Mark};
    ///
    /// let (word, feedback) = Feedback::parse("crane", "BBGGY").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(feedback.marks()[4], Mark::Misplaced);
    ///
    /// assert_eq!(Feedback::parse("abcd", "bbbbb"), Err(FeedbackError::WordLength(4)));
    /// ```
    pub fn parse(word: &str, score: &str) -> Result<(Word, Self), FeedbackError> {
        let word_len = word.chars().count();
        if word_len != WORD_LENGTH {
            return Err(FeedbackError::WordLength(word_len));
        }

        let score_len = score.chars().count();
        if score_len != WORD_LENGTH {
            return Err(FeedbackError::ScoreLength(score_len));
        }

        let word = Word::new(word).map_err(|_| FeedbackError::NonAlphabetic)?;

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (slot, ch) in marks.iter_mut().zip(score.chars()) {
            *slot = Mark::from_char(ch).ok_or(FeedbackError::InvalidScore)?;
        }

        Ok((word, Self(marks)))
    }

    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// Greens are marked first and consume their letter; yellows are then
    /// handed out left to right while unmatched copies of the letter remain.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &answer).to_string(), "bbgbg");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut available: FxHashMap<u8, u8> = FxHashMap::default();

        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                marks[i] = Mark::Exact;
            } else {
                *available.entry(a).or_insert(0) += 1;
            }
        }

        for (mark, &g) in marks.iter_mut().zip(guess.chars()) {
            if *mark == Mark::Exact {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                *mark = Mark::Misplaced;
                *count -= 1;
            }
        }

        Self(marks)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Render as emoji squares, e.g. "⬜⬜🟩⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.as_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .try_for_each(|m| write!(f, "{}", m.as_char()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn parse_valid_mixed_case() {
        let (w, fb) = Feedback::parse("Crane", "bBgGy").unwrap();
        assert_eq!(w.text(), "crane");
        assert_eq!(
            fb.marks(),
            &[
                Mark::Absent,
                Mark::Absent,
                Mark::Exact,
                Mark::Exact,
                Mark::Misplaced
            ]
        );
    }

    #[test_case("abcd", "bbbbb", FeedbackError::WordLength(4); "short word")]
    #[test_case("abcdef", "bbbbb", FeedbackError::WordLength(6); "long word")]
    #[test_case("crane", "bbgg", FeedbackError::ScoreLength(4); "short score")]
    #[test_case("cr4ne", "bbggy", FeedbackError::NonAlphabetic; "digit in word")]
    #[test_case("crane", "bbgxy", FeedbackError::InvalidScore; "bad score letter")]
    #[test_case("abcd", "xx", FeedbackError::WordLength(4); "word length checked first")]
    fn parse_rejects(word: &str, score: &str, expected: FeedbackError) {
        assert_eq!(Feedback::parse(word, score), Err(expected));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            FeedbackError::WordLength(4).to_string(),
            "Uh, this word is 4 letters long."
        );
        assert_eq!(
            FeedbackError::InvalidScore.to_string(),
            "The score should only use the letters 'b', 'g', or 'y'."
        );
    }

    #[test]
    fn calculate_all_absent() {
        let fb = Feedback::calculate(&word("abcde"), &word("fghij"));
        assert_eq!(fb.to_string(), "bbbbb");
    }

    #[test]
    fn calculate_self_is_solved() {
        for w in ["crane", "slate", "speed", "aaaaa"] {
            assert!(Feedback::calculate(&word(w), &word(w)).is_solved());
        }
    }

    #[test]
    fn calculate_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: first O yellow, second O green
        let fb = Feedback::calculate(&word("robot"), &word("floor"));
        assert_eq!(fb.to_string(), "yybgb");
    }

    #[test]
    fn calculate_duplicate_letters_limited_by_answer() {
        // SPEED vs ERASE: both E's yellow, ERASE has two
        let fb = Feedback::calculate(&word("speed"), &word("erase"));
        assert_eq!(fb.to_string(), "ybyyb");

        // EERIE vs CRANE: only one E in CRANE, and it is green
        let fb = Feedback::calculate(&word("eerie"), &word("crane"));
        assert_eq!(fb.to_string(), "bbybg");
    }

    #[test]
    fn emoji_rendering() {
        let fb = Feedback::calculate(&word("crane"), &word("slate"));
        assert_eq!(fb.to_emoji(), "⬜⬜🟩⬜🟩");
    }
}

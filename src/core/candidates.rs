//! Ordered set of words still consistent with all applied constraints

use super::word::Word;
use std::ops::Deref;

/// Candidate words in ranking order
///
/// Filtering only ever removes words, so the ranking order established when
/// the corpus was loaded is preserved for the whole session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Wrap words that are already in ranking order
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Keep the words matching `predicate`, in their current order
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Word) -> bool,
    {
        Self {
            words: self.words.iter().filter(|w| predicate(w)).cloned().collect(),
        }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text() == text)
    }

    #[must_use]
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }
}

impl Deref for CandidateSet {
    type Target = [Word];

    fn deref(&self) -> &[Word] {
        &self.words
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

//! Greedy next-guess suggestion
//!
//! Walks letters from most to least common among the candidates, narrowing to
//! the words that contain each one, and stops just before the set would empty.
//! This is a cheap coverage heuristic, not an information-theoretic solver, and
//! sometimes returns a list that does not help much.

use crate::core::{CandidateSet, Word};
use rustc_hash::FxHashMap;

/// What the recommender offers for the current candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    /// No candidates, nothing to suggest
    Empty,
    /// Exactly one candidate remains
    Single(Word),
    /// Words covering the most common letters, in ranking order
    List(Vec<Word>),
}

impl Suggestion {
    /// Suggested words, regardless of variant
    #[must_use]
    pub fn words(&self) -> &[Word] {
        match self {
            Self::Empty => &[],
            Self::Single(word) => std::slice::from_ref(word),
            Self::List(words) => words,
        }
    }
}

/// Letters ordered by total occurrences across all candidates, most common first
///
/// Every occurrence counts, so repeated letters within a word add up. Ties keep
/// the order in which letters were first seen scanning the candidates in
/// ranking order.
#[must_use]
pub fn letter_ranking(candidates: &[Word]) -> Vec<u8> {
    let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
    let mut first_seen = Vec::new();

    for &ch in candidates.iter().flat_map(Word::chars) {
        let count = counts.entry(ch).or_insert_with(|| {
            first_seen.push(ch);
            0
        });
        *count += 1;
    }

    // stable: equal counts stay in first-seen order
    first_seen.sort_by(|a, b| counts[b].cmp(&counts[a]));
    first_seen
}

/// Suggest a next guess from the live candidates
///
/// # Examples
/// ```
/// use wordle_helper::core::{CandidateSet, Word};
/// use wordle_helper::engine::{Suggestion, suggest};
///
/// let one: CandidateSet = [Word::new("crane").unwrap()].into_iter().collect();
/// assert_eq!(suggest(&one), Suggestion::Single(Word::new("crane").unwrap()));
/// ```
#[must_use]
pub fn suggest(candidates: &CandidateSet) -> Suggestion {
    match candidates.words() {
        [] => Suggestion::Empty,
        [only] => Suggestion::Single(only.clone()),
        words => {
            let mut narrowed: Vec<&Word> = words.iter().collect();

            for letter in letter_ranking(words) {
                let with_letter: Vec<&Word> = narrowed
                    .iter()
                    .copied()
                    .filter(|w| w.has_letter(letter))
                    .collect();
                if with_letter.is_empty() {
                    break;
                }
                narrowed = with_letter;
            }

            Suggestion::List(narrowed.into_iter().cloned().collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn texts(suggestion: &Suggestion) -> Vec<&str> {
        suggestion.words().iter().map(Word::text).collect()
    }

    #[test]
    fn empty_candidates() {
        assert_eq!(suggest(&CandidateSet::default()), Suggestion::Empty);
    }

    #[test]
    fn single_candidate_is_returned() {
        let candidates = set(&["crane"]);
        assert_eq!(
            suggest(&candidates),
            Suggestion::Single(Word::new("crane").unwrap())
        );
    }

    #[test]
    fn letter_ranking_counts_every_occurrence() {
        let words = set(&["speed", "crane"]);
        // e:3, then s p d c r a n all once in first-seen order
        assert_eq!(letter_ranking(&words), b"espdcran".to_vec());
    }

    #[test]
    fn letter_ranking_ties_keep_first_seen_order() {
        let words = set(&["abcde", "edcba"]);
        assert_eq!(letter_ranking(&words), b"abcde".to_vec());
    }

    #[test]
    fn narrows_to_words_with_common_letters() {
        // a and e (3 each), then t c r n (2 each): a, e, t leave slate and
        // crate, c and r leave crate, n would empty the set
        let candidates = set(&["slate", "crate", "mince", "baron"]);
        assert_eq!(texts(&suggest(&candidates)), ["crate"]);
    }

    #[test]
    fn stops_before_emptying() {
        // every letter appears exactly once: first letter 'a' keeps only "abcde",
        // then 'b'..'e' keep it, 'f' would empty the set
        let candidates = set(&["abcde", "fghij"]);
        assert_eq!(texts(&suggest(&candidates)), ["abcde"]);
    }

    #[test]
    fn identical_letter_sets_keep_all() {
        let candidates = set(&["least", "slate", "stale"]);
        assert_eq!(
            texts(&suggest(&candidates)),
            ["least", "slate", "stale"]
        );
    }

    #[test]
    fn result_is_subset_in_ranking_order() {
        let candidates = set(&["crane", "trace", "react", "cater", "caret", "spine"]);
        let suggestion = suggest(&candidates);
        let words = suggestion.words();
        assert!(!words.is_empty());

        let positions: Vec<usize> = words
            .iter()
            .map(|w| candidates.iter().position(|c| c == w).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

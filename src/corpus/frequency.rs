//! Letter frequency table
//!
//! Loads a CSV of `letter,weight` rows (first row is a header) into a map used
//! to score words by how common their letters are.

use crate::core::{CorpusError, Word};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

/// Mapping from lowercase letter to a non-negative commonness weight
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyMap {
    weights: FxHashMap<u8, f64>,
}

impl FrequencyMap {
    /// Parse CSV text, skipping the header row and blank lines
    ///
    /// `source_name` only labels error messages.
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::MalformedInput` if a row does not have a single
    /// letter in the first column and a non-negative number in the second.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::corpus::FrequencyMap;
    ///
    /// let freq = FrequencyMap::parse("letter,frequency\nE,12.02\nt,9.1\n", "inline").unwrap();
    /// assert_eq!(freq.get(b'e'), Some(12.02));
    /// assert_eq!(freq.get(b'z'), None);
    /// ```
    pub fn parse(content: &str, source_name: &str) -> Result<Self, CorpusError> {
        let mut weights = FxHashMap::default();

        for (index, row) in content.lines().enumerate().skip(1) {
            let line = index + 1;
            let row = row.trim();
            if row.is_empty() {
                continue;
            }

            let mut columns = row.split(',').map(str::trim);
            let (Some(key), Some(value)) = (columns.next(), columns.next()) else {
                return Err(CorpusError::malformed(
                    source_name,
                    line,
                    format!("expected 'letter,weight', got '{row}'"),
                ));
            };

            let letter = match key.as_bytes() {
                [ch] if ch.is_ascii_alphabetic() => ch.to_ascii_lowercase(),
                _ => {
                    return Err(CorpusError::malformed(
                        source_name,
                        line,
                        format!("'{key}' is not a single letter"),
                    ));
                }
            };

            let weight: f64 = value.parse().map_err(|e| {
                CorpusError::malformed(source_name, line, format!("bad weight '{value}': {e}"))
            })?;
            if !weight.is_finite() || weight < 0.0 {
                return Err(CorpusError::malformed(
                    source_name,
                    line,
                    format!("weight '{value}' must be a non-negative number"),
                ));
            }

            weights.insert(letter, weight);
        }

        Ok(Self { weights })
    }

    /// Load and parse a frequency CSV file
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Io` if the file cannot be read, or any error from
    /// [`FrequencyMap::parse`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, &path.display().to_string())
    }

    /// Weight for a lowercase letter
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<f64> {
        self.weights.get(&letter).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of letter weights over every position of the word
    ///
    /// Repeated letters count once per occurrence.
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::UnknownLetter` if a letter has no weight. There is
    /// no zero-weight fallback.
    pub fn score(&self, word: &Word) -> Result<f64, CorpusError> {
        word.chars().iter().try_fold(0.0, |total, &ch| {
            self.get(ch)
                .map(|weight| total + weight)
                .ok_or_else(|| CorpusError::UnknownLetter {
                    word: word.text().to_string(),
                    letter: char::from(ch),
                })
        })
    }
}

impl FromIterator<(u8, f64)> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = (u8, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

//! Word corpus loading and ranking
//!
//! Reads the word list, drops previously used answers when asked to, and
//! orders the rest so the most informative guesses come first.

use super::frequency::FrequencyMap;
use crate::core::{CandidateSet, CorpusError, Word};
use log::info;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

/// Locations of the files a corpus is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusConfig {
    /// One word per line
    pub words_path: PathBuf,
    /// `letter,weight` rows with a header
    pub frequency_path: PathBuf,
    /// Previously used answers, one per line
    pub used_path: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from("words.txt"),
            frequency_path: PathBuf::from("frequency.csv"),
            used_path: PathBuf::from("used.txt"),
        }
    }
}

/// Something a session can (re)build its initial candidate set from
pub trait CorpusSource {
    /// Produce the full ranked candidate set
    ///
    /// # Errors
    ///
    /// Returns a `CorpusError` if any input cannot be read or parsed.
    fn load_candidates(&self, exclude_used: bool) -> Result<CandidateSet, CorpusError>;
}

/// Corpus read fresh from disk on every load
#[derive(Debug, Clone, Default)]
pub struct FileCorpus {
    config: CorpusConfig,
}

impl FileCorpus {
    #[must_use]
    pub const fn new(config: CorpusConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &CorpusConfig {
        &self.config
    }
}

impl CorpusSource for FileCorpus {
    fn load_candidates(&self, exclude_used: bool) -> Result<CandidateSet, CorpusError> {
        let frequencies = FrequencyMap::load(&self.config.frequency_path)?;
        let words = load_words(&self.config.words_path)?;

        let used = if exclude_used {
            let path = &self.config.used_path;
            Some(parse_used(&read_source(path)?))
        } else {
            None
        };

        build_candidates(words, used.as_ref(), &frequencies)
    }
}

/// Corpus held in memory, for embedding callers and tests
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    words: Vec<Word>,
    used: FxHashSet<String>,
    frequencies: FrequencyMap,
}

impl InMemoryCorpus {
    #[must_use]
    pub fn new(words: Vec<Word>, frequencies: FrequencyMap) -> Self {
        Self {
            words,
            used: FxHashSet::default(),
            frequencies,
        }
    }

    /// Set the previously used words, compared case-insensitively
    #[must_use]
    pub fn with_used<I, S>(mut self, used: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.used = used
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .collect();
        self
    }
}

impl CorpusSource for InMemoryCorpus {
    fn load_candidates(&self, exclude_used: bool) -> Result<CandidateSet, CorpusError> {
        let used = exclude_used.then_some(&self.used);
        build_candidates(self.words.clone(), used, &self.frequencies)
    }
}

fn read_source(path: &Path) -> Result<String, CorpusError> {
    fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a word list file
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read, or any error from
/// [`parse_words`].
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, CorpusError> {
    let path = path.as_ref();
    parse_words(&read_source(path)?, &path.display().to_string())
}

/// Parse one word per line, trimming whitespace and skipping blank lines
///
/// # Errors
///
/// Returns `CorpusError::MalformedInput` for the first line that is not a
/// 5-letter alphabetic word.
///
/// # Examples
/// ```
/// use wordle_helper::corpus::parse_words;
///
/// let words = parse_words("crane\n  slate \n\n", "inline").unwrap();
/// assert_eq!(words.len(), 2);
/// assert!(parse_words("crane\ntoolong\n", "inline").is_err());
/// ```
pub fn parse_words(content: &str, source_name: &str) -> Result<Vec<Word>, CorpusError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            Word::new(line.trim())
                .map_err(|e| CorpusError::malformed(source_name, index + 1, e.to_string()))
        })
        .collect()
}

/// Parse the used-words list into a lowercase lookup set
///
/// Entries are not validated; anything that is not a corpus word simply never
/// matches.
#[must_use]
pub fn parse_used(content: &str) -> FxHashSet<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Drop repeated words, keeping the first occurrence of each
#[must_use]
pub fn dedup_words(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|w| seen.insert(w.text().to_string()))
        .collect()
}

/// Drop duplicates, apply the used-word exclusion and rank what remains
///
/// # Errors
///
/// Returns `CorpusError::UnknownLetter` if a remaining word cannot be scored.
pub fn build_candidates(
    words: Vec<Word>,
    used: Option<&FxHashSet<String>>,
    frequencies: &FrequencyMap,
) -> Result<CandidateSet, CorpusError> {
    let total = words.len();
    let words = dedup_words(words);
    let unique = words.len();
    let words: Vec<Word> = match used {
        Some(used) => words
            .into_iter()
            .filter(|w| !used.contains(w.text()))
            .collect(),
        None => words,
    };

    let ranked = rank_words(words, frequencies)?;
    info!(
        "loaded {} candidate words ({} duplicates, {} excluded as used)",
        ranked.len(),
        total - unique,
        unique - ranked.len()
    );

    Ok(ranked)
}

/// Sort words by distinct letter count, then frequency score, both descending
///
/// The sort is stable: words that tie on both keys keep their input order.
///
/// # Errors
///
/// Returns `CorpusError::UnknownLetter` if a word has a letter missing from
/// `frequencies`.
pub fn rank_words(
    words: Vec<Word>,
    frequencies: &FrequencyMap,
) -> Result<CandidateSet, CorpusError> {
    let mut keyed = words
        .into_iter()
        .map(|word| {
            frequencies
                .score(&word)
                .map(|score| (word.distinct_count(), score, word))
        })
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by(|(count_a, score_a, _), (count_b, score_b, _)| {
        count_b
            .cmp(count_a)
            .then_with(|| score_b.partial_cmp(score_a).unwrap_or(Ordering::Equal))
    });

    Ok(keyed.into_iter().map(|(_, _, word)| word).collect())
}

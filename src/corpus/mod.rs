//! Word corpus and letter frequencies
//!
//! Builds the initial ranked candidate set from a word list, an optional
//! used-words list and a letter frequency table.

mod frequency;
mod loader;

pub use frequency::FrequencyMap;
pub use loader::{
    CorpusConfig, CorpusSource, FileCorpus, InMemoryCorpus, build_candidates, dedup_words,
    load_words, parse_used, parse_words, rank_words,
};

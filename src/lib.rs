//! Wordle Helper
//!
//! Narrows a ranked word list as guess feedback arrives and suggests words
//! that cover the most common remaining letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::Word;
//! use wordle_helper::corpus::{FrequencyMap, InMemoryCorpus};
//! use wordle_helper::engine::Session;
//!
//! let words = ["crane", "slate", "plate"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let freq: FrequencyMap = (b'a'..=b'z').map(|ch| (ch, 1.0)).collect();
//!
//! let mut session = Session::new(InMemoryCorpus::new(words, freq), false).unwrap();
//! let report = session.apply_feedback("crane", "bbggg").unwrap();
//! assert_eq!(report.remaining, 0);
//!
//! session.reset().unwrap();
//! let report = session.apply_feedback("crane", "bbgbg").unwrap();
//! assert_eq!(report.remaining, 2);
//! ```

// Core domain types
pub mod core;

// Word list and frequency loading
pub mod corpus;

// Constraint filtering and suggestions
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Errors raised while loading word and frequency sources

use std::io;
use std::path::PathBuf;

/// Failure while building a candidate corpus
///
/// Any of these aborts the whole load; no partial corpus is produced.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{source_name}, line {line}: {reason}")]
    MalformedInput {
        source_name: String,
        line: usize,
        reason: String,
    },

    #[error("word '{word}' contains '{letter}', which has no frequency weight")]
    UnknownLetter { word: String, letter: char },
}

impl CorpusError {
    pub(crate) fn malformed(source_name: &str, line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            source_name: source_name.to_string(),
            line,
            reason: reason.into(),
        }
    }
}

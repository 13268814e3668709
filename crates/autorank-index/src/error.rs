//! Error taxonomy for index construction and persistence

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("cannot read source {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record on line {line} ({content:?}): {reason}")]
    MalformedRecord {
        line: usize,
        content: String,
        #[source]
        reason: ParseRecordError,
    },

    #[error("invalid snapshot: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("cannot encode snapshot: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("cannot write snapshot {path}: {source}")]
    SnapshotWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single `name,score` line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRecordError {
    #[error("missing ',' between name and score")]
    MissingDelimiter,

    #[error("empty name")]
    EmptyName,

    #[error("score {0:?} is not a non-negative integer")]
    InvalidScore(String),

    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

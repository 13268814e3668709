//! Record type and name tokenization

use crate::error::ParseRecordError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between the words of a name
pub const TOKEN_DELIMITER: char = '_';

/// A ranked name.
///
/// Equality and hashing cover both `name` and `score`, so two entries
/// with the same name but different scores are distinct values. The
/// query path deduplicates on exactly this equality and therefore keeps
/// both, which is the behavior callers and tests rely on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub score: u64,
}

impl Record {
    pub fn new(name: impl Into<String>, score: u64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Lowercase tokens this record is indexed under
    pub fn tokens(&self) -> impl Iterator<Item = String> + '_ {
        tokenize(&self.name)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.name, self.score)
    }
}

impl FromStr for Record {
    type Err = ParseRecordError;

    /// Parse a `name,score` line. The split happens at the first comma;
    /// whitespace around the score is ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (name, score) = line
            .split_once(',')
            .ok_or(ParseRecordError::MissingDelimiter)?;

        if name.trim().is_empty() {
            return Err(ParseRecordError::EmptyName);
        }

        let score = score.trim();
        let score = score
            .parse::<u64>()
            .map_err(|_| ParseRecordError::InvalidScore(score.to_string()))?;

        Ok(Self::new(name, score))
    }
}

/// Split a name into its non-empty lowercase tokens
pub fn tokenize(name: &str) -> impl Iterator<Item = String> + '_ {
    name.trim()
        .split(TOKEN_DELIMITER)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

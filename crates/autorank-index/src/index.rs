//! Sorted token map with prefix range lookup and snapshot persistence

use crate::error::{IndexError, ParseRecordError, Result};
use crate::io::atomic_write;
use crate::record::Record;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Bound;
use std::path::Path;
use tracing::{debug, info, warn};

/// What to do with a line that does not parse as `name,score`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Fail construction on the first malformed line
    #[default]
    Abort,
    /// Skip the line and list it in the [`LoadReport`]
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub content: String,
    pub reason: ParseRecordError,
}

/// Outcome of ingesting delimited text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records accepted into the index
    pub records: usize,
    /// Blank or whitespace-only lines, always ignored
    pub blank: usize,
    pub skipped: Vec<SkippedLine>,
}

/// Token → records mapping, iterated in ascending token order.
///
/// Built once and read-only afterwards; share it by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Index {
    tokens: BTreeMap<String, Vec<Record>>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every record under each of its tokens. No deduplication:
    /// repeated records get repeated entries.
    pub fn build_from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.insert(record);
        }
        index
    }

    fn insert(&mut self, record: Record) {
        for token in record.tokens() {
            self.tokens.entry(token).or_default().push(record.clone());
        }
    }

    /// Build from `name,score` lines
    pub fn from_reader<R: BufRead>(
        reader: R,
        policy: MalformedPolicy,
    ) -> Result<(Self, LoadReport)> {
        Self::ingest(reader, policy, Path::new("<reader>"))
    }

    /// Build from a delimited text file
    pub fn from_csv_path(path: &Path, policy: MalformedPolicy) -> Result<(Self, LoadReport)> {
        info!("building index from text file {}", path.display());
        let file = File::open(path).map_err(|source| IndexError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::ingest(BufReader::new(file), policy, path)
    }

    fn ingest<R: BufRead>(
        reader: R,
        policy: MalformedPolicy,
        path: &Path,
    ) -> Result<(Self, LoadReport)> {
        let mut index = Self::new();
        let mut report = LoadReport::default();

        for (idx, bytes) in reader.split(b'\n').enumerate() {
            let mut bytes = bytes.map_err(|source| IndexError::SourceRead {
                path: path.to_path_buf(),
                source,
            })?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            let line_no = idx + 1;

            let (line, parsed) = match String::from_utf8(bytes) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        report.blank += 1;
                        continue;
                    }
                    let parsed = line.parse::<Record>();
                    (line, parsed)
                }
                Err(err) => (
                    String::from_utf8_lossy(err.as_bytes()).into_owned(),
                    Err(ParseRecordError::InvalidUtf8),
                ),
            };

            match parsed {
                Ok(record) => {
                    index.insert(record);
                    report.records += 1;
                }
                Err(reason) => match policy {
                    MalformedPolicy::Abort => {
                        return Err(IndexError::MalformedRecord {
                            line: line_no,
                            content: line,
                            reason,
                        });
                    }
                    MalformedPolicy::Skip => {
                        warn!("skipping line {}: {} ({:?})", line_no, reason, line);
                        report.skipped.push(SkippedLine {
                            line: line_no,
                            content: line,
                            reason,
                        });
                    }
                },
            }
        }

        info!(
            "indexed {} records under {} tokens ({} skipped)",
            report.records,
            index.len(),
            report.skipped.len()
        );
        Ok((index, report))
    }

    /// Restore an index from snapshot bytes
    pub fn load_snapshot(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(IndexError::Deserialization)
    }

    pub fn open_snapshot(path: &Path) -> Result<Self> {
        info!("reconstructing index from snapshot {}", path.display());
        let bytes = std::fs::read(path).map_err(|source| IndexError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_snapshot(&bytes)
    }

    /// Open either kind of source: `.json` files are snapshots, anything
    /// else is read as delimited text.
    pub fn open(path: &Path, policy: MalformedPolicy) -> Result<(Self, LoadReport)> {
        let is_snapshot = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_snapshot {
            let index = Self::open_snapshot(path)?;
            let report = LoadReport {
                records: index.record_count(),
                ..LoadReport::default()
            };
            Ok((index, report))
        } else {
            Self::from_csv_path(path, policy)
        }
    }

    /// Encode the mapping, tokens in ascending order
    pub fn to_snapshot(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(IndexError::Serialization)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(IndexError::Serialization)
    }

    pub fn write_snapshot(&self, path: &Path) -> Result<()> {
        info!("writing snapshot to {}", path.display());
        let bytes = self.to_snapshot()?;
        atomic_write(path, &bytes).map_err(|source| IndexError::SnapshotWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Tokens starting with the normalized prefix, with their records,
    /// in ascending token order. Scans only the matching key range.
    pub fn matching<'a>(
        &'a self,
        prefix: &str,
    ) -> impl Iterator<Item = (&'a str, &'a [Record])> + 'a {
        let prefix = normalize_prefix(prefix);
        let range = self
            .tokens
            .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded));

        range
            .take_while(move |(token, _)| token.starts_with(prefix.as_str()))
            .map(|(token, records)| (token.as_str(), records.as_slice()))
    }

    /// Record lists of every token matching `prefix`
    pub fn lookup(&self, prefix: &str) -> Vec<&[Record]> {
        let lists: Vec<_> = self.matching(prefix).map(|(_, records)| records).collect();
        debug!("prefix {:?} matched {} tokens", prefix, lists.len());
        lists
    }

    pub fn get(&self, token: &str) -> Option<&[Record]> {
        self.tokens.get(token).map(Vec::as_slice)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.tokens
            .iter()
            .map(|(token, records)| (token.as_str(), records.as_slice()))
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Total list entries across all tokens
    pub fn record_count(&self) -> usize {
        self.tokens.values().map(Vec::len).sum()
    }
}

/// Snapshots are a JSON object keyed by token; a repeated token is
/// rejected rather than letting the later list replace the earlier one.
impl<'de> Deserialize<'de> for Index {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TokenMapVisitor)
    }
}

struct TokenMapVisitor;

impl<'de> Visitor<'de> for TokenMapVisitor {
    type Value = Index;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from token to a list of records")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Index, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut tokens = BTreeMap::new();
        while let Some((token, records)) = map.next_entry::<String, Vec<Record>>()? {
            match tokens.entry(token) {
                Entry::Occupied(entry) => {
                    return Err(de::Error::custom(format_args!(
                        "duplicate token {:?}",
                        entry.key()
                    )));
                }
                Entry::Vacant(entry) => {
                    entry.insert(records);
                }
            }
        }
        Ok(Index { tokens })
    }
}

fn normalize_prefix(prefix: &str) -> String {
    prefix.trim().to_lowercase()
}

//! Deduplicating top-K selection over prefix matches

use autorank_index::{Index, Record};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use tracing::{debug, trace};

/// Answers top-K queries against a borrowed, immutable [`Index`]
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    index: &'a Index,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a Index) -> Self {
        Self { index }
    }

    /// Names of the `k` highest-scoring records with a token starting
    /// with `prefix`, best first.
    pub fn top_matches(&self, prefix: &str, k: usize) -> Vec<String> {
        self.top_records(prefix, k)
            .into_iter()
            .map(|record| record.name.clone())
            .collect()
    }

    /// Like [`top_matches`](Self::top_matches) but keeps the scores.
    ///
    /// Candidates are deduplicated on the whole record, so the same
    /// name listed with two different scores yields two results. Equal
    /// scores are ordered by name ascending.
    pub fn top_records(&self, prefix: &str, k: usize) -> Vec<&'a Record> {
        if k == 0 {
            return Vec::new();
        }

        let candidates = self.candidates(prefix);
        debug!(
            "{} unique candidates for prefix {:?}",
            candidates.len(),
            prefix
        );

        let mut heap = BinaryHeap::with_capacity(k.min(candidates.len()) + 1);
        for record in candidates {
            trace!("offering {} to the selection heap", record);
            heap.push(Reverse(Ranked(record)));
            if heap.len() > k {
                heap.pop();
            }
        }

        let mut selected: Vec<Ranked<'a>> = heap.into_iter().map(|Reverse(r)| r).collect();
        selected.sort_unstable_by(|a, b| b.cmp(a));
        selected.into_iter().map(|Ranked(record)| record).collect()
    }

    /// Flattened prefix matches with repeated records removed, first
    /// occurrence kept
    fn candidates(&self, prefix: &str) -> Vec<&'a Record> {
        let mut seen = HashSet::new();
        self.index
            .lookup(prefix)
            .into_iter()
            .flatten()
            .filter(|record| seen.insert(*record))
            .collect()
    }
}

/// Ordering used for selection: higher score is better, and among equal
/// scores the lexicographically smaller name is better.
#[derive(Debug, PartialEq, Eq)]
struct Ranked<'a>(&'a Record);

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .score
            .cmp(&other.0.score)
            .then_with(|| other.0.name.cmp(&self.0.name))
    }
}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//! Runtime configuration

use anyhow::{Context, Result};
use autorank_index::MalformedPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_TOP_K: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Result count when a query does not give one
    pub top_k: usize,

    /// Handling of lines that are not `name,score`
    pub malformed: MalformedPolicy,
}

impl Config {
    pub fn new() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            malformed: MalformedPolicy::Abort,
        }
    }

    /// Read a JSON config file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

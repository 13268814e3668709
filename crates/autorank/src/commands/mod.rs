pub mod build;
pub mod query;
pub mod stats;
pub mod version;

use anyhow::Result;
use autorank_core::{Config, MalformedPolicy};
use std::path::Path;

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

fn policy(config: &Config, skip_malformed: bool) -> MalformedPolicy {
    if skip_malformed {
        MalformedPolicy::Skip
    } else {
        config.malformed
    }
}

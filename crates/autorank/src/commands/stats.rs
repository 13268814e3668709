use anyhow::Context;
use autorank_core::{Config, Index};
use std::path::Path;

pub fn run(config: &Config, source: &Path, skip_malformed: bool) -> anyhow::Result<()> {
    let (index, report) = Index::open(source, super::policy(config, skip_malformed))
        .with_context(|| format!("Failed to load index from {}", source.display()))?;

    println!("Index: {}", source.display());
    println!("==================");
    println!("Tokens: {}", index.len());
    println!("Entries: {}", index.record_count());
    println!("Records read: {}", report.records);
    println!("Blank lines: {}", report.blank);
    println!("Skipped lines: {}", report.skipped.len());
    for skipped in &report.skipped {
        println!("  line {}: {} ({:?})", skipped.line, skipped.reason, skipped.content);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&Config::default(), &dir.path().join("missing.csv"), false);
        assert!(result.is_err());
    }
}

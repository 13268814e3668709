use anyhow::Context;
use autorank_core::{Config, Index};
use std::path::Path;

pub fn run(
    config: &Config,
    input: &Path,
    output: &Path,
    skip_malformed: bool,
) -> anyhow::Result<()> {
    let (index, report) = Index::from_csv_path(input, super::policy(config, skip_malformed))
        .with_context(|| format!("Failed to build index from {}", input.display()))?;

    index.write_snapshot(output)?;

    println!(
        "Indexed {} records under {} tokens -> {}",
        report.records,
        index.len(),
        output.display()
    );
    if !report.skipped.is_empty() {
        println!("Skipped {} malformed lines", report.skipped.len());
    }
    Ok(())
}

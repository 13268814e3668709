use anyhow::Context;
use autorank_core::{Config, Index, QueryEngine, Record};
use std::path::Path;

pub fn run(
    config: &Config,
    source: &Path,
    prefix: &str,
    k: Option<usize>,
    scores: bool,
    json: bool,
) -> anyhow::Result<()> {
    let (index, _) = Index::open(source, config.malformed)
        .with_context(|| format!("Failed to load index from {}", source.display()))?;
    let engine = QueryEngine::new(&index);
    let records = engine.top_records(prefix, k.unwrap_or(config.top_k));

    println!("{}", render(&records, scores, json)?);
    Ok(())
}

fn render(records: &[&Record], scores: bool, json: bool) -> anyhow::Result<String> {
    let out = match (json, scores) {
        (true, true) => serde_json::to_string(records)?,
        (true, false) => {
            let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
            serde_json::to_string(&names)?
        }
        (false, true) => records
            .iter()
            .map(|r| format!("{}\t{}", r.name, r.score))
            .collect::<Vec<_>>()
            .join("\n"),
        (false, false) => records
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(out)
}

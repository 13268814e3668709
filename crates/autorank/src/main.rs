mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so query output stays pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Build {
            input,
            output,
            skip_malformed,
        } => commands::build::run(&config, &input, &output, skip_malformed),
        Commands::Query {
            source,
            prefix,
            k,
            scores,
            json,
        } => commands::query::run(&config, &source, &prefix, k, scores, json),
        Commands::Stats {
            source,
            skip_malformed,
        } => commands::stats::run(&config, &source, skip_malformed),
        Commands::Version => commands::version::run(),
    }
}

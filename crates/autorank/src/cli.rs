use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autorank")]
#[command(version)]
#[command(about = "Prefix autocomplete ranked by score")]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a snapshot from `name,score` lines
    Build {
        /// Delimited text input
        input: PathBuf,

        /// Snapshot file to write
        #[arg(short, long)]
        output: PathBuf,

        /// Skip malformed lines instead of failing
        #[arg(long)]
        skip_malformed: bool,
    },

    /// Print the top matches for a prefix
    Query {
        /// Snapshot (.json) or delimited text file
        source: PathBuf,

        /// Token prefix, case-insensitive
        prefix: String,

        /// Number of results (defaults to config top_k)
        #[arg(short)]
        k: Option<usize>,

        /// Show scores next to names
        #[arg(long)]
        scores: bool,

        /// Print results as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show index statistics
    Stats {
        /// Snapshot (.json) or delimited text file
        source: PathBuf,

        /// Skip malformed lines instead of failing
        #[arg(long)]
        skip_malformed: bool,
    },

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["autorank", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_build() {
        let cli =
            Cli::try_parse_from(["autorank", "build", "data.csv", "-o", "index.json"]).unwrap();
        if let Commands::Build {
            input,
            output,
            skip_malformed,
        } = cli.command
        {
            assert_eq!(input, PathBuf::from("data.csv"));
            assert_eq!(output, PathBuf::from("index.json"));
            assert!(!skip_malformed);
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_cli_parse_query() {
        let cli = Cli::try_parse_from([
            "autorank", "query", "index.json", "sal", "-k", "4", "--scores", "--config", "c.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.json")));
        if let Commands::Query {
            prefix, k, scores, json, ..
        } = cli.command
        {
            assert_eq!(prefix, "sal");
            assert_eq!(k, Some(4));
            assert!(scores);
            assert!(!json);
        } else {
            panic!("Expected Query command");
        }
    }

    #[test]
    fn test_cli_rejects_negative_k() {
        let cli = Cli::try_parse_from(["autorank", "query", "index.json", "sal", "-k", "-1"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_query_empty_prefix() {
        let cli = Cli::try_parse_from(["autorank", "query", "index.json", ""]).unwrap();
        assert!(matches!(cli.command, Commands::Query { prefix, .. } if prefix.is_empty()));
    }
}

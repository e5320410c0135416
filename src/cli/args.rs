//! Command line argument parsing for the Pilum CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::index::block::DEFAULT_BLOCK_TERM_LIMIT;

/// Pilum - a positional inverted index with exact phrase search
#[derive(Parser, Debug, Clone)]
#[command(name = "pilum")]
#[command(about = "A memory-bounded positional inverted index with exact phrase search")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PilumArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PilumArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a positional index from a directory of documents
    Index(IndexArgs),

    /// Run an exact phrase query against a built index
    Search(SearchArgs),
}

/// Arguments for building an index
#[derive(Parser, Debug, Clone)]
pub struct IndexArgs {
    /// Directory containing the documents to index
    #[arg(value_name = "DOCS_DIR")]
    pub docs_dir: PathBuf,

    /// Directory receiving block files, the merged index, and the docID mapping
    #[arg(short, long, value_name = "INDEX_DIR", default_value = "index")]
    pub index_dir: PathBuf,

    /// Distinct terms held in memory before a block is flushed to disk
    #[arg(long, env = "PILUM_BLOCK_TERM_LIMIT", default_value_t = DEFAULT_BLOCK_TERM_LIMIT)]
    pub block_term_limit: usize,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Directory holding the merged index and the docID mapping
    #[arg(value_name = "INDEX_DIR")]
    pub index_dir: PathBuf,

    /// Phrase to search for
    #[arg(value_name = "PHRASE")]
    pub phrase: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_index_command() {
        let args = PilumArgs::try_parse_from([
            "pilum",
            "index",
            "./docs",
            "--index-dir",
            "./out",
            "--block-term-limit",
            "100",
        ])
        .unwrap();

        if let Command::Index(index_args) = args.command {
            assert_eq!(index_args.docs_dir, PathBuf::from("./docs"));
            assert_eq!(index_args.index_dir, PathBuf::from("./out"));
            assert_eq!(index_args.block_term_limit, 100);
        } else {
            panic!("Expected Index command");
        }
    }

    #[test]
    fn test_index_default_block_term_limit() {
        let args = PilumArgs::try_parse_from(["pilum", "index", "./docs"]).unwrap();

        if let Command::Index(index_args) = args.command {
            assert_eq!(index_args.block_term_limit, DEFAULT_BLOCK_TERM_LIMIT);
        } else {
            panic!("Expected Index command");
        }
    }

    #[test]
    fn test_search_command() {
        let args =
            PilumArgs::try_parse_from(["pilum", "search", "./out", "quick brown fox"]).unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.index_dir, PathBuf::from("./out"));
            assert_eq!(search_args.phrase, "quick brown fox");
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = PilumArgs::try_parse_from(["pilum", "index", "./docs"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = PilumArgs::try_parse_from(["pilum", "-vv", "index", "./docs"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = PilumArgs::try_parse_from(["pilum", "--quiet", "index", "./docs"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            PilumArgs::try_parse_from(["pilum", "--format", "json", "index", "./docs"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}

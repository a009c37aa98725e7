//! neogen library
//!
//! Generates fake Neo4j graphs from a declarative schema. The heavy lifting
//! lives in the member crates; this crate holds the command-line options and
//! the command handlers shared by the `neogen` binary and the tests.
//!
//! - `graph_schema` - schema model, graph model and errors
//! - `graph_generator` - value generators and the schema processor
//! - `cypher_builder` - Cypher statement rendering
//! - `graph_json` - graph and style JSON exports
//!
//! # CLI Usage
//!
//! ```bash
//! # Cypher statements on stdout, random seed (logged)
//! neogen generate --schema social.yml
//!
//! # Reproducible graph JSON written to a file
//! neogen generate --schema social.yml --seed 42 --format graph-json --output graph.json
//!
//! # Check a schema without generating anything
//! neogen validate --schema social.yml
//! ```

use chrono::NaiveDateTime;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

pub mod commands;

pub use commands::generate::{render, run_generate};
pub use commands::validate::{run_validate, ValidationSummary};

/// Output document produced by `generate`.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Constraint pairs followed by one statement per line
    #[default]
    Cypher,
    /// Flattened `{nodes, edges}` document
    GraphJson,
    /// Styled `{style, nodes, edges}` document
    StyleJson,
}

/// Schema location, shared by every subcommand.
#[derive(Args, Clone, Debug)]
pub struct SchemaArgs {
    /// Path to the schema file (.yml, .yaml or .json)
    #[arg(long, short = 's', env = "NEOGEN_SCHEMA")]
    pub schema: PathBuf,

    /// Fixed "now" for relative date expressions (YYYY-MM-DD HH:MM:SS)
    #[arg(long, value_parser = parse_reference_time)]
    pub reference_time: Option<NaiveDateTime>,
}

#[derive(Args, Clone, Debug)]
pub struct GenerateOpts {
    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Random seed (same seed + schema = same graph); drawn at random if omitted
    #[arg(long, env = "NEOGEN_SEED")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Cypher)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Skip the uniqueness constraint statements in Cypher output
    #[arg(long)]
    pub no_constraints: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

fn parse_reference_time(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| format!("expected YYYY-MM-DD HH:MM:SS: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_time() {
        let dt = parse_reference_time("2024-03-01 10:20:30").unwrap();
        assert_eq!(dt.to_string(), "2024-03-01 10:20:30");
        assert!(parse_reference_time("2024-03-01T10:20:30").is_ok());
        assert!(parse_reference_time("yesterday").is_err());
    }
}

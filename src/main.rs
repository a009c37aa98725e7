//! Command-line interface for neogen
//!
//! # Usage Examples
//!
//! ```bash
//! # Cypher statements for a schema, reproducible with a fixed seed
//! neogen generate --schema social.yml --seed 42 > graph.cypher
//!
//! # Graph JSON for a visualizer, without the constraint pairs
//! neogen generate --schema social.yml --format graph-json --pretty --output graph.json
//!
//! # Style JSON
//! neogen generate --schema social.yml --format style-json
//!
//! # Validate a schema
//! neogen validate --schema social.yml
//! ```
//!
//! Logs go to stderr at `info` unless `RUST_LOG` says otherwise. The seed of
//! every run is logged there.

use clap::{Parser, Subcommand};
use neogen::{run_generate, run_validate, GenerateOpts, SchemaArgs};

#[derive(Parser)]
#[command(name = "neogen")]
#[command(about = "Generate fake Neo4j graphs from a declarative schema")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a graph and write it as Cypher or JSON
    Generate(GenerateOpts),

    /// Check a schema without generating anything
    Validate(SchemaArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(opts) => {
            run_generate(&opts)?;
        }
        Commands::Validate(args) => {
            let summary = run_validate(&args)?;
            println!(
                "Schema OK: {} labels, {} node instances, {} relationships",
                summary.labels, summary.node_instances, summary.relationships
            );
        }
    }

    Ok(())
}

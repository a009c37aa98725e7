//! `neogen generate` command handler.

use super::load_schema;
use crate::{GenerateOpts, OutputFormat};
use anyhow::Context;
use cypher_builder::StatementBuilder;
use graph_generator::{ProcessedGraph, SchemaProcessor};
use graph_json::{GraphJson, StyleJson};
use std::io::Write;
use tracing::info;

/// Run the generate command: returns the seed that was used.
pub fn run_generate(opts: &GenerateOpts) -> anyhow::Result<u64> {
    let schema = load_schema(&opts.schema)?;

    let seed = opts.seed.unwrap_or_else(rand::random);
    info!("Using seed {seed}");

    let mut processor = SchemaProcessor::new(seed);
    if let Some(now) = opts.schema.reference_time {
        processor = processor.with_reference_time(now);
    }
    let mut result = processor
        .process(&schema)
        .with_context(|| format!("Invalid schema {:?}", opts.schema.schema))?;

    let document = render(&mut result, opts.format, !opts.no_constraints, opts.pretty)
        .context("Failed to serialize output")?;

    match &opts.output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("Failed to write output to {path:?}"))?;
            info!(
                "Wrote {} nodes and {} relationships to {:?}",
                result.graph().node_count(),
                result.graph().edge_count(),
                path
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .context("Failed to write output to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(seed)
}

/// Render a processed graph in the requested format.
///
/// Cypher output is newline separated: constraint pairs first (when
/// requested), then every statement terminated by `;`.
pub fn render<B: StatementBuilder>(
    result: &mut ProcessedGraph<B>,
    format: OutputFormat,
    constraints: bool,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    let document = match format {
        OutputFormat::Cypher => {
            let mut lines = Vec::new();
            if constraints {
                lines.extend(result.constraints().iter().map(|c| c.trim_end().to_string()));
            }
            lines.extend(result.queries().iter().map(|q| format!("{q};")));
            lines.join("\n")
        }
        OutputFormat::GraphJson => {
            let doc = GraphJson::from_graph(result.graph());
            if pretty {
                doc.to_json_string_pretty()?
            } else {
                doc.to_json_string()?
            }
        }
        OutputFormat::StyleJson => {
            let doc = StyleJson::from_graph(result.graph());
            if pretty {
                doc.to_json_string_pretty()?
            } else {
                doc.to_json_string()?
            }
        }
    };
    Ok(document + "\n")
}

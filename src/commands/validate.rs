//! `neogen validate` command handler.

use super::load_schema;
use crate::SchemaArgs;
use anyhow::Context;
use graph_generator::SchemaProcessor;
use tracing::info;

/// What a schema would produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSummary {
    pub labels: usize,
    pub node_instances: u64,
    pub relationships: usize,
}

/// Parse the schema and resolve every generator without generating anything.
pub fn run_validate(args: &SchemaArgs) -> anyhow::Result<ValidationSummary> {
    let schema = load_schema(args)?;

    let mut processor = SchemaProcessor::new(0);
    if let Some(now) = args.reference_time {
        processor = processor.with_reference_time(now);
    }
    let plan = processor
        .compile(&schema)
        .with_context(|| format!("Invalid schema {:?}", args.schema))?;

    let summary = ValidationSummary {
        labels: schema.labels().len(),
        node_instances: plan.node_total(),
        relationships: plan.relationships.len(),
    };
    info!("Schema {:?} is valid: {:?}", args.schema, summary);
    Ok(summary)
}

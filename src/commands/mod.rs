//! Command handlers.

pub mod generate;
pub mod validate;

use crate::SchemaArgs;
use anyhow::Context;
use graph_schema::Schema;

/// Load the schema named on the command line.
pub(crate) fn load_schema(args: &SchemaArgs) -> anyhow::Result<Schema> {
    Schema::from_file(&args.schema)
        .with_context(|| format!("Failed to load schema from {:?}", args.schema))
}

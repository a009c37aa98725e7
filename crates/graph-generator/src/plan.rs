//! Schema compilation.
//!
//! A [`GenerationPlan`] is a [`Schema`] with every generator resolved and
//! every relationship endpoint checked. Compiling is the only fallible step
//! of a run, so configuration mistakes surface before a single statement is
//! produced.

use crate::generators::{GeneratorConfig, ValueGenerator};
use graph_schema::{
    CardinalityMode, ConfigurationError, NodeSpec, OrderedMap, PropertySpec, RelationshipSpec,
    Schema, NEOGEN_ID,
};
use tracing::debug;

/// Resolved property generators, in declaration order.
pub type PropertyPlan = Vec<(String, GeneratorConfig)>;

#[derive(Debug, Clone, PartialEq)]
pub struct NodePlan {
    pub label: String,
    pub count: u64,
    pub properties: PropertyPlan,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipPlan {
    /// Key of the relationship in the schema
    pub key: String,
    pub start: String,
    pub end: String,
    pub rel_type: String,
    pub mode: CardinalityMode,
    pub properties: PropertyPlan,
}

/// A fully validated schema.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPlan {
    pub nodes: Vec<NodePlan>,
    pub relationships: Vec<RelationshipPlan>,
}

impl GenerationPlan {
    /// Validate `schema` and resolve all of its generators.
    pub fn compile(schema: &Schema, values: &ValueGenerator) -> Result<Self, ConfigurationError> {
        let node_specs = schema.node_specs()?;
        let labels = schema.labels();

        let nodes = node_specs
            .iter()
            .map(|spec| compile_node(spec, values))
            .collect::<Result<Vec<_>, _>>()?;

        let mut relationships = Vec::with_capacity(schema.relationships.len());
        for (key, spec) in schema.relationships.iter() {
            for label in [&spec.start, &spec.end] {
                if !labels.contains(&label.as_str()) {
                    return Err(ConfigurationError::UndeclaredLabel {
                        relationship: key.to_string(),
                        label: label.clone(),
                    });
                }
            }
            relationships.push(compile_relationship(key, spec, values)?);
        }

        debug!(
            "Compiled plan: {} node specs, {} relationships",
            nodes.len(),
            relationships.len()
        );

        Ok(Self {
            nodes,
            relationships,
        })
    }

    /// Number of node instances the plan will produce.
    pub fn node_total(&self) -> u64 {
        self.nodes.iter().map(|n| n.count).sum()
    }
}

fn compile_node(spec: &NodeSpec, values: &ValueGenerator) -> Result<NodePlan, ConfigurationError> {
    // Every node statement carries its own `neogen_id`.
    if spec.properties.contains_key(NEOGEN_ID) {
        return Err(ConfigurationError::ReservedProperty {
            label: spec.label.clone(),
            property: NEOGEN_ID.to_string(),
        });
    }
    Ok(NodePlan {
        label: spec.label.clone(),
        count: spec.count,
        properties: compile_properties(&spec.properties, values)?,
    })
}

fn compile_relationship(
    key: &str,
    spec: &RelationshipSpec,
    values: &ValueGenerator,
) -> Result<RelationshipPlan, ConfigurationError> {
    Ok(RelationshipPlan {
        key: key.to_string(),
        start: spec.start.clone(),
        end: spec.end.clone(),
        rel_type: spec.rel_type.clone(),
        mode: spec.mode,
        properties: compile_properties(&spec.properties, values)?,
    })
}

fn compile_properties(
    properties: &OrderedMap<PropertySpec>,
    values: &ValueGenerator,
) -> Result<PropertyPlan, ConfigurationError> {
    properties
        .iter()
        .map(|(name, spec)| Ok((name.to_string(), values.resolve(name, spec)?)))
        .collect()
}

//! Schema definitions for graph fixture generation.
//!
//! A schema declares which node labels to generate (and how many of each),
//! which properties each node carries, and how labels are connected by
//! relationships.
//!
//! ## Shape
//!
//! ```yaml
//! nodes:
//!   - label: Person
//!     count: 10
//!     properties:
//!       firstname: firstName
//!       birth: { type: dateTimeBetween, params: ["-65 years", "-18 years"] }
//!   - label: Company
//!     count: 3
//! relationships:
//!   person_works_at:
//!     start: Person
//!     end: Company
//!     type: WORKS_AT
//!     mode: n..1
//! ```
//!
//! `nodes` may also be written as a mapping of alias -> node-spec; the
//! aliases carry no meaning and are dropped, declaration order is kept.

use crate::error::ConfigurationError;
use crate::ordered::OrderedMap;
use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

// ============================================================================
// Property Specs
// ============================================================================

/// Reference to a value generator, as written in the schema.
///
/// Resolution into a concrete generator happens in `graph-generator`; this
/// type only records what the schema author wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertySpec {
    /// Bare generator name, e.g. `firstName`
    Named(String),

    /// Generator name with an ordered parameter list
    Parameterized {
        /// Generator name
        #[serde(rename = "type")]
        generator: String,

        /// Positional parameters
        #[serde(default)]
        params: Vec<serde_json::Value>,
    },
}

impl PropertySpec {
    /// Create a bare named spec.
    pub fn named(generator: impl Into<String>) -> Self {
        Self::Named(generator.into())
    }

    /// Create a spec with parameters.
    pub fn with_params(generator: impl Into<String>, params: Vec<serde_json::Value>) -> Self {
        Self::Parameterized {
            generator: generator.into(),
            params,
        }
    }

    /// The generator name this spec refers to.
    pub fn generator_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Parameterized { generator, .. } => generator,
        }
    }

    /// The positional parameters (empty for bare names).
    pub fn params(&self) -> &[serde_json::Value] {
        match self {
            Self::Named(_) => &[],
            Self::Parameterized { params, .. } => params,
        }
    }
}

// ============================================================================
// Node Specs
// ============================================================================

fn default_count() -> u64 {
    1
}

/// Declaration of one node label to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Node label
    pub label: String,

    /// Number of instances to generate
    #[serde(default = "default_count")]
    pub count: u64,

    /// Property name -> generator
    #[serde(default, skip_serializing_if = "OrderedMap::is_empty")]
    pub properties: OrderedMap<PropertySpec>,
}

impl NodeSpec {
    /// Create a node spec with count 1 and no properties.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            count: default_count(),
            properties: OrderedMap::new(),
        }
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, spec: PropertySpec) -> Self {
        self.properties.insert(name, spec);
        self
    }
}

// ============================================================================
// Relationship Specs
// ============================================================================

/// How instances of two labels get connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardinalityMode {
    /// Every start instance points at one random end instance
    #[serde(rename = "n..1")]
    ManyToOne,

    /// Every start instance points at a random subset of end instances
    #[serde(rename = "n..n")]
    ManyToMany,

    /// Every end instance is pointed at by one random start instance
    #[serde(rename = "1..n")]
    OneToMany,
}

impl fmt::Display for CardinalityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ManyToOne => "n..1",
            Self::ManyToMany => "n..n",
            Self::OneToMany => "1..n",
        };
        f.write_str(s)
    }
}

/// Declaration of one relationship between two labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipSpec {
    /// Label of the start node
    pub start: String,

    /// Label of the end node
    pub end: String,

    /// Relationship type
    #[serde(rename = "type")]
    pub rel_type: String,

    /// Cardinality mode
    pub mode: CardinalityMode,

    /// Property name -> generator, evaluated once per edge
    #[serde(default, skip_serializing_if = "OrderedMap::is_empty")]
    pub properties: OrderedMap<PropertySpec>,
}

impl RelationshipSpec {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        rel_type: impl Into<String>,
        mode: CardinalityMode,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            rel_type: rel_type.into(),
            mode,
            properties: OrderedMap::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, spec: PropertySpec) -> Self {
        self.properties.insert(name, spec);
        self
    }
}

// ============================================================================
// Schema
// ============================================================================

/// Full generation schema.
///
/// `nodes` is optional at the type level so that a schema without it can be
/// parsed and rejected with [`ConfigurationError::MissingNodes`] instead of
/// an opaque parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Node declarations in declaration order
    #[serde(
        default,
        deserialize_with = "deserialize_node_specs",
        skip_serializing_if = "Option::is_none"
    )]
    pub nodes: Option<Vec<NodeSpec>>,

    /// Relationship key -> relationship declaration
    #[serde(default)]
    pub relationships: OrderedMap<RelationshipSpec>,
}

impl Schema {
    /// Create an empty schema with an empty `nodes` section.
    pub fn new() -> Self {
        Self {
            nodes: Some(Vec::new()),
            relationships: OrderedMap::new(),
        }
    }

    pub fn with_node(mut self, node: NodeSpec) -> Self {
        self.nodes.get_or_insert_with(Vec::new).push(node);
        self
    }

    pub fn with_relationship(mut self, key: impl Into<String>, rel: RelationshipSpec) -> Self {
        self.relationships.insert(key, rel);
        self
    }

    /// Load schema from a YAML or JSON file, chosen by extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let content = fs::read_to_string(path)?;
        match extension.as_str() {
            "yml" | "yaml" => Self::from_yaml(&content),
            "json" => Self::from_json(&content),
            _ => Err(ConfigurationError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }

    /// Parse schema from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse schema from JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Node declarations, or `MissingNodes` when the section is absent.
    pub fn node_specs(&self) -> Result<&[NodeSpec], ConfigurationError> {
        self.nodes
            .as_deref()
            .ok_or(ConfigurationError::MissingNodes)
    }

    /// Distinct declared labels in first-declaration order.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for node in self.nodes.iter().flatten() {
            if !labels.contains(&node.label.as_str()) {
                labels.push(&node.label);
            }
        }
        labels
    }
}

struct NodeSpecsVisitor;

impl<'de> Visitor<'de> for NodeSpecsVisitor {
    type Value = Option<Vec<NodeSpec>>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of node specs or a map of alias to node spec")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut nodes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(node) = seq.next_element::<NodeSpec>()? {
            nodes.push(node);
        }
        Ok(Some(nodes))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut nodes = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((_alias, node)) = map.next_entry::<String, NodeSpec>()? {
            nodes.push(node);
        }
        Ok(Some(nodes))
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }
}

fn deserialize_node_specs<'de, D>(deserializer: D) -> Result<Option<Vec<NodeSpec>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(NodeSpecsVisitor)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_SCHEMA: &str = r#"
nodes:
  - label: Person
    count: 10
    properties:
      firstname: firstName
      lastname: lastName
      birth:
        type: dateTimeBetween
        params: ["-65 years", "-18 years"]
  - label: Company
    count: 3
    properties:
      name: company

relationships:
  person_works_at:
    start: Person
    end: Company
    type: WORKS_AT
    mode: n..1
    properties:
      since: { type: numberBetween, params: [1990, 2020] }
  person_knows:
    start: Person
    end: Person
    type: KNOWS
    mode: n..n
"#;

    #[test]
    fn test_parse_schema() {
        let schema = Schema::from_yaml(SAMPLE_SCHEMA).unwrap();

        let nodes = schema.node_specs().unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].label, "Person");
        assert_eq!(nodes[0].count, 10);

        let props: Vec<&str> = nodes[0].properties.keys().collect();
        assert_eq!(props, vec!["firstname", "lastname", "birth"]);
        assert_eq!(
            nodes[0].properties.get("firstname"),
            Some(&PropertySpec::named("firstName"))
        );

        let birth = nodes[0].properties.get("birth").unwrap();
        assert_eq!(birth.generator_name(), "dateTimeBetween");
        assert_eq!(birth.params().len(), 2);
    }

    #[test]
    fn test_relationship_order_and_modes() {
        let schema = Schema::from_yaml(SAMPLE_SCHEMA).unwrap();

        let keys: Vec<&str> = schema.relationships.keys().collect();
        assert_eq!(keys, vec!["person_works_at", "person_knows"]);

        let works_at = schema.relationships.get("person_works_at").unwrap();
        assert_eq!(works_at.mode, CardinalityMode::ManyToOne);
        assert_eq!(works_at.rel_type, "WORKS_AT");
        assert_eq!(works_at.properties.len(), 1);

        let knows = schema.relationships.get("person_knows").unwrap();
        assert_eq!(knows.mode, CardinalityMode::ManyToMany);
        assert!(knows.properties.is_empty());
    }

    #[test]
    fn test_count_defaults_to_one() {
        let schema = Schema::from_yaml("nodes:\n  - label: Single\n").unwrap();
        assert_eq!(schema.node_specs().unwrap()[0].count, 1);
        assert!(schema.relationships.is_empty());
    }

    #[test]
    fn test_nodes_as_alias_map() {
        let yaml = r#"
nodes:
  persons:
    label: Person
    count: 2
  companies:
    label: Company
"#;
        let schema = Schema::from_yaml(yaml).unwrap();
        assert_eq!(schema.labels(), vec!["Person", "Company"]);
    }

    #[test]
    fn test_missing_nodes() {
        let schema = Schema::from_yaml("relationships: {}\n").unwrap();
        assert!(schema.nodes.is_none());
        assert!(matches!(
            schema.node_specs(),
            Err(ConfigurationError::MissingNodes)
        ));

        let schema = Schema::from_yaml("nodes: ~\n").unwrap();
        assert!(matches!(
            schema.node_specs(),
            Err(ConfigurationError::MissingNodes)
        ));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let yaml = r#"
nodes:
  - label: A
relationships:
  broken:
    start: A
    end: A
    type: LINKS
    mode: "2..2"
"#;
        assert!(matches!(
            Schema::from_yaml(yaml),
            Err(ConfigurationError::Yaml(_))
        ));
    }

    #[test]
    fn test_labels_deduplicated() {
        let schema = Schema::new()
            .with_node(NodeSpec::new("Person").with_count(2))
            .with_node(NodeSpec::new("Company"))
            .with_node(NodeSpec::new("Person"));
        assert_eq!(schema.labels(), vec!["Person", "Company"]);
    }

    #[test]
    fn test_from_file_yaml_and_json() {
        let mut yaml_file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        yaml_file.write_all(SAMPLE_SCHEMA.as_bytes()).unwrap();
        let from_yaml = Schema::from_file(yaml_file.path()).unwrap();

        let json = serde_json::to_string(&from_yaml).unwrap();
        let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        json_file.write_all(json.as_bytes()).unwrap();
        let from_json = Schema::from_file(json_file.path()).unwrap();

        assert_eq!(from_yaml, from_json);
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        assert!(matches!(
            Schema::from_file(file.path()),
            Err(ConfigurationError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(CardinalityMode::ManyToOne.to_string(), "n..1");
        assert_eq!(CardinalityMode::ManyToMany.to_string(), "n..n");
        assert_eq!(CardinalityMode::OneToMany.to_string(), "1..n");
    }
}

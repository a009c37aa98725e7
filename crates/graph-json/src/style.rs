//! Styled graph document.
//!
//! ```json
//! {
//!   "style": { "nodeStyle.label.Person": [{ "fill": "#aa0000" }] },
//!   "nodes": [{ "_id": "n1", "label": "Person", "properties": { "name": "Ada" } }],
//!   "edges": [{ "_source": "n1", "_target": "n2", "type": "WORKS_AT", "properties": {} }]
//! }
//! ```
//!
//! Fill colors are the label colors recorded in the graph, so both exports
//! agree on how a label is drawn.

use crate::graph::json_value;
use graph_schema::{Graph, GraphValue, OrderedMap};
use serde::Serialize;
use serde_json::Value;

/// Prefix of every style key.
pub const STYLE_KEY_PREFIX: &str = "nodeStyle.label.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleFill {
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleNode {
    #[serde(rename = "_id")]
    pub id: String,
    pub label: String,
    pub properties: OrderedMap<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleEdge {
    #[serde(rename = "_source")]
    pub source: String,
    #[serde(rename = "_target")]
    pub target: String,
    #[serde(rename = "type")]
    pub rel_type: String,
    pub properties: OrderedMap<Value>,
}

/// The styled graph document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleJson {
    /// `nodeStyle.label.<label>` -> one-element fill list, in label order
    pub style: OrderedMap<Vec<StyleFill>>,
    pub nodes: Vec<StyleNode>,
    pub edges: Vec<StyleEdge>,
}

impl StyleJson {
    /// Project a graph into the styled shape.
    pub fn from_graph(graph: &Graph) -> Self {
        let style = graph
            .labels()
            .iter()
            .map(|entry| {
                (
                    format!("{STYLE_KEY_PREFIX}{}", entry.label),
                    vec![StyleFill {
                        fill: entry.color.clone(),
                    }],
                )
            })
            .collect();

        let nodes = graph
            .nodes()
            .iter()
            .map(|node| StyleNode {
                id: node.id.clone(),
                label: node.label.clone(),
                properties: property_object(&node.properties),
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|edge| StyleEdge {
                source: graph.node(edge.source).id.clone(),
                target: graph.node(edge.target).id.clone(),
                rel_type: edge.rel_type.clone(),
                properties: property_object(&edge.properties),
            })
            .collect();

        Self {
            style,
            nodes,
            edges,
        }
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn property_object(properties: &OrderedMap<GraphValue>) -> OrderedMap<Value> {
    properties
        .iter()
        .map(|(key, value)| (key, json_value(value)))
        .collect()
}

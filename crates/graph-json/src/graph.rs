//! Flattened graph document: `{"nodes": [...], "edges": [...]}`.
//!
//! Each node is one flat object: reserved keys (`id`, `type`,
//! `neogen_color`, `neogen_node_color`) plus every generated property
//! inlined, in declaration order. Each edge is `{source, target, caption}`.

use graph_schema::{Graph, GraphNode, OrderedMap};
use serde::Serialize;
use serde_json::Value;

/// Key holding the node identifier.
pub const ID_KEY: &str = "id";
/// Key holding the node label.
pub const TYPE_KEY: &str = "type";
/// Key holding the per-instance color.
pub const INSTANCE_COLOR_KEY: &str = "neogen_color";
/// Key holding the label's shared color.
pub const LABEL_COLOR_KEY: &str = "neogen_node_color";

/// Edge entry of the flattened document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphJsonEdge {
    pub source: String,
    pub target: String,
    pub caption: String,
}

/// The flattened graph document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphJson {
    pub nodes: Vec<OrderedMap<Value>>,
    pub edges: Vec<GraphJsonEdge>,
}

impl GraphJson {
    /// Project a graph into the flattened shape.
    pub fn from_graph(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .iter()
            .map(|node| flatten_node(graph, node))
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|edge| GraphJsonEdge {
                source: graph.node(edge.source).id.clone(),
                target: graph.node(edge.target).id.clone(),
                caption: edge.rel_type.clone(),
            })
            .collect();

        Self { nodes, edges }
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn flatten_node(graph: &Graph, node: &GraphNode) -> OrderedMap<Value> {
    let mut object: OrderedMap<Value> = node
        .properties
        .iter()
        .map(|(key, value)| (key, json_value(value)))
        .collect();
    // Reserved keys are written last so they win over same-named properties.
    object.insert(ID_KEY, Value::String(node.id.clone()));
    object.insert(TYPE_KEY, Value::String(node.label.clone()));
    object.insert(INSTANCE_COLOR_KEY, Value::String(node.color.clone()));
    let label_color = graph.label_color(&node.label).unwrap_or(&node.color);
    object.insert(LABEL_COLOR_KEY, Value::String(label_color.to_string()));
    object
}

pub(crate) fn json_value(value: &graph_schema::GraphValue) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

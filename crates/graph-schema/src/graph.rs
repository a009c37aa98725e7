//! Canonical in-memory graph model.
//!
//! Nodes live in an arena (`Vec<GraphNode>`) and are addressed by [`NodeId`].
//! Edges store arena keys, never copies of nodes. The per-label registry is a
//! secondary index over the arena: label -> color + member ids, kept in the
//! order labels were first seen.
//!
//! Every exported representation (Cypher text aside) is a projection of this
//! one structure.

use crate::ordered::OrderedMap;
use crate::values::GraphValue;
use std::collections::HashMap;

/// Stable key of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A generated node instance.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    /// Run-unique identifier, also stored as `neogen_id`
    pub id: String,
    /// Node label
    pub label: String,
    /// Per-instance display color
    pub color: String,
    /// Generated properties in declaration order
    pub properties: OrderedMap<GraphValue>,
}

/// A generated relationship instance.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    pub source: NodeId,
    pub target: NodeId,
    /// Relationship type, used as the caption in visualizations
    pub rel_type: String,
    pub properties: OrderedMap<GraphValue>,
}

/// Registry entry for one label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelEntry {
    pub label: String,
    /// Color shared by every instance of the label
    pub color: String,
    /// Instances of the label in creation order
    pub members: Vec<NodeId>,
}

/// Arena-backed property graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    labels: Vec<LabelEntry>,
    label_index: HashMap<String, usize>,
    id_index: HashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a label with its color. Returns `false` (and keeps the
    /// existing color) if the label is already known.
    pub fn register_label(&mut self, label: &str, color: impl Into<String>) -> bool {
        if self.label_index.contains_key(label) {
            return false;
        }
        self.label_index.insert(label.to_string(), self.labels.len());
        self.labels.push(LabelEntry {
            label: label.to_string(),
            color: color.into(),
            members: Vec::new(),
        });
        true
    }

    /// Whether the label is registered.
    pub fn has_label(&self, label: &str) -> bool {
        self.label_index.contains_key(label)
    }

    /// Add a node to the arena and to its label's registry entry.
    ///
    /// A label that was never registered is registered on the fly using the
    /// node's own color.
    pub fn add_node(&mut self, node: GraphNode) -> NodeId {
        let node_id = NodeId(self.nodes.len());
        if !self.has_label(&node.label) {
            self.register_label(&node.label, node.color.clone());
        }
        let slot = self.label_index[&node.label];
        self.labels[slot].members.push(node_id);
        self.id_index.insert(node.id.clone(), node_id);
        self.nodes.push(node);
        node_id
    }

    /// Add an edge between two arena nodes.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        rel_type: impl Into<String>,
        properties: OrderedMap<GraphValue>,
    ) {
        self.edges.push(GraphEdge {
            source,
            target,
            rel_type: rel_type.into(),
            properties,
        });
    }

    /// Look up a node by arena key.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this graph.
    pub fn node(&self, id: NodeId) -> &GraphNode {
        &self.nodes[id.0]
    }

    /// Look up a node by its generated identifier.
    pub fn find(&self, neogen_id: &str) -> Option<NodeId> {
        self.id_index.get(neogen_id).copied()
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Label registry in first-seen order.
    pub fn labels(&self) -> &[LabelEntry] {
        &self.labels
    }

    pub fn label(&self, label: &str) -> Option<&LabelEntry> {
        self.label_index.get(label).map(|&idx| &self.labels[idx])
    }

    pub fn label_color(&self, label: &str) -> Option<&str> {
        self.label(label).map(|entry| entry.color.as_str())
    }

    /// Instances of a label; empty for unknown labels.
    pub fn members(&self, label: &str) -> &[NodeId] {
        self.label(label)
            .map(|entry| entry.members.as_slice())
            .unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

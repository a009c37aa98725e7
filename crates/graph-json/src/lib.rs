//! JSON projections of a generated graph.
//!
//! Two visualization consumers read neogen output, each expecting its own
//! document shape. Both shapes are computed on demand from the same
//! [`graph_schema::Graph`]; nothing here holds state between calls.
//!
//! # Modules
//!
//! - [`graph`] - flattened `{nodes, edges}` document
//! - [`style`] - `{style, nodes, edges}` document with per-label fills
//!
//! # Example
//!
//! ```rust
//! use graph_schema::{Graph, GraphNode, OrderedMap};
//!
//! let mut graph = Graph::new();
//! graph.register_label("Person", "#336699");
//! graph.add_node(GraphNode {
//!     id: "n1".into(),
//!     label: "Person".into(),
//!     color: "rgb(1,2,3)".into(),
//!     properties: OrderedMap::new(),
//! });
//!
//! let doc = graph_json::GraphJson::from_graph(&graph);
//! assert_eq!(doc.nodes.len(), 1);
//!
//! let styled = graph_json::StyleJson::from_graph(&graph);
//! assert!(styled.style.contains_key("nodeStyle.label.Person"));
//! ```

pub mod graph;
pub mod style;

pub use graph::{GraphJson, GraphJsonEdge};
pub use style::{StyleEdge, StyleFill, StyleJson, StyleNode};

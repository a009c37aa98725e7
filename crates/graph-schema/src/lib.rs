//! Core types for the neogen graph fixture generator.
//!
//! This crate provides the foundational types shared by the generator, the
//! statement builder and the JSON exporters:
//!
//! - [`Schema`] - Declarative node/relationship schema loaded from YAML or JSON
//! - [`PropertySpec`] - Unresolved property generator reference
//! - [`GraphValue`] - Concrete generated property value
//! - [`Graph`] - Canonical in-memory graph model (node arena + edges)
//! - [`ConfigurationError`] - The single error category of the core
//!
//! # Architecture
//!
//! ```text
//! graph-schema (this crate)
//!    │
//!    ├─── graph-generator  (interprets Schema, builds Graph)
//!    ├─── cypher-builder   (renders GraphValue into Cypher literals)
//!    └─── graph-json       (projects Graph into JSON documents)
//! ```
//!
//! # Example
//!
//! ```rust
//! use graph_schema::{CardinalityMode, Schema};
//!
//! let schema = Schema::from_yaml(r#"
//! nodes:
//!   - label: Person
//!     count: 5
//!     properties:
//!       name: name
//!   - label: Company
//! relationships:
//!   person_works_at:
//!     start: Person
//!     end: Company
//!     type: WORKS_AT
//!     mode: n..1
//! "#).unwrap();
//!
//! assert_eq!(schema.node_specs().unwrap().len(), 2);
//! let (_, rel) = schema.relationships.iter().next().unwrap();
//! assert_eq!(rel.mode, CardinalityMode::ManyToOne);
//! ```

pub mod error;
pub mod graph;
pub mod ordered;
pub mod schema;
pub mod values;

// Re-exports for convenience
pub use error::ConfigurationError;
pub use graph::{Graph, GraphEdge, GraphNode, LabelEntry, NodeId};
pub use ordered::OrderedMap;
pub use schema::{CardinalityMode, NodeSpec, PropertySpec, RelationshipSpec, Schema};
pub use values::GraphValue;

/// Name of the implicit property injected into every generated node.
pub const NEOGEN_ID: &str = "neogen_id";

//! Schema processor for the neogen graph fixture generator.
//!
//! This crate turns a [`graph_schema::Schema`] into a populated graph: it
//! expands every node spec into `count` instances with fake property values,
//! wires relationships between them according to their cardinality mode, and
//! records a statement for every node and relationship. A seeded RNG makes
//! runs reproducible.
//!
//! # Architecture
//!
//! ```text
//! Schema (YAML / JSON)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  GenerationPlan  │  generators resolved, labels checked
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │ SchemaProcessor  │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - builder       │
//! │  - values        │
//! └────────┬─────────┘
//!          ▼
//!   ProcessedGraph { statements, Graph, constraints, JSON exports }
//! ```
//!
//! # Example
//!
//! ```rust
//! use graph_generator::SchemaProcessor;
//! use graph_schema::Schema;
//!
//! let schema = Schema::from_yaml(r#"
//! nodes:
//!   - label: Person
//!     count: 5
//!     properties:
//!       firstname: firstName
//!       age: { type: numberBetween, params: [18, 80] }
//!   - label: Company
//!     properties:
//!       name: company
//! relationships:
//!   person_works_at:
//!     start: Person
//!     end: Company
//!     type: WORKS_AT
//!     mode: n..1
//! "#).unwrap();
//!
//! let mut result = SchemaProcessor::new(42).process(&schema).unwrap();
//! assert_eq!(result.node_statements().len(), 6);
//! assert_eq!(result.relationship_statements().len(), 5);
//! assert_eq!(result.constraints().len(), 2);
//! ```
//!
//! # Generators
//!
//! Property values come from Faker-style named generators such as
//! `firstName`, `email`, `city`, `sentence`, `numberBetween`,
//! `dateTimeBetween`, `randomElement` or `hexcolor`. See
//! [`generators::KNOWN_GENERATORS`] for the full list.

pub mod generators;
pub mod plan;
pub mod processor;

// Re-exports for convenience
pub use generators::{
    generate_value, GeneratedValue, GeneratorConfig, ValueGenerator, KNOWN_GENERATORS,
};
pub use plan::{GenerationPlan, NodePlan, RelationshipPlan};
pub use processor::{fan_out_bound, ProcessedGraph, SchemaProcessor};

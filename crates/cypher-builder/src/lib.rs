//! Cypher statement rendering for neogen.
//!
//! The schema processor never concatenates query text itself. It hands
//! structured node and relationship data to a [`StatementBuilder`], which owns
//! the query syntax together with literal quoting and escaping.
//!
//! [`CypherBuilder`] is the default implementation and produces statements
//! that can each be run on their own:
//!
//! ```text
//! MERGE (n5f0c…:Person {name: 'Ada', neogen_id: 'n5f0c…'})
//! MATCH (s:Person {neogen_id: 'n5f0c…'}), (e:Company {neogen_id: 'n91aa…'}) MERGE (s)-[:WORKS_AT]->(e)
//! DROP CONSTRAINT ON (c1:Person) ASSERT c1.neogen_id IS UNIQUE; CREATE CONSTRAINT ON (c1:Person) ASSERT c1.neogen_id IS UNIQUE;
//! ```
//!
//! # Example
//!
//! ```rust
//! use cypher_builder::{CypherBuilder, StatementBuilder};
//! use graph_schema::{GraphValue, OrderedMap};
//!
//! let mut props = OrderedMap::new();
//! props.insert("name", GraphValue::from("Ada"));
//!
//! let q = CypherBuilder.node_statement("n1", "Person", &props);
//! assert_eq!(q, "MERGE (n1:Person {name: 'Ada', neogen_id: 'n1'})");
//! ```

mod builder;
mod literal;

pub use builder::{CypherBuilder, NodeRef, StatementBuilder};
pub use literal::{escape_cypher_string, escape_identifier, to_cypher_literal};

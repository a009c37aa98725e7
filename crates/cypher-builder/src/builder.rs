//! Statement builder interface and the default Cypher implementation.

use crate::literal::{escape_cypher_string, escape_identifier, to_cypher_literal};
use graph_schema::{GraphValue, OrderedMap, NEOGEN_ID};
use tracing::debug;

/// Reference to an already generated node, as seen by a relationship statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRef<'a> {
    /// Generated node identifier (the `neogen_id` value)
    pub id: &'a str,
    /// Node label
    pub label: &'a str,
}

impl<'a> NodeRef<'a> {
    pub fn new(id: &'a str, label: &'a str) -> Self {
        Self { id, label }
    }
}

/// Renders structured node/relationship data into statement text.
///
/// Fragment methods are composed by [`StatementBuilder::node_statement`];
/// implementors normally only override fragments.
pub trait StatementBuilder {
    /// Opening of a node merge statement.
    fn open_merge(&self) -> String;

    /// Variable + label part of a node pattern.
    fn add_node_label(&self, alias: &str, label: &str) -> String;

    fn open_node_properties_bracket(&self) -> String;

    /// One `key: value` property entry. Quoting and escaping happen here.
    fn add_node_property(&self, key: &str, value: &GraphValue) -> String;

    /// Separator between two property entries.
    fn property_separator(&self) -> String {
        ", ".to_string()
    }

    fn close_node_properties_bracket(&self) -> String;

    fn close_merge(&self) -> String;

    /// Full relationship statement between two existing nodes.
    fn add_relationship(
        &self,
        start: NodeRef<'_>,
        end: NodeRef<'_>,
        rel_type: &str,
        properties: &OrderedMap<GraphValue>,
    ) -> String;

    /// Combined drop-then-create uniqueness constraint on `neogen_id`.
    fn constraint_pair(&self, alias: &str, label: &str) -> String;

    /// Full node statement. The identifier doubles as the pattern variable
    /// and is appended as the trailing `neogen_id` property.
    fn node_statement(
        &self,
        id: &str,
        label: &str,
        properties: &OrderedMap<GraphValue>,
    ) -> String {
        let mut q = self.open_merge();
        q.push_str(&self.add_node_label(id, label));
        q.push_str(&self.open_node_properties_bracket());
        for (key, value) in properties.iter() {
            q.push_str(&self.add_node_property(key, value));
            q.push_str(&self.property_separator());
        }
        q.push_str(&self.add_node_property(NEOGEN_ID, &GraphValue::from(id)));
        q.push_str(&self.close_node_properties_bracket());
        q.push_str(&self.close_merge());

        debug!("Node statement: {}", q);
        q
    }
}

/// Default Cypher statement builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct CypherBuilder;

impl CypherBuilder {
    fn property_block(&self, properties: &OrderedMap<GraphValue>) -> String {
        if properties.is_empty() {
            return String::new();
        }
        let entries: Vec<String> = properties
            .iter()
            .map(|(key, value)| self.add_node_property(key, value))
            .collect();
        format!(
            "{}{}{}",
            self.open_node_properties_bracket(),
            entries.join(&self.property_separator()),
            self.close_node_properties_bracket()
        )
    }
}

impl StatementBuilder for CypherBuilder {
    fn open_merge(&self) -> String {
        "MERGE (".to_string()
    }

    fn add_node_label(&self, alias: &str, label: &str) -> String {
        format!("{}:{}", escape_identifier(alias), escape_identifier(label))
    }

    fn open_node_properties_bracket(&self) -> String {
        " {".to_string()
    }

    fn add_node_property(&self, key: &str, value: &GraphValue) -> String {
        format!("{}: {}", escape_identifier(key), to_cypher_literal(value))
    }

    fn close_node_properties_bracket(&self) -> String {
        "}".to_string()
    }

    fn close_merge(&self) -> String {
        ")".to_string()
    }

    fn add_relationship(
        &self,
        start: NodeRef<'_>,
        end: NodeRef<'_>,
        rel_type: &str,
        properties: &OrderedMap<GraphValue>,
    ) -> String {
        let q = format!(
            "MATCH (s:{start_label} {{{NEOGEN_ID}: {start_id}}}), (e:{end_label} {{{NEOGEN_ID}: {end_id}}}) MERGE (s)-[:{rel_type}{props}]->(e)",
            start_label = escape_identifier(start.label),
            start_id = escape_cypher_string(start.id),
            end_label = escape_identifier(end.label),
            end_id = escape_cypher_string(end.id),
            rel_type = escape_identifier(rel_type),
            props = self.property_block(properties),
        );

        debug!("Relationship statement: {}", q);
        q
    }

    fn constraint_pair(&self, alias: &str, label: &str) -> String {
        let pattern = format!("({alias}:{})", escape_identifier(label));
        format!(
            "DROP CONSTRAINT ON {pattern} ASSERT {alias}.{NEOGEN_ID} IS UNIQUE; \
             CREATE CONSTRAINT ON {pattern} ASSERT {alias}.{NEOGEN_ID} IS UNIQUE; "
        )
    }
}

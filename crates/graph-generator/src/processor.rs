//! Schema processor: expands node specs into instances and wires
//! relationships between them.

use crate::generators::uuid::prefixed_id;
use crate::generators::{generate_value, ValueGenerator};
use crate::plan::{GenerationPlan, NodePlan, PropertyPlan, RelationshipPlan};
use chrono::NaiveDateTime;
use cypher_builder::{CypherBuilder, NodeRef, StatementBuilder};
use graph_json::{GraphJson, StyleJson};
use graph_schema::{
    CardinalityMode, ConfigurationError, Graph, GraphNode, GraphValue, NodeId, OrderedMap, Schema,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::{debug, info};

/// Upper bound of the per-relationship fan-out in `n..n` mode.
///
/// 30% of the end population for populations up to 20, 10% above that,
/// never less than 1.
pub fn fan_out_bound(population: usize) -> usize {
    let pct = if population <= 20 { 0.3 } else { 0.1 };
    ((population as f64 * pct).round() as usize).max(1)
}

/// Turns a [`Schema`] into a populated graph plus the statements that
/// recreate it.
///
/// A processor is single-use: [`SchemaProcessor::process`] consumes it.
pub struct SchemaProcessor<B: StatementBuilder = CypherBuilder> {
    seed: u64,
    rng: StdRng,
    builder: B,
    values: ValueGenerator,
}

impl SchemaProcessor<CypherBuilder> {
    /// Create a processor emitting Cypher.
    pub fn new(seed: u64) -> Self {
        Self::with_builder(seed, CypherBuilder)
    }
}

impl<B: StatementBuilder> SchemaProcessor<B> {
    pub fn with_builder(seed: u64, builder: B) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            builder,
            values: ValueGenerator::new(),
        }
    }

    /// Anchor relative date expressions to a fixed time.
    pub fn with_reference_time(mut self, reference_time: NaiveDateTime) -> Self {
        self.values = ValueGenerator::with_reference_time(reference_time);
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validate the schema without generating anything.
    pub fn compile(&self, schema: &Schema) -> Result<GenerationPlan, ConfigurationError> {
        GenerationPlan::compile(schema, &self.values)
    }

    /// Run the schema. Nothing is generated unless the whole schema is valid.
    pub fn process(self, schema: &Schema) -> Result<ProcessedGraph<B>, ConfigurationError> {
        let plan = self.compile(schema)?;
        Ok(self.run(&plan))
    }

    /// Run an already compiled plan.
    pub fn run(mut self, plan: &GenerationPlan) -> ProcessedGraph<B> {
        info!(
            "Processing schema with seed {}: {} node specs, {} relationships",
            self.seed,
            plan.nodes.len(),
            plan.relationships.len()
        );

        let mut graph = Graph::new();
        let mut queries = Vec::new();
        let mut issued = HashSet::new();

        for node in &plan.nodes {
            self.expand_node(node, &mut graph, &mut queries, &mut issued);
        }
        let node_statement_count = queries.len();
        info!(
            "Generated {} nodes across {} labels",
            graph.node_count(),
            graph.labels().len()
        );

        for relationship in &plan.relationships {
            self.resolve_relationship(relationship, &mut graph, &mut queries);
        }
        info!("Generated {} relationships", graph.edge_count());

        ProcessedGraph {
            graph,
            queries,
            node_statement_count,
            builder: self.builder,
            rng: self.rng,
        }
    }

    fn expand_node(
        &mut self,
        node: &NodePlan,
        graph: &mut Graph,
        queries: &mut Vec<String>,
        issued: &mut HashSet<String>,
    ) {
        if !graph.has_label(&node.label) {
            let color = self.values.label_color(&mut self.rng);
            debug!("Registered label {} with color {}", node.label, color);
            graph.register_label(&node.label, color);
        }

        for _ in 0..node.count {
            let id = self.unique_id(issued);
            let properties = self.generate_properties(&node.properties);
            let color = self.values.instance_color(&mut self.rng);

            queries.push(self.builder.node_statement(&id, &node.label, &properties));
            graph.add_node(GraphNode {
                id,
                label: node.label.clone(),
                color,
                properties,
            });
        }
    }

    /// `n` followed by 32 hex digits, unique within the run.
    fn unique_id(&mut self, issued: &mut HashSet<String>) -> String {
        loop {
            let id = prefixed_id('n', &mut self.rng);
            if issued.insert(id.clone()) {
                return id;
            }
        }
    }

    fn generate_properties(&mut self, properties: &PropertyPlan) -> OrderedMap<GraphValue> {
        properties
            .iter()
            .map(|(name, config)| (name.as_str(), generate_value(config, &mut self.rng)))
            .collect()
    }

    fn resolve_relationship(
        &mut self,
        relationship: &RelationshipPlan,
        graph: &mut Graph,
        queries: &mut Vec<String>,
    ) {
        let starts = graph.members(&relationship.start).to_vec();
        let ends = graph.members(&relationship.end).to_vec();
        let pairs = self.pairings(relationship.mode, &starts, &ends);

        debug!(
            "Relationship {} ({}): {} pairings",
            relationship.key,
            relationship.mode,
            pairs.len()
        );

        for (source, target) in pairs {
            let properties = self.generate_properties(&relationship.properties);
            let start = graph.node(source);
            let end = graph.node(target);
            queries.push(self.builder.add_relationship(
                NodeRef::new(&start.id, &start.label),
                NodeRef::new(&end.id, &end.label),
                &relationship.rel_type,
                &properties,
            ));
            graph.add_edge(source, target, relationship.rel_type.as_str(), properties);
        }
    }

    fn pairings(
        &mut self,
        mode: CardinalityMode,
        starts: &[NodeId],
        ends: &[NodeId],
    ) -> Vec<(NodeId, NodeId)> {
        let rng = &mut self.rng;
        match mode {
            CardinalityMode::ManyToOne => starts
                .iter()
                .filter_map(|&start| ends.choose(&mut *rng).map(|&end| (start, end)))
                .collect(),
            CardinalityMode::OneToMany => ends
                .iter()
                .filter_map(|&end| starts.choose(&mut *rng).map(|&start| (start, end)))
                .collect(),
            CardinalityMode::ManyToMany => {
                if ends.is_empty() {
                    return Vec::new();
                }
                let fan_out = rng.gen_range(1..=fan_out_bound(ends.len()));
                let mut pairs = Vec::new();
                for &start in starts {
                    for _ in 0..fan_out {
                        let end = ends[rng.gen_range(0..ends.len())];
                        if end != start {
                            pairs.push((start, end));
                        }
                    }
                }
                pairs
            }
        }
    }
}

/// Result of a processor run.
pub struct ProcessedGraph<B: StatementBuilder = CypherBuilder> {
    graph: Graph,
    queries: Vec<String>,
    node_statement_count: usize,
    builder: B,
    rng: StdRng,
}

impl<B: StatementBuilder> ProcessedGraph<B> {
    /// All statements: node statements first, then relationships.
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    pub fn node_statements(&self) -> &[String] {
        &self.queries[..self.node_statement_count]
    }

    pub fn relationship_statements(&self) -> &[String] {
        &self.queries[self.node_statement_count..]
    }

    /// One drop/create uniqueness pair per label. Every call uses a new alias.
    pub fn constraints(&mut self) -> Vec<String> {
        let alias = prefixed_id('c', &mut self.rng);
        self.graph
            .labels()
            .iter()
            .map(|entry| self.builder.constraint_pair(&alias, &entry.label))
            .collect()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Known labels in first-seen order.
    pub fn labels(&self) -> Vec<&str> {
        self.graph
            .labels()
            .iter()
            .map(|entry| entry.label.as_str())
            .collect()
    }

    pub fn label_color(&self, label: &str) -> Option<&str> {
        self.graph.label_color(label)
    }

    /// Flattened node/edge document.
    pub fn graph_json(&self) -> Result<String, serde_json::Error> {
        GraphJson::from_graph(&self.graph).to_json_string()
    }

    /// Styled node/edge document.
    pub fn style_json(&self) -> Result<String, serde_json::Error> {
        StyleJson::from_graph(&self.graph).to_json_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use graph_schema::{NodeSpec, PropertySpec, RelationshipSpec, NEOGEN_ID};
    use std::collections::HashMap;

    fn reference_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn process(seed: u64, schema: &Schema) -> ProcessedGraph {
        SchemaProcessor::new(seed)
            .with_reference_time(reference_time())
            .process(schema)
            .unwrap()
    }

    fn person_schema(count: u64) -> Schema {
        Schema::new().with_node(
            NodeSpec::new("Person")
                .with_count(count)
                .with_property("firstname", PropertySpec::named("firstName")),
        )
    }

    #[test]
    fn test_fan_out_bound() {
        assert_eq!(fan_out_bound(0), 1);
        assert_eq!(fan_out_bound(1), 1);
        assert_eq!(fan_out_bound(10), 3);
        assert_eq!(fan_out_bound(20), 6);
        assert_eq!(fan_out_bound(21), 2);
        assert_eq!(fan_out_bound(100), 10);
    }

    #[test]
    fn test_nodes_only() {
        let mut result = process(1, &person_schema(3));

        assert_eq!(result.queries().len(), 3);
        assert_eq!(result.node_statements().len(), 3);
        assert!(result.relationship_statements().is_empty());
        assert_eq!(result.constraints().len(), 1);
        assert_eq!(result.graph().node_count(), 3);
        assert_eq!(result.graph().edge_count(), 0);
    }

    #[test]
    fn test_identifiers_distinct_and_embedded() {
        let result = process(7, &person_schema(50));
        let graph = result.graph();

        let ids: HashSet<&str> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), 50);

        for (node, statement) in graph.nodes().iter().zip(result.node_statements()) {
            assert!(node.id.starts_with('n'));
            assert!(statement.contains(&format!("{NEOGEN_ID}: '{}'", node.id)));
            assert_eq!(graph.find(&node.id).map(|id| graph.node(id).id.as_str()), Some(node.id.as_str()));
        }
    }

    #[test]
    fn test_label_color_assigned_once() {
        let schema = person_schema(2).with_node(NodeSpec::new("Person").with_count(2));
        let result = process(3, &schema);

        assert_eq!(result.labels(), vec!["Person"]);
        assert_eq!(result.graph().members("Person").len(), 4);
        let color = result.label_color("Person").unwrap();
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(result.graph().nodes().iter().all(|n| n.color.starts_with("rgb(")));
    }

    #[test]
    fn test_many_to_one() {
        let schema = person_schema(5)
            .with_node(NodeSpec::new("Company"))
            .with_relationship(
                "works_at",
                RelationshipSpec::new("Person", "Company", "WORKS_AT", CardinalityMode::ManyToOne),
            );
        let result = process(11, &schema);
        let graph = result.graph();

        assert_eq!(graph.edge_count(), 5);
        assert_eq!(result.relationship_statements().len(), 5);
        let company = graph.members("Company")[0];
        assert!(graph.edges().iter().all(|e| e.target == company));

        let sources: HashSet<NodeId> = graph.edges().iter().map(|e| e.source).collect();
        assert_eq!(sources.len(), 5);
    }

    #[test]
    fn test_one_to_many() {
        let schema = Schema::new()
            .with_node(NodeSpec::new("Author").with_count(2))
            .with_node(NodeSpec::new("Book").with_count(6))
            .with_relationship(
                "wrote",
                RelationshipSpec::new("Author", "Book", "WROTE", CardinalityMode::OneToMany),
            );
        let result = process(5, &schema);
        let graph = result.graph();

        assert_eq!(graph.edge_count(), 6);
        let authors = graph.members("Author");
        let books = graph.members("Book");
        let targets: HashSet<NodeId> = graph.edges().iter().map(|e| e.target).collect();
        assert_eq!(targets.len(), 6);
        for edge in graph.edges() {
            assert!(authors.contains(&edge.source));
            assert!(books.contains(&edge.target));
        }
    }

    #[test]
    fn test_many_to_many_bounds_and_no_self_loops() {
        for (population, seed) in [(5_u64, 1_u64), (20, 2), (40, 3), (100, 4)] {
            let schema = person_schema(population).with_relationship(
                "knows",
                RelationshipSpec::new("Person", "Person", "KNOWS", CardinalityMode::ManyToMany),
            );
            let result = process(seed, &schema);
            let graph = result.graph();
            let bound = fan_out_bound(population as usize);

            let mut per_source: HashMap<NodeId, usize> = HashMap::new();
            for edge in graph.edges() {
                assert_ne!(edge.source, edge.target);
                *per_source.entry(edge.source).or_default() += 1;
            }
            assert!(per_source.values().all(|&n| n <= bound));
        }
    }

    #[test]
    fn test_many_to_many_shared_fan_out() {
        for (companies, seed) in [(4_u64, 1_u64), (12, 2), (20, 3), (35, 4), (120, 5)] {
            for offset in 0..5 {
                let schema = person_schema(8)
                    .with_node(NodeSpec::new("Company").with_count(companies))
                    .with_relationship(
                        "invests_in",
                        RelationshipSpec::new(
                            "Person",
                            "Company",
                            "INVESTS_IN",
                            CardinalityMode::ManyToMany,
                        ),
                    );
                let result = process(seed * 100 + offset, &schema);
                let graph = result.graph();
                let bound = fan_out_bound(companies as usize);

                let mut per_source: HashMap<NodeId, usize> = HashMap::new();
                for edge in graph.edges() {
                    *per_source.entry(edge.source).or_default() += 1;
                }

                let counts: HashSet<usize> = graph
                    .members("Person")
                    .iter()
                    .map(|id| per_source.get(id).copied().unwrap_or(0))
                    .collect();
                assert_eq!(counts.len(), 1, "fan-out differs between start nodes");
                let fan_out = *counts.iter().next().unwrap();
                assert!(
                    (1..=bound).contains(&fan_out),
                    "fan-out {fan_out} outside [1, {bound}] for {companies} companies"
                );
            }
        }
    }

    #[test]
    fn test_empty_population_yields_no_edges() {
        let schema = person_schema(3)
            .with_node(NodeSpec::new("Company").with_count(0))
            .with_relationship(
                "works_at",
                RelationshipSpec::new("Person", "Company", "WORKS_AT", CardinalityMode::ManyToOne),
            )
            .with_relationship(
                "employs",
                RelationshipSpec::new("Company", "Person", "EMPLOYS", CardinalityMode::ManyToMany),
            );
        let result = process(1, &schema);

        assert_eq!(result.graph().edge_count(), 0);
        assert_eq!(result.labels(), vec!["Person", "Company"]);
    }

    #[test]
    fn test_relationship_properties_per_edge() {
        let schema = person_schema(4)
            .with_node(NodeSpec::new("Company"))
            .with_relationship(
                "works_at",
                RelationshipSpec::new("Person", "Company", "WORKS_AT", CardinalityMode::ManyToOne)
                    .with_property(
                        "since",
                        PropertySpec::with_params(
                            "numberBetween",
                            vec![serde_json::json!(1990), serde_json::json!(2020)],
                        ),
                    ),
            );
        let result = process(9, &schema);

        for (edge, statement) in result.graph().edges().iter().zip(result.relationship_statements()) {
            let since = edge.properties.get("since").and_then(GraphValue::as_i64).unwrap();
            assert!((1990..=2020).contains(&since));
            assert!(statement.contains(&format!("[:WORKS_AT {{since: {since}}}]")));
        }
    }

    #[test]
    fn test_missing_nodes_fails() {
        let result = SchemaProcessor::new(1).process(&Schema::new());
        assert!(matches!(result, Err(ConfigurationError::MissingNodes)));
    }

    #[test]
    fn test_undeclared_label_fails() {
        let schema = person_schema(2).with_relationship(
            "haunts",
            RelationshipSpec::new("Ghost", "Person", "HAUNTS", CardinalityMode::ManyToOne),
        );
        match SchemaProcessor::new(1).process(&schema) {
            Err(ConfigurationError::UndeclaredLabel { relationship, label }) => {
                assert_eq!(relationship, "haunts");
                assert_eq!(label, "Ghost");
            }
            other => panic!("unexpected result: {:?}", other.map(|g| g.queries().len())),
        }
    }

    #[test]
    fn test_constraints_change_alias_only() {
        let schema = person_schema(1).with_node(NodeSpec::new("Company"));
        let mut result = process(2, &schema);

        let first = result.constraints();
        let second = result.constraints();
        assert_eq!(first.len(), 2);
        assert_ne!(first, second);

        let strip = |s: &str| {
            let alias = s["DROP CONSTRAINT ON (".len()..].split(':').next().unwrap().to_string();
            s.replace(&alias, "a")
        };
        assert_eq!(strip(&first[0]), strip(&second[0]));
        assert_eq!(
            strip(&first[0]),
            "DROP CONSTRAINT ON (a:Person) ASSERT a.neogen_id IS UNIQUE; \
             CREATE CONSTRAINT ON (a:Person) ASSERT a.neogen_id IS UNIQUE; "
        );
    }

    #[test]
    fn test_same_seed_same_output() {
        let schema = person_schema(10)
            .with_node(
                NodeSpec::new("Event")
                    .with_count(3)
                    .with_property("at", PropertySpec::named("dateTimeThisYear")),
            )
            .with_relationship(
                "attends",
                RelationshipSpec::new("Person", "Event", "ATTENDS", CardinalityMode::ManyToMany),
            );

        let a = process(99, &schema);
        let b = process(99, &schema);
        assert_eq!(a.queries(), b.queries());
        assert_eq!(a.graph_json().unwrap(), b.graph_json().unwrap());

        let c = process(100, &schema);
        assert_ne!(a.queries(), c.queries());
    }

    #[test]
    fn test_json_exports_agree() {
        let schema = person_schema(3)
            .with_node(NodeSpec::new("Company"))
            .with_relationship(
                "works_at",
                RelationshipSpec::new("Person", "Company", "WORKS_AT", CardinalityMode::ManyToOne),
            );
        let result = process(4, &schema);

        let graph: serde_json::Value = serde_json::from_str(&result.graph_json().unwrap()).unwrap();
        let style: serde_json::Value = serde_json::from_str(&result.style_json().unwrap()).unwrap();

        assert_eq!(graph["nodes"].as_array().unwrap().len(), 4);
        assert_eq!(style["nodes"].as_array().unwrap().len(), 4);
        assert_eq!(graph["edges"].as_array().unwrap().len(), 3);
        assert_eq!(style["edges"].as_array().unwrap().len(), 3);
        assert_eq!(graph["nodes"][0]["id"], style["nodes"][0]["_id"]);
        assert_eq!(
            style["style"]["nodeStyle.label.Person"][0]["fill"].as_str(),
            result.label_color("Person")
        );
    }
}

//! Validated, immutable weighted directed graph
//!
//! The node set is the union of every declared source node and every
//! identifier referenced as a neighbor, so a node may exist without any
//! outgoing edges. Adjacency keeps the declared neighbor order, which the
//! steppers rely on for reproducible traversal order.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::error::Result;
use crate::graph::types::NodeId;
use crate::{bail_malformed, error::StepgraphError};

/// A single outgoing edge
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub neighbor: NodeId,
    /// Non-negative weight. Unweighted traversals ignore it.
    pub weight: f64,
}

/// Options controlling graph validation
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOptions {
    /// Reject edges whose neighbor is not declared as a source key
    pub strict: bool,
}

/// Immutable view of a weighted directed graph.
///
/// Built once per run and shared read-only (typically behind an `Arc`) by
/// every stepper traversing it.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    /// Node identifiers in first-seen declaration order
    order: Vec<NodeId>,
    nodes: HashSet<NodeId>,
    edges: HashMap<NodeId, Vec<Edge>>,
}

impl GraphModel {
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Build a graph from raw adjacency data using lenient validation.
    pub fn validate(raw: &Value) -> Result<Self> {
        Self::validate_with(raw, &ValidateOptions::default())
    }

    /// Build a graph from raw adjacency data.
    ///
    /// `raw` is a mapping from source node to either a mapping of
    /// `neighbor -> weight` or a list of `[neighbor, weight]` pairs. A `null`
    /// adjacency is treated as empty.
    #[tracing::instrument(skip(raw), fields(strict = opts.strict))]
    pub fn validate_with(raw: &Value, opts: &ValidateOptions) -> Result<Self> {
        let Some(adjacency) = raw.as_object() else {
            bail_malformed!("graph", format!("expected a mapping, got {}", kind(raw)));
        };

        let mut builder = GraphBuilder::default();

        for (node, neighbors) in adjacency {
            builder.add_node(node);
            let field = format!("graph.{}", node);

            match neighbors {
                Value::Null => {}
                Value::Object(map) => {
                    for (neighbor, weight) in map {
                        let weight = parse_weight(weight, &format!("{}.{}", field, neighbor))?;
                        builder.add_edge(node, neighbor, weight);
                    }
                }
                Value::Array(pairs) => {
                    for (i, pair) in pairs.iter().enumerate() {
                        let pair_field = format!("{}[{}]", field, i);
                        let (neighbor, weight) = parse_pair(pair, &pair_field)?;
                        builder.add_edge(node, &neighbor, weight);
                    }
                }
                other => bail_malformed!(
                    field,
                    format!(
                        "expected a mapping of neighbor to weight, got {}",
                        kind(other)
                    )
                ),
            }
        }

        if opts.strict {
            for (node, edges) in adjacency_in_order(&builder) {
                if let Some(edge) = edges.iter().find(|e| !adjacency.contains_key(&e.neighbor)) {
                    return Err(StepgraphError::UndeclaredNeighbor {
                        node: node.clone(),
                        neighbor: edge.neighbor.clone(),
                    });
                }
            }
        }

        let graph = builder.build();

        // Shortest distances never exceed the summed weights, so a finite sum
        // keeps every relaxation finite
        let total: f64 = graph.edges.values().flatten().map(|e| e.weight.abs()).sum();
        if !total.is_finite() {
            bail_malformed!("graph", "total edge weight exceeds the range of a 64-bit float");
        }

        tracing::debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            "graph_validated"
        );
        Ok(graph)
    }

    /// Outgoing edges of `node` in declared order; empty for neighbor-only
    /// and unknown nodes.
    pub fn neighbors_of(&self, node: &str) -> &[Edge] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    /// Node identifiers in first-seen declaration order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

/// Incremental constructor for [`GraphModel`]
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: GraphModel,
}

impl GraphBuilder {
    pub fn add_node(&mut self, node: &str) -> &mut Self {
        if self.graph.nodes.insert(node.to_string()) {
            self.graph.order.push(node.to_string());
        }
        self
    }

    /// Add an edge, registering both endpoints as nodes.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> &mut Self {
        self.add_node(from);
        self.add_node(to);
        self.graph
            .edges
            .entry(from.to_string())
            .or_default()
            .push(Edge {
                neighbor: to.to_string(),
                weight,
            });
        self
    }

    pub fn build(self) -> GraphModel {
        self.graph
    }
}

fn adjacency_in_order(builder: &GraphBuilder) -> impl Iterator<Item = (&NodeId, &[Edge])> {
    builder
        .graph
        .order
        .iter()
        .map(|node| (node, builder.graph.neighbors_of(node)))
}

fn parse_weight(value: &Value, field: &str) -> Result<f64> {
    match value.as_f64() {
        Some(weight) => Ok(weight),
        None => bail_malformed!(
            field,
            format!("weight must be a number, got {}", kind(value))
        ),
    }
}

fn parse_pair(value: &Value, field: &str) -> Result<(NodeId, f64)> {
    match value.as_array().map(Vec::as_slice) {
        Some([Value::String(neighbor), weight]) => {
            let weight = parse_weight(weight, &format!("{}.{}", field, neighbor))?;
            Ok((neighbor.clone(), weight))
        }
        _ => bail_malformed!(field, "expected a [neighbor, weight] pair"),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

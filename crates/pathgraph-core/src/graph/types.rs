use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StructureError;

/// Cost of traversing one edge, or the accumulated cost of a path.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    /// Ceiling used when no explicit cost bound is configured
    pub const UNBOUNDED: Cost = Cost(f64::INFINITY);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost(cost)
    }
}

impl From<u32> for Cost {
    fn from(cost: u32) -> Self {
        Cost(f64::from(cost))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A declared node
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
}

impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A directed, weighted edge between two declared nodes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub cost: Cost,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        cost: impl Into<Cost>,
    ) -> Self {
        Edge {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            cost: cost.into(),
        }
    }

    /// Self-loops are stored but never traversed
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Candidate graph handed over by the ingestion layer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDescription {
    pub id: String,
    pub name: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Immutable, validated graph.
///
/// Every edge endpoint names a node of the same graph and no edge cost is
/// negative. There are no mutation operations, so a `Graph` can be shared
/// across threads and queried concurrently.
#[derive(Debug, Clone, Serialize)]
pub struct Graph {
    #[serde(skip_serializing_if = "Option::is_none")]
    store_id: Option<i64>,
    identity: String,
    name: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    node_ids: HashSet<String>,
}

impl Graph {
    /// Build a graph from a description, re-checking node references.
    pub fn new(description: GraphDescription) -> Result<Self, StructureError> {
        let GraphDescription {
            id,
            name,
            nodes,
            edges,
        } = description;

        let mut node_ids = HashSet::with_capacity(nodes.len());
        for node in &nodes {
            if !node_ids.insert(node.id.clone()) {
                return Err(StructureError::DuplicateNodeId {
                    id: node.id.clone(),
                });
            }
        }

        for edge in &edges {
            if !node_ids.contains(&edge.from) {
                return Err(StructureError::UnknownFromNode {
                    id: edge.from.clone(),
                });
            }
            if !node_ids.contains(&edge.to) {
                return Err(StructureError::UnknownToNode {
                    id: edge.to.clone(),
                });
            }
            if edge.cost.is_negative() {
                return Err(StructureError::NegativeCost {
                    edge: edge.id.clone(),
                });
            }
        }

        Ok(Graph {
            store_id: None,
            identity: id,
            name,
            nodes,
            edges,
            node_ids,
        })
    }

    /// Attach the id assigned by the graph store
    pub fn with_store_id(mut self, store_id: i64) -> Self {
        self.store_id = Some(store_id);
        self
    }

    pub fn store_id(&self) -> Option<i64> {
        self.store_id
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_ids.contains(id)
    }
}

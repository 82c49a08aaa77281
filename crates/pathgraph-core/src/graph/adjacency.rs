//! Read-only adjacency view derived from a graph's edge sequence

use std::collections::{HashMap, HashSet};

use crate::graph::types::{Cost, Graph};

/// One outgoing step: the target node and the cost of getting there
#[derive(Debug, Clone, PartialEq)]
pub struct Hop {
    pub to: String,
    pub cost: Cost,
}

/// Per-node outgoing hops, self-loops excluded, in edge declaration order.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyView {
    outgoing: HashMap<String, Vec<Hop>>,
    sources: Vec<String>,
    nodes: HashSet<String>,
}

impl AdjacencyView {
    pub fn from_graph(graph: &Graph) -> Self {
        let mut outgoing: HashMap<String, Vec<Hop>> = HashMap::new();
        let mut sources = Vec::new();

        for edge in graph.edges().iter().filter(|e| !e.is_self_loop()) {
            if !outgoing.contains_key(&edge.from) {
                sources.push(edge.from.clone());
            }
            outgoing.entry(edge.from.clone()).or_default().push(Hop {
                to: edge.to.clone(),
                cost: edge.cost,
            });
        }

        AdjacencyView {
            outgoing,
            sources,
            nodes: graph.nodes().iter().map(|n| n.id.clone()).collect(),
        }
    }

    /// Outgoing hops of `id`; empty for unknown nodes
    pub fn outgoing(&self, id: &str) -> &[Hop] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes with at least one traversable outgoing edge, first-seen order
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }
}

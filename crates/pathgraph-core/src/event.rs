//! Typed field events produced by ingestion and consumed by validation

use crate::graph::types::{Cost, Edge, GraphDescription, Node};

/// One field of a graph document, in document order
#[derive(Debug, Clone, PartialEq)]
pub enum GraphEvent {
    GraphId(String),
    GraphName(String),
    NodesStart,
    Node { id: String, name: String },
    NodesEnd,
    EdgesStart,
    EdgeStart,
    EdgeId(String),
    EdgeFrom(String),
    EdgeTo(String),
    EdgeCost(Cost),
    EdgeEnd,
    EdgesEnd,
}

impl GraphDescription {
    /// Collect a description from an event stream.
    ///
    /// Assumes the stream has already passed validation: the first graph id
    /// and name win, and missing edge fields fall back to empty values.
    /// Edges count only inside an edge group, and an edge left open when its
    /// group or the stream ends is still collected, matching the validator.
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a GraphEvent>,
    {
        let mut description = GraphDescription::default();
        let mut id = None;
        let mut name = None;
        let mut edge: Option<Edge> = None;
        let mut in_edges = false;

        for event in events {
            match event {
                GraphEvent::GraphId(value) => {
                    id.get_or_insert_with(|| value.clone());
                }
                GraphEvent::GraphName(value) => {
                    name.get_or_insert_with(|| value.clone());
                }
                GraphEvent::Node {
                    id: node_id,
                    name: node_name,
                } => {
                    description
                        .nodes
                        .push(Node::new(node_id.clone(), node_name.clone()));
                }
                GraphEvent::EdgeStart => {
                    if in_edges && edge.is_none() {
                        edge = Some(Edge::default());
                    }
                }
                GraphEvent::EdgeId(value) => {
                    if let Some(edge) = edge.as_mut() {
                        edge.id = value.clone();
                    }
                }
                GraphEvent::EdgeFrom(value) => {
                    if let Some(edge) = edge.as_mut() {
                        edge.from = value.clone();
                    }
                }
                GraphEvent::EdgeTo(value) => {
                    if let Some(edge) = edge.as_mut() {
                        edge.to = value.clone();
                    }
                }
                GraphEvent::EdgeCost(cost) => {
                    if let Some(edge) = edge.as_mut() {
                        edge.cost = *cost;
                    }
                }
                GraphEvent::EdgeEnd => description.edges.extend(edge.take()),
                GraphEvent::EdgesStart => in_edges = true,
                GraphEvent::EdgesEnd => {
                    description.edges.extend(edge.take());
                    in_edges = false;
                }
                GraphEvent::NodesStart | GraphEvent::NodesEnd => {}
            }
        }
        description.edges.extend(edge);

        description.id = id.unwrap_or_default();
        description.name = name.unwrap_or_default();
        description
    }
}

//! Structural validation of graph event streams
//!
//! The validator is a small state machine over [`GraphEvent`]s. Each event is
//! checked against the current phase, and the first violation ends the pass.
//! Nothing is built here; a stream that passes can be collected with
//! [`GraphDescription::from_events`](crate::graph::GraphDescription::from_events).

use std::collections::HashSet;

use crate::error::StructureError;
use crate::event::GraphEvent;
use crate::graph::Cost;

/// Where in the document the stream currently is
#[derive(Debug, Clone, PartialEq)]
enum Phase {
    BeforeNodes,
    InNodes,
    BetweenGroups,
    InEdges,
    InEdge(EdgeDraft),
    AfterEdges,
}

/// Fields seen so far for the edge being read
#[derive(Debug, Clone, Default, PartialEq)]
struct EdgeDraft {
    id: String,
    from: Option<String>,
    to: Option<String>,
    cost: Option<Cost>,
}

/// Single-pass structural validator.
///
/// Feed events in document order with [`Validator::feed`], then call
/// [`Validator::finish`] to run the end-of-stream checks.
#[derive(Debug)]
pub struct Validator {
    phase: Phase,
    nodes: HashSet<String>,
    has_id: bool,
    has_name: bool,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Validator {
            phase: Phase::BeforeNodes,
            nodes: HashSet::new(),
            has_id: false,
            has_name: false,
        }
    }

    pub fn feed(&mut self, event: &GraphEvent) -> Result<(), StructureError> {
        match event {
            // First occurrence wins; repeats are not flagged
            GraphEvent::GraphId(_) => self.has_id = true,
            GraphEvent::GraphName(_) => self.has_name = true,
            GraphEvent::NodesStart => self.open_nodes()?,
            GraphEvent::Node { id, .. } => self.declare_node(id)?,
            GraphEvent::NodesEnd => {
                if self.phase == Phase::InNodes {
                    self.phase = Phase::BetweenGroups;
                }
            }
            GraphEvent::EdgesStart => self.open_edges()?,
            GraphEvent::EdgeStart => self.open_edge()?,
            GraphEvent::EdgeId(id) => {
                if let Phase::InEdge(draft) = &mut self.phase {
                    draft.id = id.clone();
                }
            }
            GraphEvent::EdgeFrom(from) => {
                if let Phase::InEdge(draft) = &mut self.phase {
                    if draft.from.is_some() {
                        return Err(StructureError::MissingFrom);
                    }
                    draft.from = Some(from.clone());
                }
            }
            GraphEvent::EdgeTo(to) => {
                if let Phase::InEdge(draft) = &mut self.phase {
                    if draft.to.is_some() {
                        return Err(StructureError::MissingTo);
                    }
                    draft.to = Some(to.clone());
                }
            }
            GraphEvent::EdgeCost(cost) => {
                if let Phase::InEdge(draft) = &mut self.phase {
                    draft.cost = Some(*cost);
                }
            }
            GraphEvent::EdgeEnd => self.close_edge()?,
            GraphEvent::EdgesEnd => {
                self.close_edge()?;
                if self.phase == Phase::InEdges {
                    self.phase = Phase::AfterEdges;
                }
            }
        }
        Ok(())
    }

    /// Run the end-of-stream checks
    pub fn finish(mut self) -> Result<(), StructureError> {
        self.close_edge()?;

        if self.nodes.is_empty() {
            return Err(StructureError::NoNodes);
        }
        if !self.has_id {
            return Err(StructureError::MissingGraphId);
        }
        if !self.has_name {
            return Err(StructureError::MissingGraphName);
        }
        Ok(())
    }

    fn open_nodes(&mut self) -> Result<(), StructureError> {
        match self.phase {
            Phase::BeforeNodes | Phase::BetweenGroups => {
                self.phase = Phase::InNodes;
                Ok(())
            }
            Phase::InNodes => Ok(()),
            Phase::InEdges | Phase::InEdge(_) | Phase::AfterEdges => {
                Err(StructureError::GroupsOutOfOrder)
            }
        }
    }

    fn declare_node(&mut self, id: &str) -> Result<(), StructureError> {
        if matches!(
            self.phase,
            Phase::InEdges | Phase::InEdge(_) | Phase::AfterEdges
        ) {
            return Err(StructureError::GroupsOutOfOrder);
        }
        if !self.nodes.insert(id.to_string()) {
            return Err(StructureError::DuplicateNodeId { id: id.to_string() });
        }
        Ok(())
    }

    fn open_edges(&mut self) -> Result<(), StructureError> {
        match self.phase {
            Phase::BeforeNodes | Phase::InNodes => Err(StructureError::GroupsOutOfOrder),
            Phase::BetweenGroups | Phase::AfterEdges => {
                self.phase = Phase::InEdges;
                Ok(())
            }
            Phase::InEdges | Phase::InEdge(_) => Ok(()),
        }
    }

    fn open_edge(&mut self) -> Result<(), StructureError> {
        match self.phase {
            Phase::BeforeNodes | Phase::InNodes => Err(StructureError::GroupsOutOfOrder),
            Phase::InEdges => {
                if self.nodes.is_empty() {
                    return Err(StructureError::NoNodes);
                }
                self.phase = Phase::InEdge(EdgeDraft::default());
                Ok(())
            }
            // Edges outside an edge group are not part of the graph
            Phase::BetweenGroups | Phase::InEdge(_) | Phase::AfterEdges => Ok(()),
        }
    }

    /// Check a finished edge. A no-op unless an edge is open.
    fn close_edge(&mut self) -> Result<(), StructureError> {
        let draft = match std::mem::replace(&mut self.phase, Phase::InEdges) {
            Phase::InEdge(draft) => draft,
            other => {
                self.phase = other;
                return Ok(());
            }
        };

        let from = draft.from.filter(|f| !f.is_empty());
        let to = draft.to.filter(|t| !t.is_empty());
        let Some(from) = from else {
            return Err(StructureError::MissingFrom);
        };
        let Some(to) = to else {
            return Err(StructureError::MissingTo);
        };
        if !self.nodes.contains(&from) {
            return Err(StructureError::UnknownFromNode { id: from });
        }
        if !self.nodes.contains(&to) {
            return Err(StructureError::UnknownToNode { id: to });
        }
        if draft.cost.is_some_and(|cost| cost.is_negative()) {
            return Err(StructureError::NegativeCost { edge: draft.id });
        }
        Ok(())
    }
}

/// Validate a complete event stream, stopping at the first violation
pub fn validate<'a, I>(events: I) -> Result<(), StructureError>
where
    I: IntoIterator<Item = &'a GraphEvent>,
{
    let mut validator = Validator::new();
    for event in events {
        if let Err(err) = validator.feed(event) {
            tracing::debug!(error = %err, "graph rejected");
            return Err(err);
        }
    }
    validator.finish().inspect_err(|err| {
        tracing::debug!(error = %err, "graph rejected");
    })
}

#[cfg(test)]
mod tests;

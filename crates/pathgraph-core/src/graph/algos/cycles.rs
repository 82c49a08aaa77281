//! Cycle detection for the query gate.
//!
//! Every traversable edge `u → v` seeds a path `[u, v]`. Paths are extended
//! one edge at a time, shortest first; an extension that lands on a node
//! already on the path is recorded as a witness and not extended further.
//! The work-list drains once no non-cyclic branch is left to expand, which
//! always happens because each surviving path visits distinct nodes.

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::graph::GraphProvider;

/// A concrete node sequence demonstrating a directed cycle.
///
/// The last node also appears earlier in the sequence; for `A → B → C → B`
/// the cycle itself is `B → C → B`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CycleWitness {
    path: Vec<String>,
}

impl CycleWitness {
    pub fn new(path: Vec<String>) -> Self {
        CycleWitness { path }
    }

    /// Full node sequence, including the lead-in before the cycle
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The closed loop only, starting and ending at the repeated node
    pub fn cycle(&self) -> &[String] {
        let Some(repeated) = self.path.last() else {
            return &[];
        };
        let first = self
            .path
            .iter()
            .position(|id| id == repeated)
            .unwrap_or(0);
        &self.path[first..]
    }

    /// Number of distinct nodes in the loop
    pub fn cycle_len(&self) -> usize {
        self.cycle().len().saturating_sub(1)
    }
}

impl fmt::Display for CycleWitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.join(" → "))
    }
}

/// Collect every cycle witness reachable from the provider's edges.
/// An empty result means the graph is acyclic.
pub fn cycle_witnesses(provider: &dyn GraphProvider) -> Vec<CycleWitness> {
    let mut witnesses = Vec::new();
    let mut pending: VecDeque<Vec<String>> = VecDeque::new();

    for source in provider.sources() {
        for hop in provider.outgoing(source) {
            pending.push_back(vec![source.clone(), hop.to.clone()]);
        }
    }

    while let Some(path) = pending.pop_front() {
        let Some(last) = path.last() else {
            continue;
        };

        for hop in provider.outgoing(last) {
            let mut extended = path.clone();
            extended.push(hop.to.clone());

            if path.contains(&hop.to) {
                witnesses.push(CycleWitness::new(extended));
            } else {
                pending.push_back(extended);
            }
        }
    }

    tracing::debug!(witnesses = witnesses.len(), "cycle_scan");
    witnesses
}

use serde::Serialize;

use crate::graph::types::Cost;
use crate::graph::GraphProvider;

/// Outcome of a cheapest-path search.
///
/// `NoPath` is a normal outcome, distinct from a path whose total cost is 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheapestPath {
    Found { cost: Cost, path: Vec<String> },
    NoPath,
}

impl CheapestPath {
    pub fn is_found(&self) -> bool {
        matches!(self, CheapestPath::Found { .. })
    }

    pub fn cost(&self) -> Option<Cost> {
        match self {
            CheapestPath::Found { cost, .. } => Some(*cost),
            CheapestPath::NoPath => None,
        }
    }

    pub fn path(&self) -> Option<&[String]> {
        match self {
            CheapestPath::Found { path, .. } => Some(path),
            CheapestPath::NoPath => None,
        }
    }
}

/// Running state of the depth-first search
struct CheapestSearch<'a> {
    provider: &'a dyn GraphProvider,
    end: &'a str,
    ceiling: Cost,
    best: Option<(Cost, Vec<String>)>,
    path: Vec<String>,
}

impl CheapestSearch<'_> {
    /// Whether a path costing `cost` could still be reported.
    ///
    /// Sums of finite costs can overflow to infinity, so an infinite ceiling
    /// bounds nothing and only a found best is compared against.
    fn can_improve(&self, cost: Cost) -> bool {
        let under_ceiling = !self.ceiling.value().is_finite() || cost < self.ceiling;
        let beats_best = self.best.as_ref().is_none_or(|(best, _)| cost < *best);
        under_ceiling && beats_best
    }

    fn expand(&mut self, current: &str, came_from: Option<&str>, accumulated: Cost) {
        // Costs are non-negative: nothing below here can beat the best
        if !self.can_improve(accumulated) {
            return;
        }

        if current == self.end {
            self.best = Some((accumulated, self.path.clone()));
            return;
        }

        let provider = self.provider;
        for hop in provider.outgoing(current) {
            if came_from == Some(hop.to.as_str()) {
                continue;
            }
            self.path.push(hop.to.clone());
            self.expand(&hop.to, Some(current), accumulated + hop.cost);
            self.path.pop();
        }
    }
}

/// Find the minimum-cost simple path from `start` to `end`.
///
/// Walks the same paths as [`all_simple_paths`](super::all_simple_paths).
/// A path replaces the current best only when strictly cheaper, so among
/// equal-cost paths the first in edge declaration order wins. Paths costing
/// a finite `ceiling` or more are never reported; with an infinite ceiling
/// any reachable `end` is found, even when its cost overflows.
pub fn cheapest_path(
    provider: &dyn GraphProvider,
    start: &str,
    end: &str,
    ceiling: Cost,
) -> CheapestPath {
    if !provider.contains(start) {
        return CheapestPath::NoPath;
    }

    let mut search = CheapestSearch {
        provider,
        end,
        ceiling,
        best: None,
        path: vec![start.to_string()],
    };
    search.expand(start, None, Cost::ZERO);

    match search.best {
        Some((cost, path)) => CheapestPath::Found { cost, path },
        None => CheapestPath::NoPath,
    }
}

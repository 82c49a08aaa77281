//! Query requests, answers and the acyclicity-gated engine that runs them

use std::time::Instant;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{PathgraphError, Result};
use crate::graph::adjacency::AdjacencyView;
use crate::graph::algos::{all_simple_paths, cheapest_path, cycle_witnesses};
use crate::graph::algos::{CheapestPath, CycleWitness};
use crate::graph::types::{Cost, Graph};
use crate::trace_time;

/// Start and end node of one path question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub start: String,
    pub end: String,
}

impl Endpoints {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Endpoints {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// One query of a batch. The kind is fixed when the request is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QueryRequest", into = "QueryRequest")]
pub enum Query {
    AllPaths(Endpoints),
    Cheapest(Endpoints),
    Both {
        paths: Endpoints,
        cheapest: Endpoints,
    },
}

/// Wire form: `{"paths": {..}, "cheapest": {..}}`, either member optional
#[derive(Debug, Clone, Serialize, Deserialize)]
struct QueryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    paths: Option<Endpoints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cheapest: Option<Endpoints>,
}

impl TryFrom<QueryRequest> for Query {
    type Error = String;

    fn try_from(request: QueryRequest) -> std::result::Result<Self, Self::Error> {
        match (request.paths, request.cheapest) {
            (Some(paths), Some(cheapest)) => Ok(Query::Both { paths, cheapest }),
            (Some(paths), None) => Ok(Query::AllPaths(paths)),
            (None, Some(cheapest)) => Ok(Query::Cheapest(cheapest)),
            (None, None) => Err("query must contain \"paths\" or \"cheapest\"".to_string()),
        }
    }
}

impl From<Query> for QueryRequest {
    fn from(query: Query) -> Self {
        match query {
            Query::AllPaths(paths) => QueryRequest {
                paths: Some(paths),
                cheapest: None,
            },
            Query::Cheapest(cheapest) => QueryRequest {
                paths: None,
                cheapest: Some(cheapest),
            },
            Query::Both { paths, cheapest } => QueryRequest {
                paths: Some(paths),
                cheapest: Some(cheapest),
            },
        }
    }
}

/// A batch of queries as read from a request document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryBatch {
    pub queries: Vec<Query>,
}

impl QueryBatch {
    /// Parse a `{"queries": [...]}` document
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input)
            .map_err(|e| PathgraphError::UsageError(format!("invalid query request: {}", e)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathsAnswer {
    pub from: String,
    pub to: String,
    pub paths: Vec<Vec<String>>,
}

/// Cheapest-path answer; serializes `"path": false` when nothing was found
#[derive(Debug, Clone, PartialEq)]
pub struct CheapestAnswer {
    pub from: String,
    pub to: String,
    pub result: CheapestPath,
}

impl Serialize for CheapestAnswer {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("from", &self.from)?;
        map.serialize_entry("to", &self.to)?;
        match &self.result {
            CheapestPath::Found { cost, path } => {
                map.serialize_entry("cost", cost)?;
                map.serialize_entry("path", path)?;
            }
            CheapestPath::NoPath => map.serialize_entry("path", &false)?,
        }
        map.end()
    }
}

/// Answer to one query, in the same shape as the query
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Answer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<PathsAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheapest: Option<CheapestAnswer>,
}

/// Runs queries against one graph that has passed the cycle gate.
///
/// The adjacency view is built once per engine and never mutated, so an
/// engine can be shared between threads.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    adjacency: AdjacencyView,
    ceiling: Cost,
}

impl QueryEngine {
    /// Build the adjacency view and refuse the graph if it has any cycle
    #[tracing::instrument(skip(graph), fields(graph = %graph.identity()))]
    pub fn new(graph: &Graph) -> Result<Self> {
        let start = Instant::now();
        let adjacency = AdjacencyView::from_graph(graph);
        let witnesses = cycle_witnesses(&adjacency);
        trace_time!(start, "cycle_gate", witnesses = witnesses.len());

        if !witnesses.is_empty() {
            tracing::debug!(witnesses = witnesses.len(), "graph refused: cycle present");
            return Err(PathgraphError::CyclePresent { witnesses });
        }

        Ok(QueryEngine {
            adjacency,
            ceiling: Cost::UNBOUNDED,
        })
    }

    /// Only report cheapest paths costing strictly less than `ceiling`
    pub fn with_cost_ceiling(mut self, ceiling: Cost) -> Self {
        self.ceiling = ceiling;
        self
    }

    pub fn cost_ceiling(&self) -> Cost {
        self.ceiling
    }

    #[tracing::instrument(skip(self))]
    pub fn all_paths(&self, start: &str, end: &str) -> Vec<Vec<String>> {
        let paths = all_simple_paths(&self.adjacency, start, end);
        tracing::debug!(found = paths.len(), "all_paths");
        paths
    }

    #[tracing::instrument(skip(self))]
    pub fn cheapest_path(&self, start: &str, end: &str) -> CheapestPath {
        let result = cheapest_path(&self.adjacency, start, end, self.ceiling);
        tracing::debug!(found = result.is_found(), "cheapest_path");
        result
    }

    pub fn answer_one(&self, query: &Query) -> Answer {
        match query {
            Query::AllPaths(paths) => Answer {
                paths: Some(self.paths_answer(paths)),
                cheapest: None,
            },
            Query::Cheapest(cheapest) => Answer {
                paths: None,
                cheapest: Some(self.cheapest_answer(cheapest)),
            },
            Query::Both { paths, cheapest } => Answer {
                paths: Some(self.paths_answer(paths)),
                cheapest: Some(self.cheapest_answer(cheapest)),
            },
        }
    }

    /// Answer every query, one answer per query in request order
    pub fn answer(&self, queries: &[Query]) -> Vec<Answer> {
        let start = Instant::now();
        let answers = queries.iter().map(|q| self.answer_one(q)).collect();
        trace_time!(start, "answer_batch", queries = queries.len());
        answers
    }

    fn paths_answer(&self, endpoints: &Endpoints) -> PathsAnswer {
        PathsAnswer {
            from: endpoints.start.clone(),
            to: endpoints.end.clone(),
            paths: self.all_paths(&endpoints.start, &endpoints.end),
        }
    }

    fn cheapest_answer(&self, endpoints: &Endpoints) -> CheapestAnswer {
        CheapestAnswer {
            from: endpoints.start.clone(),
            to: endpoints.end.clone(),
            result: self.cheapest_path(&endpoints.start, &endpoints.end),
        }
    }
}

/// All cycle witnesses of `graph`; empty when the graph is acyclic
pub fn find_cycles(graph: &Graph) -> Vec<CycleWitness> {
    cycle_witnesses(&AdjacencyView::from_graph(graph))
}

/// Gate `graph` and enumerate every simple path from `start` to `end`
pub fn find_all_paths(graph: &Graph, start: &str, end: &str) -> Result<Vec<Vec<String>>> {
    Ok(QueryEngine::new(graph)?.all_paths(start, end))
}

/// Gate `graph` and find its cheapest path from `start` to `end`
pub fn find_cheapest_path(graph: &Graph, start: &str, end: &str) -> Result<CheapestPath> {
    Ok(QueryEngine::new(graph)?.cheapest_path(start, end))
}

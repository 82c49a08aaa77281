//! Graph model and path queries
//!
//! - Immutable graph and its adjacency view
//! - Cycle detection gating every query
//! - Exhaustive simple path enumeration and cheapest path search
//! - Graph provider trait decoupling the searches from storage

pub mod adjacency;
pub mod algos;
pub mod query;
pub mod traversal;
pub mod types;

pub use adjacency::{AdjacencyView, Hop};
pub use algos::{all_simple_paths, cheapest_path, cycle_witnesses, CheapestPath, CycleWitness};
pub use query::{
    find_all_paths, find_cheapest_path, find_cycles, Answer, CheapestAnswer, Endpoints,
    PathsAnswer, Query, QueryBatch, QueryEngine,
};
pub use traversal::GraphProvider;
pub use types::{Cost, Edge, Graph, GraphDescription, Node};

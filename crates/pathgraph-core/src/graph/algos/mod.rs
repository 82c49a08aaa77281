//! Graph algorithm implementations
//!
//! - `cycles`: Cycle witness collection for the query gate
//! - `paths`: Exhaustive simple path enumeration
//! - `cheapest`: Minimum-cost simple path search

pub mod cheapest;
pub mod cycles;
pub mod paths;

pub use cheapest::{cheapest_path, CheapestPath};
pub use cycles::{cycle_witnesses, CycleWitness};
pub use paths::all_simple_paths;

//! CLI commands for pathgraph

pub mod cycles;
pub mod delete;
pub mod dispatch;
pub mod list;
pub mod load;
pub mod query;
pub mod show;
pub mod validate;

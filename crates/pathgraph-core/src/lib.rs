//! Pathgraph Core Library
//!
//! Graph construction, structural validation, cycle gating and path search
//! for the pathgraph CLI.

pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod graph;
pub mod ingest;
pub mod logging;
pub mod store;
pub mod validate;

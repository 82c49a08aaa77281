//! Graph document ingestion
//!
//! Turns a serialized graph document into a validated [`Graph`]:
//! document → events → validation → description → graph.

pub mod xml;

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::error::{PathgraphError, Result};
use crate::graph::{Graph, GraphDescription};
use crate::trace_time;
use crate::validate::validate;

pub use xml::read_events;

/// Read and validate a document, returning the collected description
pub fn read_description(document: &str) -> Result<GraphDescription> {
    let start = Instant::now();
    let events = read_events(document)?;
    trace_time!(start, "read_events", events = events.len());

    validate(&events)?;
    Ok(GraphDescription::from_events(&events))
}

/// Read, validate and construct a graph from a document
pub fn read_graph(document: &str) -> Result<Graph> {
    let description = read_description(document)?;
    let graph = Graph::new(description)?;
    tracing::debug!(
        graph = graph.identity(),
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        "graph accepted"
    );
    Ok(graph)
}

#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn read_graph_file(path: &Path) -> Result<Graph> {
    let document = fs::read_to_string(path)
        .map_err(|e| PathgraphError::io_operation("read", path.display(), e))?;
    read_graph(&document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StructureError;
    use crate::graph::Cost;
    use tempfile::tempdir;

    const DOCUMENT: &str = "<graph><id>g0</id><name>G</name>\
        <nodes><node><id>a</id><name>A</name></node><node><id>b</id><name>B</name></node></nodes>\
        <edges><node><id>e1</id><from>a</from><to>b</to><cost>3</cost></node></edges></graph>";

    #[test]
    fn test_read_graph() {
        let graph = read_graph(DOCUMENT).unwrap();
        assert_eq!(graph.identity(), "g0");
        assert_eq!(graph.name(), "G");
        assert_eq!(graph.nodes().len(), 2);
        assert_eq!(graph.edges()[0].cost, Cost::new(3.0));
    }

    #[test]
    fn test_structure_errors_surface() {
        let document = DOCUMENT.replace("<id>b</id>", "<id>a</id>");
        let err = read_graph(&document).unwrap_err();
        assert!(matches!(
            err,
            PathgraphError::Structure(StructureError::DuplicateNodeId { .. })
        ));
    }

    #[test]
    fn test_read_graph_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.xml");
        fs::write(&path, DOCUMENT).unwrap();

        let graph = read_graph_file(&path).unwrap();
        assert_eq!(graph.edges().len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_graph_file(&dir.path().join("absent.xml")).unwrap_err();
        assert!(matches!(err, PathgraphError::FailedOperationWithTarget { .. }));
    }
}

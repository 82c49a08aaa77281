use super::*;
use crate::graph::algos::fixtures::graph_with_nodes;

fn sample_graph() -> Graph {
    graph_with_nodes(
        &["island"],
        &[("a", "b", 1.0), ("b", "c", 0.5), ("a", "a", 2.0)],
    )
}

#[test]
fn test_create_and_load_round_trip() {
    let mut store = GraphStore::open_in_memory().unwrap();
    let graph = sample_graph();

    let id = store.create(&graph).unwrap();
    let loaded = store.load(id).unwrap();

    assert_eq!(loaded.store_id(), Some(id));
    assert_eq!(loaded.identity(), graph.identity());
    assert_eq!(loaded.name(), graph.name());
    assert_eq!(loaded.nodes(), graph.nodes());
    assert_eq!(loaded.edges(), graph.edges());
}

#[test]
fn test_ids_are_distinct() {
    let mut store = GraphStore::open_in_memory().unwrap();
    let first = store.create(&sample_graph()).unwrap();
    let second = store.create(&sample_graph()).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_load_missing_graph() {
    let store = GraphStore::open_in_memory().unwrap();
    let err = store.load(42).unwrap_err();
    assert!(matches!(err, PathgraphError::GraphNotFound { id: 42 }));
}

#[test]
fn test_list_graphs() {
    let mut store = GraphStore::open_in_memory().unwrap();
    assert!(store.list().unwrap().is_empty());

    let id = store.create(&sample_graph()).unwrap();
    let summaries = store.list().unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, id);
    assert_eq!(summaries[0].identity, "test");
    assert_eq!(summaries[0].nodes, 4);
    assert_eq!(summaries[0].edges, 3);
}

#[test]
fn test_delete_cascades() {
    let mut store = GraphStore::open_in_memory().unwrap();
    let id = store.create(&sample_graph()).unwrap();

    store.delete(id).unwrap();

    assert!(matches!(
        store.load(id),
        Err(PathgraphError::GraphNotFound { .. })
    ));
    let orphans: i64 = store
        .conn
        .query_row("SELECT COUNT(*) FROM edges", [], |r| r.get(0))
        .unwrap();
    assert_eq!(orphans, 0);
}

#[test]
fn test_delete_missing_graph() {
    let store = GraphStore::open_in_memory().unwrap();
    assert!(matches!(
        store.delete(7),
        Err(PathgraphError::GraphNotFound { id: 7 })
    ));
}

#[test]
fn test_load_rechecks_node_references() {
    let mut store = GraphStore::open_in_memory().unwrap();
    let id = store.create(&sample_graph()).unwrap();
    store
        .conn
        .execute(
            "UPDATE edges SET to_node = 'ghost' WHERE graph_id = ?1 AND position = 0",
            [id],
        )
        .unwrap();

    let err = store.load(id).unwrap_err();
    assert!(matches!(
        err,
        PathgraphError::Structure(crate::error::StructureError::UnknownToNode { .. })
    ));
}

#[test]
fn test_file_store_persists_across_opens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graphs.db");

    let id = {
        let mut store = GraphStore::open(&path).unwrap();
        store.create(&sample_graph()).unwrap()
    };

    let store = GraphStore::open(&path).unwrap();
    assert_eq!(store.load(id).unwrap().edges().len(), 3);
}

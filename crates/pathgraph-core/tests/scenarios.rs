//! End-to-end behaviour of the query engine over XML documents

use pathgraph_core::error::{PathgraphError, StructureError};
use pathgraph_core::graph::{
    find_all_paths, find_cheapest_path, find_cycles, CheapestPath, Cost, Endpoints, Query,
    QueryBatch, QueryEngine,
};
use pathgraph_core::ingest::read_graph;
use pathgraph_core::store::GraphStore;

fn document(nodes: &[&str], edges: &[(&str, &str, &str)]) -> String {
    let mut xml = String::from("<graph><id>g</id><name>Scenario</name><nodes>");
    for id in nodes {
        xml.push_str(&format!("<node><id>{id}</id><name>{id}</name></node>"));
    }
    xml.push_str("</nodes><edges>");
    for (i, (from, to, cost)) in edges.iter().enumerate() {
        xml.push_str(&format!(
            "<node><id>e{i}</id><from>{from}</from><to>{to}</to><cost>{cost}</cost></node>"
        ));
    }
    xml.push_str("</edges></graph>");
    xml
}

fn ids(path: &[&str]) -> Vec<String> {
    path.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_single_chain() {
    let graph = read_graph(&document(&["A", "B", "C"], &[("A", "B", "1"), ("B", "C", "1")]))
        .unwrap();

    assert_eq!(
        find_all_paths(&graph, "A", "C").unwrap(),
        vec![ids(&["A", "B", "C"])]
    );
    assert_eq!(
        find_cheapest_path(&graph, "A", "C").unwrap(),
        CheapestPath::Found {
            cost: Cost::new(2.0),
            path: ids(&["A", "B", "C"]),
        }
    );
}

#[test]
fn test_cheaper_detour_beats_direct_edge() {
    let graph = read_graph(&document(
        &["A", "B", "C"],
        &[("A", "B", "1"), ("B", "C", "1"), ("A", "C", "5")],
    ))
    .unwrap();

    let cheapest = find_cheapest_path(&graph, "A", "C").unwrap();
    assert_eq!(cheapest.cost(), Some(Cost::new(2.0)));
    assert_eq!(cheapest.path(), Some(ids(&["A", "B", "C"]).as_slice()));
}

#[test]
fn test_two_cycle_refuses_queries() {
    let graph = read_graph(&document(&["A", "B"], &[("A", "B", "1"), ("B", "A", "1")])).unwrap();

    assert!(!find_cycles(&graph).is_empty());
    assert!(matches!(
        find_all_paths(&graph, "A", "B"),
        Err(PathgraphError::CyclePresent { .. })
    ));
    assert!(matches!(
        find_cheapest_path(&graph, "A", "B"),
        Err(PathgraphError::CyclePresent { .. })
    ));
}

#[test]
fn test_edges_before_nodes_rejected() {
    let xml = "<graph><id>g</id><name>n</name>\
        <edges><node><id>e</id><from>zz</from><to>yy</to><cost>-4</cost></node></edges>\
        <nodes><node><id>A</id><name>A</name></node></nodes></graph>";

    let err = read_graph(xml).unwrap_err();
    assert!(matches!(
        err,
        PathgraphError::Structure(StructureError::GroupsOutOfOrder)
    ));
}

#[test]
fn test_duplicate_node_identity_rejected() {
    let err = read_graph(&document(&["1", "1"], &[])).unwrap_err();
    assert!(matches!(
        err,
        PathgraphError::Structure(StructureError::DuplicateNodeId { .. })
    ));
}

#[test]
fn test_zero_cost_path_is_not_no_path() {
    let graph = read_graph(&document(&["A", "B"], &[("A", "B", "0")])).unwrap();

    let cheapest = find_cheapest_path(&graph, "A", "B").unwrap();
    assert_eq!(
        cheapest,
        CheapestPath::Found {
            cost: Cost::ZERO,
            path: ids(&["A", "B"]),
        }
    );
}

#[test]
fn test_cheapest_agrees_with_enumeration_when_costs_overflow() {
    let graph = read_graph(&document(
        &["A", "B", "C"],
        &[("A", "B", "1e308"), ("B", "C", "1e308")],
    ))
    .unwrap();

    let paths = find_all_paths(&graph, "A", "C").unwrap();
    let cheapest = find_cheapest_path(&graph, "A", "C").unwrap();

    assert_eq!(paths, vec![ids(&["A", "B", "C"])]);
    assert_eq!(cheapest.path(), Some(paths[0].as_slice()));
}

#[test]
fn test_every_enumerated_path_is_simple_and_connected() {
    let graph = read_graph(&document(
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", "1"),
            ("A", "C", "2"),
            ("B", "C", "1"),
            ("B", "D", "4"),
            ("C", "D", "1"),
            ("D", "E", "1"),
            ("C", "E", "7"),
        ],
    ))
    .unwrap();

    let paths = find_all_paths(&graph, "A", "E").unwrap();
    assert_eq!(paths.len(), 5);

    for path in &paths {
        assert_eq!(path.first().map(String::as_str), Some("A"));
        assert_eq!(path.last().map(String::as_str), Some("E"));
        let mut seen = std::collections::HashSet::new();
        assert!(path.iter().all(|id| seen.insert(id)), "{path:?} repeats a node");
        for step in path.windows(2) {
            assert!(graph
                .edges()
                .iter()
                .any(|e| e.from == step[0] && e.to == step[1]));
        }
    }

    // The cheapest path is one of the enumerated paths and none is cheaper
    let cheapest = find_cheapest_path(&graph, "A", "E").unwrap();
    let best = cheapest.path().unwrap().to_vec();
    assert!(paths.contains(&best));
    assert_eq!(cheapest.cost(), Some(Cost::new(4.0)));
}

#[test]
fn test_stored_graph_answers_batch() {
    let graph = read_graph(&document(
        &["A", "B", "C", "Z"],
        &[("A", "B", "1"), ("B", "C", "1"), ("A", "C", "5")],
    ))
    .unwrap();

    let mut store = GraphStore::open_in_memory().unwrap();
    let id = store.create(&graph).unwrap();
    let loaded = store.load(id).unwrap();

    let batch = QueryBatch::from_json(
        r#"{"queries": [
            {"paths": {"start": "A", "end": "C"}, "cheapest": {"start": "A", "end": "C"}},
            {"cheapest": {"start": "A", "end": "Z"}}
        ]}"#,
    )
    .unwrap();
    let answers = QueryEngine::new(&loaded).unwrap().answer(&batch.queries);
    let json = serde_json::to_value(&answers).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            {
                "paths": {"from": "A", "to": "C", "paths": [["A", "B", "C"], ["A", "C"]]},
                "cheapest": {"from": "A", "to": "C", "cost": 2.0, "path": ["A", "B", "C"]}
            },
            {"cheapest": {"from": "A", "to": "Z", "path": false}}
        ])
    );
}

#[test]
fn test_batch_with_only_all_paths_query() {
    let graph = read_graph(&document(&["A", "B"], &[("A", "B", "3")])).unwrap();
    let engine = QueryEngine::new(&graph).unwrap();

    let answers = engine.answer(&[Query::AllPaths(Endpoints::new("B", "A"))]);

    assert_eq!(answers.len(), 1);
    assert!(answers[0].cheapest.is_none());
    assert!(answers[0].paths.as_ref().unwrap().paths.is_empty());
}

use super::*;

fn node(id: &str) -> GraphEvent {
    GraphEvent::Node {
        id: id.to_string(),
        name: id.to_uppercase(),
    }
}

fn edge(from: Option<&str>, to: Option<&str>, cost: Option<f64>) -> Vec<GraphEvent> {
    let mut events = vec![GraphEvent::EdgeStart, GraphEvent::EdgeId("e".to_string())];
    if let Some(from) = from {
        events.push(GraphEvent::EdgeFrom(from.to_string()));
    }
    if let Some(to) = to {
        events.push(GraphEvent::EdgeTo(to.to_string()));
    }
    if let Some(cost) = cost {
        events.push(GraphEvent::EdgeCost(Cost::new(cost)));
    }
    events.push(GraphEvent::EdgeEnd);
    events
}

fn header() -> Vec<GraphEvent> {
    vec![
        GraphEvent::GraphId("g0".to_string()),
        GraphEvent::GraphName("Graph".to_string()),
    ]
}

/// Header, a nodes group with `nodes`, then an edges group with `edges`
fn document(nodes: &[&str], edges: Vec<Vec<GraphEvent>>) -> Vec<GraphEvent> {
    let mut events = header();
    events.push(GraphEvent::NodesStart);
    events.extend(nodes.iter().map(|id| node(id)));
    events.push(GraphEvent::NodesEnd);
    events.push(GraphEvent::EdgesStart);
    events.extend(edges.into_iter().flatten());
    events.push(GraphEvent::EdgesEnd);
    events
}

#[test]
fn test_accepts_well_formed_graph() {
    let events = document(
        &["a", "b", "c"],
        vec![
            edge(Some("a"), Some("b"), Some(1.0)),
            edge(Some("b"), Some("c"), Some(0.0)),
        ],
    );
    assert_eq!(validate(&events), Ok(()));
}

#[test]
fn test_accepts_graph_without_edges_group() {
    let mut events = header();
    events.extend([GraphEvent::NodesStart, node("a"), GraphEvent::NodesEnd]);
    assert_eq!(validate(&events), Ok(()));
}

#[test]
fn test_accepts_missing_cost_and_self_loop() {
    let events = document(&["a"], vec![edge(Some("a"), Some("a"), None)]);
    assert_eq!(validate(&events), Ok(()));
}

#[test]
fn test_edges_before_nodes_is_out_of_order() {
    // Content of the edge group is irrelevant: the ordering check fires first
    let mut events = header();
    events.push(GraphEvent::EdgesStart);
    events.extend(edge(Some("x"), None, Some(-1.0)));
    events.push(GraphEvent::EdgesEnd);
    events.extend([GraphEvent::NodesStart, node("a"), GraphEvent::NodesEnd]);

    assert_eq!(validate(&events), Err(StructureError::GroupsOutOfOrder));
}

#[test]
fn test_nodes_after_edges_is_out_of_order() {
    let mut events = document(&["a"], vec![]);
    events.extend([GraphEvent::NodesStart, node("b"), GraphEvent::NodesEnd]);

    assert_eq!(validate(&events), Err(StructureError::GroupsOutOfOrder));
}

#[test]
fn test_ordering_wins_over_missing_header() {
    let events = vec![GraphEvent::EdgesStart, GraphEvent::NodesStart];
    assert_eq!(validate(&events), Err(StructureError::GroupsOutOfOrder));
}

#[test]
fn test_duplicate_node_rejected_on_second_occurrence() {
    let mut events = header();
    events.extend([GraphEvent::NodesStart, node("1"), node("1")]);
    // Nothing after the duplicate is needed to reject
    let mut validator = Validator::new();
    let mut outcome = Ok(());
    for (position, event) in events.iter().enumerate() {
        outcome = validator.feed(event);
        if outcome.is_err() {
            assert_eq!(position, events.len() - 1);
            break;
        }
    }
    assert_eq!(
        outcome,
        Err(StructureError::DuplicateNodeId {
            id: "1".to_string()
        })
    );
}

#[test]
fn test_duplicate_node_message() {
    let events = document(&["1", "2", "1"], vec![]);
    let err = validate(&events).unwrap_err();
    assert_eq!(err.to_string(), "all nodes must have different <id> tags");
}

#[test]
fn test_no_nodes_at_first_edge() {
    let events = document(&[], vec![edge(Some("a"), Some("b"), Some(1.0))]);
    assert_eq!(validate(&events), Err(StructureError::NoNodes));
}

#[test]
fn test_no_nodes_at_end_of_stream() {
    let events = document(&[], vec![]);
    assert_eq!(validate(&events), Err(StructureError::NoNodes));
}

#[test]
fn test_no_nodes_reported_before_missing_header() {
    let events = vec![GraphEvent::NodesStart, GraphEvent::NodesEnd];
    assert_eq!(validate(&events), Err(StructureError::NoNodes));
}

#[test]
fn test_missing_from() {
    let events = document(&["a"], vec![edge(None, Some("a"), Some(1.0))]);
    assert_eq!(validate(&events), Err(StructureError::MissingFrom));
}

#[test]
fn test_empty_from_counts_as_missing() {
    let events = document(&["a"], vec![edge(Some(""), Some("a"), Some(1.0))]);
    assert_eq!(validate(&events), Err(StructureError::MissingFrom));
}

#[test]
fn test_missing_to() {
    let events = document(&["a"], vec![edge(Some("a"), None, Some(1.0))]);
    assert_eq!(validate(&events), Err(StructureError::MissingTo));
}

#[test]
fn test_missing_from_checked_before_missing_to() {
    let events = document(&["a"], vec![edge(None, None, Some(1.0))]);
    assert_eq!(validate(&events), Err(StructureError::MissingFrom));
}

#[test]
fn test_repeated_from_is_rejected_immediately() {
    let mut events = header();
    events.extend([
        GraphEvent::NodesStart,
        node("a"),
        GraphEvent::NodesEnd,
        GraphEvent::EdgesStart,
        GraphEvent::EdgeStart,
        GraphEvent::EdgeFrom("a".to_string()),
        GraphEvent::EdgeFrom("a".to_string()),
    ]);
    assert_eq!(validate(&events), Err(StructureError::MissingFrom));
}

#[test]
fn test_repeated_to_is_rejected_immediately() {
    let mut events = header();
    events.extend([
        GraphEvent::NodesStart,
        node("a"),
        GraphEvent::NodesEnd,
        GraphEvent::EdgesStart,
        GraphEvent::EdgeStart,
        GraphEvent::EdgeTo("a".to_string()),
        GraphEvent::EdgeTo("a".to_string()),
    ]);
    assert_eq!(validate(&events), Err(StructureError::MissingTo));
}

#[test]
fn test_unknown_from_node() {
    let events = document(&["a"], vec![edge(Some("x"), Some("a"), Some(1.0))]);
    assert_eq!(
        validate(&events),
        Err(StructureError::UnknownFromNode {
            id: "x".to_string()
        })
    );
}

#[test]
fn test_unknown_to_node() {
    let events = document(&["a"], vec![edge(Some("a"), Some("x"), Some(1.0))]);
    assert_eq!(
        validate(&events),
        Err(StructureError::UnknownToNode {
            id: "x".to_string()
        })
    );
}

#[test]
fn test_unknown_from_checked_before_unknown_to() {
    let events = document(&["a"], vec![edge(Some("x"), Some("y"), Some(-3.0))]);
    assert!(matches!(
        validate(&events),
        Err(StructureError::UnknownFromNode { .. })
    ));
}

#[test]
fn test_negative_cost() {
    let events = document(&["a", "b"], vec![edge(Some("a"), Some("b"), Some(-0.5))]);
    assert_eq!(
        validate(&events),
        Err(StructureError::NegativeCost {
            edge: "e".to_string()
        })
    );
}

#[test]
fn test_edge_may_not_reference_later_node() {
    // The edge closes before node "b" could ever be declared
    let events = document(&["a"], vec![edge(Some("a"), Some("b"), Some(1.0))]);
    assert!(validate(&events).is_err());
}

#[test]
fn test_missing_graph_id() {
    let events: Vec<GraphEvent> = document(&["a"], vec![])
        .into_iter()
        .filter(|e| !matches!(e, GraphEvent::GraphId(_)))
        .collect();
    assert_eq!(validate(&events), Err(StructureError::MissingGraphId));
}

#[test]
fn test_missing_graph_name() {
    let events: Vec<GraphEvent> = document(&["a"], vec![])
        .into_iter()
        .filter(|e| !matches!(e, GraphEvent::GraphName(_)))
        .collect();
    assert_eq!(validate(&events), Err(StructureError::MissingGraphName));
}

#[test]
fn test_missing_id_reported_before_missing_name() {
    let events = vec![GraphEvent::NodesStart, node("a"), GraphEvent::NodesEnd];
    assert_eq!(validate(&events), Err(StructureError::MissingGraphId));
}

#[test]
fn test_repeated_graph_id_is_not_flagged() {
    let mut events = document(&["a"], vec![]);
    events.push(GraphEvent::GraphId("again".to_string()));
    events.push(GraphEvent::GraphName("again".to_string()));
    assert_eq!(validate(&events), Ok(()));
}

#[test]
fn test_unclosed_edge_is_checked_at_end() {
    let mut events = header();
    events.extend([
        GraphEvent::NodesStart,
        node("a"),
        GraphEvent::NodesEnd,
        GraphEvent::EdgesStart,
        GraphEvent::EdgeStart,
        GraphEvent::EdgeFrom("a".to_string()),
    ]);
    assert_eq!(validate(&events), Err(StructureError::MissingTo));
}

#[test]
fn test_validator_stops_at_first_violation() {
    // Both a duplicate node and a negative cost; the duplicate comes first
    let events = document(
        &["a", "a"],
        vec![edge(Some("a"), Some("a"), Some(-1.0))],
    );
    assert!(matches!(
        validate(&events),
        Err(StructureError::DuplicateNodeId { .. })
    ));
}

#[test]
fn test_edge_between_groups_is_not_part_of_the_graph() {
    let mut events = header();
    events.extend([GraphEvent::NodesStart, node("a"), GraphEvent::NodesEnd]);
    events.extend(edge(Some("ghost"), Some("a"), Some(1.0)));
    events.extend([GraphEvent::EdgesStart, GraphEvent::EdgesEnd]);

    assert_eq!(validate(&events), Ok(()));

    // What passes validation must also construct
    let description = crate::graph::GraphDescription::from_events(&events);
    assert!(description.edges.is_empty());
    assert!(crate::graph::Graph::new(description).is_ok());
}

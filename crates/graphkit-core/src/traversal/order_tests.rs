//! Tests for the four traversal orders.

use super::{breadth_first, depth_first, first_path, natural, traverse, TraversalKind};
use crate::error::Error;
use crate::graph::{AdjacencyList, AdjacencyMatrix, EdgeMutation, FixedMatrix};

/// Build the alphabet graph: alpha → beta → gamma, alpha → delta → epsilon.
fn build_alphabet() -> AdjacencyList<&'static str, ()> {
    let mut graph: AdjacencyList<&str, ()> = ["alpha", "beta", "gamma", "delta", "epsilon"]
        .into_iter()
        .collect();
    graph.upsert_edge(0, 1, ()).unwrap();
    graph.upsert_edge(1, 2, ()).unwrap();
    graph.upsert_edge(0, 3, ()).unwrap();
    graph.upsert_edge(3, 4, ()).unwrap();
    graph
}

/// Build a diamond graph: 0 → 1, 0 → 2, 1 → 3, 2 → 3
fn build_diamond() -> AdjacencyList<usize, ()> {
    let mut graph: AdjacencyList<usize, ()> = (0..4).collect();
    graph.upsert_edge(0, 1, ()).unwrap();
    graph.upsert_edge(0, 2, ()).unwrap();
    graph.upsert_edge(1, 3, ()).unwrap();
    graph.upsert_edge(2, 3, ()).unwrap();
    graph
}

/// Build a graph with a cycle: 0 → 1 → 2 → 0
fn build_cycle() -> AdjacencyMatrix<usize, ()> {
    let mut graph: AdjacencyMatrix<usize, ()> = (0..3).collect();
    graph.upsert_edge(0, 1, ()).unwrap();
    graph.upsert_edge(1, 2, ()).unwrap();
    graph.upsert_edge(2, 0, ()).unwrap();
    graph
}

// ── Natural order ──────────────────────────────────────────────────

#[test]
fn test_natural_is_index_order() {
    let graph = build_alphabet();
    let order = natural(&graph);
    assert_eq!(order.indices(), &[0, 1, 2, 3, 4]);
    assert_eq!(order.first(), Some(&"alpha"));
    assert_eq!(order.last(), Some(&"epsilon"));
}

#[test]
fn test_natural_empty_graph() {
    let graph: AdjacencyMatrix<(), ()> = AdjacencyMatrix::new();
    let order = natural(&graph);
    assert!(order.is_empty());
    assert_eq!(order.first(), None);
    assert_eq!(order.last(), None);
}

// ── Depth-first ────────────────────────────────────────────────────

#[test]
fn test_dfs_visits_neighbors_in_reverse_reported_order() {
    let graph = build_alphabet();
    let names: Vec<&str> = depth_first(&graph, 0).unwrap().iter().copied().collect();
    // alpha reports [beta, delta]; the stack pops delta first.
    assert_eq!(names, ["alpha", "delta", "epsilon", "beta", "gamma"]);
}

#[test]
fn test_dfs_diamond_visits_once() {
    let graph = build_diamond();
    let order = depth_first(&graph, 0).unwrap();
    assert_eq!(order.indices(), &[0, 2, 3, 1]);
}

#[test]
fn test_dfs_excludes_unreachable() {
    let graph = build_alphabet();
    let order = depth_first(&graph, 3).unwrap();
    assert_eq!(order.indices(), &[3, 4]);
}

#[test]
fn test_dfs_cycle_terminates() {
    let graph = build_cycle();
    let order = depth_first(&graph, 1).unwrap();
    assert_eq!(order.indices(), &[1, 2, 0]);
}

// ── Breadth-first ──────────────────────────────────────────────────

#[test]
fn test_bfs_visits_neighbors_in_reported_order() {
    let graph = build_alphabet();
    let names: Vec<&str> = breadth_first(&graph, 0).unwrap().iter().copied().collect();
    assert_eq!(names, ["alpha", "beta", "delta", "gamma", "epsilon"]);
}

#[test]
fn test_bfs_diamond_discards_duplicate_dequeue() {
    let graph = build_diamond();
    let order = breadth_first(&graph, 0).unwrap();
    // 3 is enqueued from both 1 and 2 but appears once.
    assert_eq!(order.indices(), &[0, 1, 2, 3]);
}

#[test]
fn test_bfs_excludes_unreachable() {
    let graph = build_diamond();
    let order = breadth_first(&graph, 2).unwrap();
    assert_eq!(order.indices(), &[2, 3]);
}

#[test]
fn test_bfs_matrix_reports_ascending() {
    let mut graph: AdjacencyMatrix<usize, ()> = (0..4).collect();
    graph.upsert_edge(0, 3, ()).unwrap();
    graph.upsert_edge(0, 1, ()).unwrap();
    let order = breadth_first(&graph, 0).unwrap();
    assert_eq!(order.indices(), &[0, 1, 3]);
}

// ── Single-path-follow ─────────────────────────────────────────────

#[test]
fn test_first_path_follows_first_neighbor_only() {
    let graph = build_alphabet();
    let names: Vec<&str> = first_path(&graph, 0).unwrap().iter().copied().collect();
    // delta and epsilon are siblings of the followed path and never explored.
    assert_eq!(names, ["alpha", "beta", "gamma"]);
}

#[test]
fn test_first_path_leaf_is_single_element() {
    let graph = build_alphabet();
    let order = first_path(&graph, 4).unwrap();
    assert_eq!(order.indices(), &[4]);
}

#[test]
fn test_first_path_stops_on_cycle() {
    let graph = build_cycle();
    let order = first_path(&graph, 0).unwrap();
    assert_eq!(order.indices(), &[0, 1, 2]);
}

#[test]
fn test_first_path_self_loop() {
    let mut graph: FixedMatrix<(), (), 1> = FixedMatrix::new();
    graph.upsert_edge(0, 0, ()).unwrap();
    let order = first_path(&graph, 0).unwrap();
    assert_eq!(order.indices(), &[0]);
}

// ── Errors and dispatch ────────────────────────────────────────────

#[test]
fn test_start_out_of_range() {
    let graph = build_alphabet();
    let expected = Error::VertexOutOfRange { index: 9, len: 5 };
    assert_eq!(depth_first(&graph, 9).unwrap_err(), expected);
    assert_eq!(breadth_first(&graph, 9).unwrap_err(), expected);
    assert_eq!(first_path(&graph, 9).unwrap_err(), expected);
}

#[test]
fn test_empty_graph_start_fails() {
    let graph: AdjacencyList<(), ()> = AdjacencyList::new();
    assert!(depth_first(&graph, 0).is_err());
    assert!(traverse(&graph, TraversalKind::Natural, 0).unwrap().is_empty());
}

#[test]
fn test_traverse_matches_direct_producers() {
    let graph = build_alphabet();
    assert_eq!(
        traverse(&graph, TraversalKind::DepthFirst, 0).unwrap().indices(),
        depth_first(&graph, 0).unwrap().indices()
    );
    assert_eq!(
        traverse(&graph, TraversalKind::BreadthFirst, 0).unwrap().indices(),
        breadth_first(&graph, 0).unwrap().indices()
    );
    assert_eq!(
        traverse(&graph, TraversalKind::FirstPath, 0).unwrap().indices(),
        first_path(&graph, 0).unwrap().indices()
    );
    // Natural ignores the start vertex, even an invalid one.
    assert_eq!(
        traverse(&graph, TraversalKind::Natural, 42).unwrap().indices(),
        natural(&graph).indices()
    );
}

#[test]
fn test_traversal_kind_parse_and_display() {
    for kind in TraversalKind::ALL {
        assert_eq!(kind.to_string().parse::<TraversalKind>().unwrap(), kind);
    }
    assert_eq!(
        "Depth-First".parse::<TraversalKind>().unwrap(),
        TraversalKind::DepthFirst
    );
    assert!("sideways".parse::<TraversalKind>().is_err());
    assert!(!TraversalKind::Natural.needs_start());
    assert!(TraversalKind::FirstPath.needs_start());
}

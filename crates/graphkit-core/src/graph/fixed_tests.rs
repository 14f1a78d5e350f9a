//! Tests for FixedMatrix.

use super::fixed::FixedMatrix;
use super::{EdgeMutation, Graph};
use crate::error::Error;

#[test]
fn test_default_vertices() {
    let graph: FixedMatrix<i32, (), 3> = FixedMatrix::new();
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.vertices(), &[0, 0, 0]);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_assign_vertices_in_place() {
    let mut graph: FixedMatrix<String, (), 2> = FixedMatrix::from_fn(|i| format!("v{i}"));
    *graph.vertex_mut(1).unwrap() = "root".to_string();

    assert_eq!(graph.vertex(0).unwrap(), "v0");
    assert_eq!(graph.vertex(1).unwrap(), "root");
    assert_eq!(
        graph.vertex(2).unwrap_err(),
        Error::VertexOutOfRange { index: 2, len: 2 }
    );
}

#[test]
fn test_edges_round_trip() {
    let mut graph: FixedMatrix<char, u8, 3> = FixedMatrix::from_vertices(['a', 'b', 'c']);
    graph.upsert_edge(0, 2, 7).unwrap();
    graph.upsert_edge(0, 1, 5).unwrap();

    assert_eq!(graph.neighbors(0).unwrap(), vec![1, 2]);
    assert_eq!(*graph.edge(0, 2).unwrap(), 7);

    graph.upsert_edge(0, 2, 9).unwrap();
    assert_eq!(*graph.edge(0, 2).unwrap(), 9);

    assert_eq!(graph.remove_edge(0, 2).unwrap(), Some(9));
    assert!(!graph.has_edge(0, 2).unwrap());
    assert_eq!(graph.remove_edge(0, 2).unwrap(), None);
}

#[test]
fn test_edge_out_of_range() {
    let mut graph: FixedMatrix<(), (), 2> = FixedMatrix::new();
    assert!(graph.upsert_edge(0, 2, ()).is_err());
    assert!(graph.neighbors(2).is_err());
    assert!(graph.edge_mut(1, 1).is_err());
}

#[test]
fn test_zero_sized_graph() {
    let graph: FixedMatrix<(), (), 0> = FixedMatrix::new();
    assert!(graph.is_empty());
    assert!(graph.vertex(0).is_err());
}

//! Graph capability contract and storage backends.
//!
//! Any storage that implements [`Graph`] can be traversed and wrapped by the
//! adapters. Mutation is split into [`EdgeMutation`] and [`VertexMutation`] so
//! that fixed-shape storage can opt out of vertex insertion and removal while
//! still sharing the same signatures as the dynamic backends.
//!
//! # Example
//!
//! ```rust
//! use graphkit_core::graph::{AdjacencyList, EdgeMutation, Graph, VertexMutation};
//!
//! let mut graph: AdjacencyList<&str, ()> = AdjacencyList::new();
//! graph.insert_vertex(0, "alpha").unwrap();
//! graph.insert_vertex(1, "beta").unwrap();
//! graph.upsert_edge(0, 1, ()).unwrap();
//!
//! assert_eq!(graph.vertex_count(), 2);
//! assert!(graph.has_edge(0, 1).unwrap());
//! assert!(!graph.has_edge(1, 0).unwrap());
//! assert_eq!(graph.neighbors(0).unwrap(), vec![1]);
//! ```

mod fixed;
mod list;
mod matrix;

#[cfg(test)]
mod fixed_tests;

pub use fixed::FixedMatrix;
pub use list::AdjacencyList;
pub use matrix::AdjacencyMatrix;

use crate::error::{Error, Result};

/// Read and in-place access operations every storage backend exposes.
///
/// Vertices are addressed by dense indices `0..vertex_count()`. Edges are
/// directed and addressed by the ordered pair `(from, to)`; `(x, y)` and
/// `(y, x)` are independent.
pub trait Graph {
    /// Value stored at each vertex.
    type Vertex;
    /// Payload stored at each edge.
    type Edge;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the vertex value at `index`.
    fn vertex(&self, index: usize) -> Result<&Self::Vertex>;

    /// Returns a mutable reference to the vertex value at `index`.
    fn vertex_mut(&mut self, index: usize) -> Result<&mut Self::Vertex>;

    /// Returns the outgoing neighbor indices of `index`, in the backend's
    /// reporting order.
    fn neighbors(&self, index: usize) -> Result<Vec<usize>>;

    /// Returns `true` if an edge `(from, to)` exists.
    fn has_edge(&self, from: usize, to: usize) -> Result<bool>;

    /// Returns the payload of edge `(from, to)`.
    ///
    /// Fails with [`Error::EdgeNotFound`] if the edge is absent.
    fn edge(&self, from: usize, to: usize) -> Result<&Self::Edge>;

    /// Returns a mutable reference to the payload of edge `(from, to)`.
    ///
    /// Fails with [`Error::EdgeNotFound`] if the edge is absent.
    fn edge_mut(&mut self, from: usize, to: usize) -> Result<&mut Self::Edge>;

    /// Returns `true` if the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Returns the first neighbor `neighbors(index)` would report, if any.
    fn first_neighbor(&self, index: usize) -> Result<Option<usize>> {
        Ok(self.neighbors(index)?.first().copied())
    }

    /// Returns the total number of edges.
    fn edge_count(&self) -> usize {
        (0..self.vertex_count())
            .map(|index| self.neighbors(index).map_or(0, |n| n.len()))
            .sum()
    }
}

/// Edge creation and removal.
pub trait EdgeMutation: Graph {
    /// Inserts edge `(from, to)` or overwrites the payload of an existing one.
    fn upsert_edge(&mut self, from: usize, to: usize, payload: Self::Edge)
        -> Result<&mut Self::Edge>;

    /// Removes edge `(from, to)`, returning its payload.
    ///
    /// Removing an absent edge is a no-op that returns `Ok(None)`.
    fn remove_edge(&mut self, from: usize, to: usize) -> Result<Option<Self::Edge>>;
}

/// Vertex insertion and removal with index renumbering.
pub trait VertexMutation: Graph {
    /// Inserts `value` at `index`, shifting every vertex at `index..` up by one.
    ///
    /// `index` may equal `vertex_count()` to append.
    fn insert_vertex(&mut self, index: usize, value: Self::Vertex) -> Result<&mut Self::Vertex>;

    /// Removes the vertex at `index` together with every edge referencing it,
    /// shifting every vertex above `index` down by one.
    fn remove_vertex(&mut self, index: usize) -> Result<Self::Vertex>;

    /// Appends `value` and returns its index.
    fn push_vertex(&mut self, value: Self::Vertex) -> Result<usize> {
        let index = self.vertex_count();
        self.insert_vertex(index, value)?;
        Ok(index)
    }
}

/// Fails with [`Error::VertexOutOfRange`] unless `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::out_of_range(index, len))
    }
}

/// Fails unless both ends of `(from, to)` are below `len`.
pub(crate) fn check_pair(from: usize, to: usize, len: usize) -> Result<()> {
    check_index(from, len)?;
    check_index(to, len)
}

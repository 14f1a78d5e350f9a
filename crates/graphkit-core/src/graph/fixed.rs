//! Dense adjacency matrix with a vertex count fixed at compile time.
//!
//! Suited to known-shape structures such as composite trees: vertices can be
//! reassigned in place but never inserted or removed, so only [`Graph`] and
//! [`EdgeMutation`] are implemented.

use crate::error::{Error, Result};

use super::{check_index, check_pair, EdgeMutation, Graph};

/// Fixed-size dense matrix storage holding exactly `N` vertices.
///
/// Neighbors are reported in ascending index order.
#[derive(Debug, Clone)]
pub struct FixedMatrix<V, E, const N: usize> {
    vertices: [V; N],
    edges: [[Option<E>; N]; N],
}

impl<V, E, const N: usize> FixedMatrix<V, E, N> {
    /// Creates a matrix from `N` vertex values and no edges.
    #[must_use]
    pub fn from_vertices(vertices: [V; N]) -> Self {
        Self {
            vertices,
            edges: std::array::from_fn(|_| std::array::from_fn(|_| None)),
        }
    }

    /// Creates a matrix whose vertex `i` holds `init(i)`, with no edges.
    #[must_use]
    pub fn from_fn(init: impl FnMut(usize) -> V) -> Self {
        Self::from_vertices(std::array::from_fn(init))
    }

    /// Returns all vertex values in index order.
    #[must_use]
    pub fn vertices(&self) -> &[V; N] {
        &self.vertices
    }
}

impl<V: Default, E, const N: usize> FixedMatrix<V, E, N> {
    /// Creates a matrix of `N` default vertices and no edges.
    #[must_use]
    pub fn new() -> Self {
        Self::from_fn(|_| V::default())
    }
}

impl<V: Default, E, const N: usize> Default for FixedMatrix<V, E, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, const N: usize> Graph for FixedMatrix<V, E, N> {
    type Vertex = V;
    type Edge = E;

    fn vertex_count(&self) -> usize {
        N
    }

    fn vertex(&self, index: usize) -> Result<&V> {
        self.vertices
            .get(index)
            .ok_or_else(|| Error::out_of_range(index, N))
    }

    fn vertex_mut(&mut self, index: usize) -> Result<&mut V> {
        self.vertices
            .get_mut(index)
            .ok_or_else(|| Error::out_of_range(index, N))
    }

    fn neighbors(&self, index: usize) -> Result<Vec<usize>> {
        check_index(index, N)?;
        Ok(self.edges[index]
            .iter()
            .enumerate()
            .filter_map(|(to, slot)| slot.as_ref().map(|_| to))
            .collect())
    }

    fn has_edge(&self, from: usize, to: usize) -> Result<bool> {
        check_pair(from, to, N)?;
        Ok(self.edges[from][to].is_some())
    }

    fn edge(&self, from: usize, to: usize) -> Result<&E> {
        check_pair(from, to, N)?;
        self.edges[from][to]
            .as_ref()
            .ok_or(Error::EdgeNotFound { from, to })
    }

    fn edge_mut(&mut self, from: usize, to: usize) -> Result<&mut E> {
        check_pair(from, to, N)?;
        self.edges[from][to]
            .as_mut()
            .ok_or(Error::EdgeNotFound { from, to })
    }

    fn edge_count(&self) -> usize {
        self.edges.iter().flatten().filter(|slot| slot.is_some()).count()
    }
}

impl<V, E, const N: usize> EdgeMutation for FixedMatrix<V, E, N> {
    fn upsert_edge(&mut self, from: usize, to: usize, payload: E) -> Result<&mut E> {
        check_pair(from, to, N)?;
        Ok(self.edges[from][to].insert(payload))
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> Result<Option<E>> {
        check_pair(from, to, N)?;
        Ok(self.edges[from][to].take())
    }
}

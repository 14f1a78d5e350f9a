//! Dense adjacency matrix with a dynamic vertex count.
//!
//! Every possible edge slot is materialized, so edge lookup is O(1) at the
//! cost of O(V²) memory. Inserting or removing a vertex shifts a whole row and
//! one column slot per remaining row.

use crate::error::{Error, Result};

use super::{check_index, check_pair, EdgeMutation, Graph, VertexMutation};

/// Dense matrix storage supporting insertion and removal at any index.
///
/// Neighbors are reported in ascending index order.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<V, E> {
    /// Vertex values, addressed by index.
    vertices: Vec<V>,
    /// `edges[from][to]` holds the payload of edge `(from, to)`, if present.
    edges: Vec<Vec<Option<E>>>,
}

impl<V, E> Default for AdjacencyMatrix<V, E> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<V, E> AdjacencyMatrix<V, E> {
    /// Creates an empty matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty matrix with room for `vertices` vertices.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(vertices),
        }
    }

    /// Returns all vertex values in index order.
    #[must_use]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }
}

impl<V, E> FromIterator<V> for AdjacencyMatrix<V, E> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let vertices: Vec<V> = iter.into_iter().collect();
        let len = vertices.len();
        let edges = (0..len)
            .map(|_| std::iter::repeat_with(|| None).take(len).collect())
            .collect();
        Self { vertices, edges }
    }
}

impl<V, E> Graph for AdjacencyMatrix<V, E> {
    type Vertex = V;
    type Edge = E;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex(&self, index: usize) -> Result<&V> {
        let len = self.vertices.len();
        self.vertices
            .get(index)
            .ok_or_else(|| Error::out_of_range(index, len))
    }

    fn vertex_mut(&mut self, index: usize) -> Result<&mut V> {
        let len = self.vertices.len();
        self.vertices
            .get_mut(index)
            .ok_or_else(|| Error::out_of_range(index, len))
    }

    fn neighbors(&self, index: usize) -> Result<Vec<usize>> {
        check_index(index, self.vertices.len())?;
        Ok(self.edges[index]
            .iter()
            .enumerate()
            .filter_map(|(to, slot)| slot.as_ref().map(|_| to))
            .collect())
    }

    fn has_edge(&self, from: usize, to: usize) -> Result<bool> {
        check_pair(from, to, self.vertices.len())?;
        Ok(self.edges[from][to].is_some())
    }

    fn edge(&self, from: usize, to: usize) -> Result<&E> {
        check_pair(from, to, self.vertices.len())?;
        self.edges[from][to]
            .as_ref()
            .ok_or(Error::EdgeNotFound { from, to })
    }

    fn edge_mut(&mut self, from: usize, to: usize) -> Result<&mut E> {
        check_pair(from, to, self.vertices.len())?;
        self.edges[from][to]
            .as_mut()
            .ok_or(Error::EdgeNotFound { from, to })
    }

    fn edge_count(&self) -> usize {
        self.edges.iter().flatten().filter(|slot| slot.is_some()).count()
    }
}

impl<V, E> EdgeMutation for AdjacencyMatrix<V, E> {
    fn upsert_edge(&mut self, from: usize, to: usize, payload: E) -> Result<&mut E> {
        check_pair(from, to, self.vertices.len())?;
        Ok(self.edges[from][to].insert(payload))
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> Result<Option<E>> {
        check_pair(from, to, self.vertices.len())?;
        Ok(self.edges[from][to].take())
    }
}

impl<V, E> VertexMutation for AdjacencyMatrix<V, E> {
    fn insert_vertex(&mut self, index: usize, value: V) -> Result<&mut V> {
        let len = self.vertices.len();
        if index > len {
            return Err(Error::out_of_range(index, len));
        }

        self.vertices.insert(index, value);
        for row in &mut self.edges {
            row.insert(index, None);
        }
        let row = std::iter::repeat_with(|| None).take(len + 1).collect();
        self.edges.insert(index, row);

        Ok(&mut self.vertices[index])
    }

    fn remove_vertex(&mut self, index: usize) -> Result<V> {
        check_index(index, self.vertices.len())?;

        self.edges.remove(index);
        for row in &mut self.edges {
            row.remove(index);
        }
        Ok(self.vertices.remove(index))
    }
}

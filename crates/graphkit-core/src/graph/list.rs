//! Sparse adjacency list storage.
//!
//! Each vertex owns a list of `(target, payload)` pairs sized to its actual
//! out-degree. Neighbors are reported in the order their edges were first
//! inserted.

use crate::error::{Error, Result};

use super::{check_index, check_pair, EdgeMutation, Graph, VertexMutation};

/// Adjacency list storage with O(V + E) memory and O(degree) edge lookup.
#[derive(Debug, Clone)]
pub struct AdjacencyList<V, E> {
    /// Vertex values, addressed by index.
    vertices: Vec<V>,
    /// Outgoing edges: `edges[from]` lists `(to, payload)` in insertion order.
    edges: Vec<Vec<(usize, E)>>,
}

impl<V, E> Default for AdjacencyList<V, E> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<V, E> AdjacencyList<V, E> {
    /// Creates an empty adjacency list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty adjacency list with room for `vertices` vertices.
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

    /// Returns the out-degree of `index`.
    pub fn out_degree(&self, index: usize) -> Result<usize> {
        check_index(index, self.vertices.len())?;
        Ok(self.edges[index].len())
    }

    fn position(&self, from: usize, to: usize) -> Option<usize> {
        self.edges[from].iter().position(|(target, _)| *target == to)
    }
}

impl<V, E> FromIterator<V> for AdjacencyList<V, E> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let vertices: Vec<V> = iter.into_iter().collect();
        let edges = std::iter::repeat_with(Vec::new)
            .take(vertices.len())
            .collect();
        Self { vertices, edges }
    }
}

impl<V, E> Graph for AdjacencyList<V, E> {
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
        Ok(self.edges[index].iter().map(|(to, _)| *to).collect())
    }

    fn has_edge(&self, from: usize, to: usize) -> Result<bool> {
        check_pair(from, to, self.vertices.len())?;
        Ok(self.position(from, to).is_some())
    }

    fn edge(&self, from: usize, to: usize) -> Result<&E> {
        check_pair(from, to, self.vertices.len())?;
        self.edges[from]
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, payload)| payload)
            .ok_or(Error::EdgeNotFound { from, to })
    }

    fn edge_mut(&mut self, from: usize, to: usize) -> Result<&mut E> {
        check_pair(from, to, self.vertices.len())?;
        self.edges[from]
            .iter_mut()
            .find(|(target, _)| *target == to)
            .map(|(_, payload)| payload)
            .ok_or(Error::EdgeNotFound { from, to })
    }

    fn first_neighbor(&self, index: usize) -> Result<Option<usize>> {
        check_index(index, self.vertices.len())?;
        Ok(self.edges[index].first().map(|(to, _)| *to))
    }

    fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }
}

impl<V, E> EdgeMutation for AdjacencyList<V, E> {
    fn upsert_edge(&mut self, from: usize, to: usize, payload: E) -> Result<&mut E> {
        check_pair(from, to, self.vertices.len())?;

        // An overwritten edge keeps its slot in the neighbor order.
        let slot = match self.position(from, to) {
            Some(slot) => {
                self.edges[from][slot].1 = payload;
                slot
            }
            None => {
                self.edges[from].push((to, payload));
                self.edges[from].len() - 1
            }
        };
        Ok(&mut self.edges[from][slot].1)
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> Result<Option<E>> {
        check_pair(from, to, self.vertices.len())?;
        Ok(self
            .position(from, to)
            .map(|slot| self.edges[from].remove(slot).1))
    }
}

impl<V, E> VertexMutation for AdjacencyList<V, E> {
    fn insert_vertex(&mut self, index: usize, value: V) -> Result<&mut V> {
        let len = self.vertices.len();
        if index > len {
            return Err(Error::out_of_range(index, len));
        }

        for (to, _) in self.edges.iter_mut().flatten() {
            if *to >= index {
                *to += 1;
            }
        }
        self.vertices.insert(index, value);
        self.edges.insert(index, Vec::new());

        Ok(&mut self.vertices[index])
    }

    fn remove_vertex(&mut self, index: usize) -> Result<V> {
        check_index(index, self.vertices.len())?;

        self.edges.remove(index);
        for list in &mut self.edges {
            list.retain(|(to, _)| *to != index);
            for (to, _) in list.iter_mut() {
                if *to > index {
                    *to -= 1;
                }
            }
        }
        Ok(self.vertices.remove(index))
    }
}

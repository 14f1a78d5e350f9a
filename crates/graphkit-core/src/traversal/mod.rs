//! Traversal producers over any [`Graph`].
//!
//! Every producer walks the graph once and materializes the visited indices,
//! returning a [`Traversal`]: an ordered, randomly indexable sequence of
//! vertex references that can be iterated from either end. The sequence
//! borrows the graph, so the graph cannot be mutated while it is alive.
//!
//! | Producer | Order |
//! |----------|-------|
//! | [`natural`] | `0..N` |
//! | [`depth_first`] | stack order: neighbors visited in reverse of their reported order |
//! | [`breadth_first`] | queue order: neighbors visited in reported order |
//! | [`first_path`] | start, then the first neighbor of each vertex until none |
//!
//! # Example
//!
//! ```rust
//! use graphkit_core::graph::{AdjacencyList, EdgeMutation};
//! use graphkit_core::traversal::{breadth_first, depth_first};
//!
//! let mut graph: AdjacencyList<&str, ()> = ["a", "b", "c"].into_iter().collect();
//! graph.upsert_edge(0, 1, ()).unwrap();
//! graph.upsert_edge(0, 2, ()).unwrap();
//!
//! let bfs: Vec<&str> = breadth_first(&graph, 0).unwrap().iter().copied().collect();
//! assert_eq!(bfs, ["a", "b", "c"]);
//!
//! let dfs: Vec<&str> = depth_first(&graph, 0).unwrap().iter().copied().collect();
//! assert_eq!(dfs, ["a", "c", "b"]);
//! ```

mod kind;
mod order;

#[cfg(test)]
mod order_tests;

pub use kind::TraversalKind;

use std::fmt;

use crate::error::Result;
use crate::graph::Graph;

/// A materialized traversal: the borrowed graph plus the visited indices.
pub struct Traversal<'g, G: ?Sized> {
    graph: &'g G,
    order: Vec<usize>,
}

impl<'g, G: Graph + ?Sized> Traversal<'g, G> {
    fn new(graph: &'g G, order: Vec<usize>) -> Self {
        Self { graph, order }
    }

    /// Returns the traversed graph.
    #[must_use]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Returns the number of visited vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no vertex was visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the visited vertex indices in traversal order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the traversal, returning the visited indices.
    #[must_use]
    pub fn into_indices(self) -> Vec<usize> {
        self.order
    }

    /// Returns the vertex index at position `pos` of the sequence.
    #[must_use]
    pub fn index_at(&self, pos: usize) -> Option<usize> {
        self.order.get(pos).copied()
    }

    /// Returns the vertex value at position `pos` of the sequence.
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<&'g G::Vertex> {
        let graph = self.graph;
        self.index_at(pos)
            .and_then(|index| graph.vertex(index).ok())
    }

    /// Returns the first visited vertex value.
    #[must_use]
    pub fn first(&self) -> Option<&'g G::Vertex> {
        self.get(0)
    }

    /// Returns the last visited vertex value.
    #[must_use]
    pub fn last(&self) -> Option<&'g G::Vertex> {
        self.len().checked_sub(1).and_then(|pos| self.get(pos))
    }

    /// Iterates over the visited vertex values. Supports `.rev()`.
    pub fn iter(&self) -> Iter<'_, 'g, G> {
        Iter {
            graph: self.graph,
            indices: self.order.iter(),
        }
    }

    /// Iterates over `(index, value)` pairs in traversal order.
    pub fn iter_indexed(&self) -> impl DoubleEndedIterator<Item = (usize, &'g G::Vertex)> + '_ {
        let graph = self.graph;
        self.order
            .iter()
            .filter_map(move |&index| graph.vertex(index).ok().map(|value| (index, value)))
    }
}

impl<G: ?Sized> Clone for Traversal<'_, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            order: self.order.clone(),
        }
    }
}

impl<G: ?Sized> fmt::Debug for Traversal<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

impl<'t, 'g, G: Graph + ?Sized> IntoIterator for &'t Traversal<'g, G> {
    type Item = &'g G::Vertex;
    type IntoIter = Iter<'t, 'g, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Double-ended iterator over the vertex values of a [`Traversal`].
pub struct Iter<'t, 'g, G: ?Sized> {
    graph: &'g G,
    indices: std::slice::Iter<'t, usize>,
}

impl<'g, G: Graph + ?Sized> Iterator for Iter<'_, 'g, G> {
    type Item = &'g G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let index = *self.indices.next()?;
        self.graph.vertex(index).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<G: Graph + ?Sized> DoubleEndedIterator for Iter<'_, '_, G> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = *self.indices.next_back()?;
        self.graph.vertex(index).ok()
    }
}

impl<G: Graph + ?Sized> ExactSizeIterator for Iter<'_, '_, G> {}

/// Visits every vertex in index order `0..N`.
#[must_use]
pub fn natural<G: Graph + ?Sized>(graph: &G) -> Traversal<'_, G> {
    Traversal::new(graph, order::natural_order(graph))
}

/// Depth-first traversal from `start`; unreachable vertices are excluded.
pub fn depth_first<G: Graph + ?Sized>(graph: &G, start: usize) -> Result<Traversal<'_, G>> {
    Ok(Traversal::new(graph, order::depth_first_order(graph, start)?))
}

/// Breadth-first traversal from `start`; unreachable vertices are excluded.
pub fn breadth_first<G: Graph + ?Sized>(graph: &G, start: usize) -> Result<Traversal<'_, G>> {
    Ok(Traversal::new(graph, order::breadth_first_order(graph, start)?))
}

/// Single-path traversal from `start`, following only the first neighbor of
/// each vertex. Intended for chain-shaped graphs: branches are truncated.
pub fn first_path<G: Graph + ?Sized>(graph: &G, start: usize) -> Result<Traversal<'_, G>> {
    Ok(Traversal::new(graph, order::first_path_order(graph, start)?))
}

/// Runs the traversal selected by `kind`. `start` is ignored by
/// [`TraversalKind::Natural`].
pub fn traverse<G: Graph + ?Sized>(
    graph: &G,
    kind: TraversalKind,
    start: usize,
) -> Result<Traversal<'_, G>> {
    Ok(Traversal::new(graph, compute_order(graph, kind, start)?))
}

fn compute_order<G: Graph + ?Sized>(
    graph: &G,
    kind: TraversalKind,
    start: usize,
) -> Result<Vec<usize>> {
    match kind {
        TraversalKind::Natural => Ok(order::natural_order(graph)),
        TraversalKind::DepthFirst => order::depth_first_order(graph, start),
        TraversalKind::BreadthFirst => order::breadth_first_order(graph, start),
        TraversalKind::FirstPath => order::first_path_order(graph, start),
    }
}

/// A materialized traversal holding the graph mutably, for in-place updates
/// of the visited vertices.
pub struct TraversalMut<'g, G: ?Sized> {
    graph: &'g mut G,
    order: Vec<usize>,
}

impl<'g, G: Graph + ?Sized> TraversalMut<'g, G> {
    /// Computes the `kind` traversal from `start` over `graph`.
    pub fn new(graph: &'g mut G, kind: TraversalKind, start: usize) -> Result<Self> {
        let order = compute_order(&*graph, kind, start)?;
        Ok(Self { graph, order })
    }

    /// Returns the number of visited vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no vertex was visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the visited vertex indices in traversal order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.order
    }

    /// Returns the vertex value at position `pos` of the sequence.
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut G::Vertex> {
        let index = *self.order.get(pos)?;
        self.graph.vertex_mut(index).ok()
    }

    /// Calls `f` with each visited index and its vertex value, in order.
    pub fn for_each_mut<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(usize, &mut G::Vertex),
    {
        for &index in &self.order {
            f(index, self.graph.vertex_mut(index)?);
        }
        Ok(())
    }
}

impl<G: ?Sized> fmt::Debug for TraversalMut<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraversalMut")
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

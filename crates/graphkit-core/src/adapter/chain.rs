//! Responsibility chain: a graph read as a linear chain of handlers.

use std::fmt;

use crate::error::Result;
use crate::graph::{check_index, Graph};
use crate::traversal;

/// Passes a value along a chain of handlers until one accepts it.
///
/// Each vertex holds a handler returning `true` when it handled the value.
/// The chain is the single path from the root that follows the first
/// neighbor of every vertex; any sibling edges are ignored.
pub struct Chain<'g, G: ?Sized> {
    graph: &'g G,
    root: usize,
}

impl<G: ?Sized> fmt::Debug for Chain<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl<'g, G: Graph + ?Sized> Chain<'g, G> {
    /// Wraps `graph` with the chain starting at `root`.
    pub fn new(graph: &'g G, root: usize) -> Result<Self> {
        check_index(root, graph.vertex_count())?;
        Ok(Self { graph, root })
    }

    /// Returns the root vertex index.
    #[must_use]
    pub fn root(&self) -> usize {
        self.root
    }

    /// Offers a clone of `value` to each handler in chain order, stopping
    /// after the first one that returns `true`.
    ///
    /// Returns the vertex index of the accepting handler, or `None` when every
    /// handler declined. Declining is not an error.
    pub fn invoke<T>(&self, value: T) -> Result<Option<usize>>
    where
        T: Clone,
        G::Vertex: Fn(T) -> bool,
    {
        let chain = traversal::first_path(self.graph, self.root)?;
        let handled_by = chain
            .iter_indexed()
            .find_map(|(index, handler)| handler(value.clone()).then_some(index));

        match handled_by {
            Some(index) => tracing::trace!(root = self.root, handler = index, "chain handled"),
            None => tracing::debug!(
                root = self.root,
                handlers = chain.len(),
                "no handler in chain accepted the value"
            ),
        }
        Ok(handled_by)
    }
}

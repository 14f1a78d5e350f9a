//! Composite broadcast: a graph read as a rooted containment tree.
//!
//! Vertices hold single-argument components and edges encode parent → child
//! containment (their payload is ignored). A call is broadcast by running a
//! breadth-first traversal from the root and invoking the components in
//! reverse of that order, so deeper vertices run before shallower ones and
//! the root runs last.
//!
//! Reverse breadth-first order equals children-before-parent order only for
//! simple trees. With shared descendants or cross edges a vertex is invoked
//! once, at the position of its first discovery, which may precede one of its
//! parents.

use std::fmt;

use crate::error::Result;
use crate::graph::{check_index, Graph};
use crate::traversal;

/// Broadcasts calls across a containment tree, bottom-up.
pub struct Broadcast<'g, G: ?Sized> {
    graph: &'g G,
    root: usize,
}

impl<G: ?Sized> fmt::Debug for Broadcast<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcast")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl<'g, G: Graph + ?Sized> Broadcast<'g, G> {
    /// Wraps `graph` with `root` as the top of the containment tree.
    pub fn new(graph: &'g G, root: usize) -> Result<Self> {
        check_index(root, graph.vertex_count())?;
        Ok(Self { graph, root })
    }

    /// Returns the root vertex index.
    #[must_use]
    pub fn root(&self) -> usize {
        self.root
    }

    /// Invokes every component reachable from the root with a clone of
    /// `value`, deepest-discovered first and the root last.
    ///
    /// Returns the number of components invoked.
    pub fn invoke<T>(&self, value: T) -> Result<usize>
    where
        T: Clone,
        G::Vertex: Fn(T),
    {
        let order = traversal::breadth_first(self.graph, self.root)?;
        for component in order.iter().rev() {
            component(value.clone());
        }

        tracing::debug!(root = self.root, invoked = order.len(), "broadcast complete");
        Ok(order.len())
    }
}

//! Type-pair dispatch: a graph read as a two-argument dispatch table.
//!
//! Each vertex holds the tag of one participating type. The edge `(x, y)`
//! holds the handler for arguments whose tags sit at vertices `x` and `y`.
//! Pairs are ordered, so `(Cat, Dog)` and `(Dog, Cat)` are separate overloads.

use std::fmt::{self, Debug};

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::traversal;

/// A value that can name its own type with an explicit, comparable tag.
///
/// Types register for dispatch by implementing this trait; the graph stores
/// one vertex per tag.
pub trait Tagged {
    /// The tag type, usually a fieldless enum.
    type Tag: PartialEq + Debug;

    /// Returns the tag of this value's type.
    fn type_tag(&self) -> Self::Tag;
}

/// Dispatches two-argument calls on the tags of both arguments.
pub struct PairDispatch<'g, G: ?Sized> {
    graph: &'g G,
}

impl<G: ?Sized> Debug for PairDispatch<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairDispatch").finish_non_exhaustive()
    }
}

impl<G: ?Sized> Clone for PairDispatch<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ?Sized> Copy for PairDispatch<'_, G> {}

impl<'g, G> PairDispatch<'g, G>
where
    G: Graph + ?Sized,
    G::Vertex: PartialEq + Debug,
{
    /// Wraps `graph` as a dispatch table.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Returns the vertex index registered for `tag`.
    ///
    /// Scans the vertices in natural order; fails with
    /// [`Error::TypeNotRegistered`] if no vertex holds `tag`.
    pub fn resolve(&self, tag: &G::Vertex) -> Result<usize> {
        traversal::natural(self.graph)
            .iter_indexed()
            .find_map(|(index, registered)| (registered == tag).then_some(index))
            .ok_or_else(|| Error::TypeNotRegistered(format!("{tag:?}")))
    }

    /// Returns `true` if a handler exists for the ordered pair of tags.
    pub fn has_overload(&self, first: &G::Vertex, second: &G::Vertex) -> Result<bool> {
        let from = self.resolve(first)?;
        let to = self.resolve(second)?;
        self.graph.has_edge(from, to)
    }

    /// Calls the handler registered for the tags of `(first, second)`.
    ///
    /// Fails with [`Error::TypeNotRegistered`] if either tag has no vertex and
    /// with [`Error::NoOverload`] if the ordered pair has no edge.
    pub fn invoke<A, R>(&self, first: &A, second: &A) -> Result<R>
    where
        A: Tagged<Tag = G::Vertex> + ?Sized,
        G::Edge: Fn(&A, &A) -> R,
    {
        let first_tag = first.type_tag();
        let second_tag = second.type_tag();
        let from = self.resolve(&first_tag)?;
        let to = self.resolve(&second_tag)?;

        if !self.graph.has_edge(from, to)? {
            return Err(Error::NoOverload {
                first: format!("{first_tag:?}"),
                second: format!("{second_tag:?}"),
            });
        }

        tracing::trace!(from, to, "dispatching to pair handler");
        let handler = self.graph.edge(from, to)?;
        Ok(handler(first, second))
    }
}

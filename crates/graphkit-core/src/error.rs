//! Error types for graphkit-core.

use thiserror::Error;

/// Graph toolkit error types.
///
/// Every failure is raised at the point of violation and aborts only the
/// call in progress. Nothing is rolled back: whatever an invoked callable
/// already did stays done.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex index (or one end of an edge pair) lies outside the graph.
    #[error("Vertex index {index} out of range (vertex count: {len})")]
    VertexOutOfRange {
        /// The offending index.
        index: usize,
        /// Vertex count at the time of the access.
        len: usize,
    },

    /// The edge payload at `(from, to)` was requested but no edge exists.
    #[error("No edge from vertex {from} to vertex {to}")]
    EdgeNotFound {
        /// Source vertex index.
        from: usize,
        /// Target vertex index.
        to: usize,
    },

    /// A dispatch argument carries a type tag that has no vertex.
    #[error("Type error: argument of unregistered type {0} passed to dispatch")]
    TypeNotRegistered(String),

    /// Both dispatch arguments resolved but no edge exists for the ordered pair.
    #[error("Type error: dispatch has no overload for ({first}, {second})")]
    NoOverload {
        /// Tag of the first argument.
        first: String,
        /// Tag of the second argument.
        second: String,
    },

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Builds a [`Error::VertexOutOfRange`] for `index` against `len` vertices.
    #[must_use]
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::VertexOutOfRange { index, len }
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

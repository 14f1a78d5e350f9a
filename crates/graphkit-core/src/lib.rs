//! # graphkit-core
//!
//! Generic directed graphs with interchangeable storage, traversal producers,
//! and adapters that turn a graph's contents into call semantics.
//!
//! ## Features
//!
//! - **One contract, three backends**: [`AdjacencyMatrix`] (dense, dynamic),
//!   [`AdjacencyList`] (sparse, dynamic) and [`FixedMatrix`] (dense,
//!   compile-time size) all implement [`Graph`]
//! - **Traversals**: natural, depth-first, breadth-first and single-path
//!   orders, materialized as borrowed sequences
//! - **Adapters**: two-argument type dispatch, composite broadcast and
//!   responsibility chains driven by graph structure
//! - **Layered configuration**: defaults, TOML file and environment via
//!   `figment`
//!
//! ## Quick Start
//!
//! ```rust
//! use graphkit_core::{depth_first, AdjacencyList, EdgeMutation};
//!
//! let mut graph: AdjacencyList<&str, ()> = ["alpha", "beta", "gamma"].into_iter().collect();
//! graph.upsert_edge(0, 1, ())?;
//! graph.upsert_edge(1, 2, ())?;
//!
//! let names: Vec<&str> = depth_first(&graph, 0)?.iter().copied().collect();
//! assert_eq!(names, ["alpha", "beta", "gamma"]);
//! # Ok::<(), graphkit_core::Error>(())
//! ```

#![warn(missing_docs)]

pub mod adapter;
pub mod config;
pub mod error;
pub mod graph;
pub mod traversal;


pub use adapter::{Broadcast, Chain, PairDispatch, Tagged};
pub use config::{BackendKind, GraphkitConfig, LoggingConfig, StorageConfig, TraversalConfig};
pub use error::{Error, Result};
pub use graph::{
    AdjacencyList, AdjacencyMatrix, EdgeMutation, FixedMatrix, Graph, VertexMutation,
};
pub use traversal::{
    breadth_first, depth_first, first_path, natural, traverse, Traversal, TraversalKind,
    TraversalMut,
};

//! Behavioral adapters that give a graph's contents call semantics.
//!
//! Each adapter borrows a graph and reads it a particular way:
//!
//! - [`PairDispatch`]: vertices are type tags, edges are two-argument handlers
//!   selected by the tags of both arguments.
//! - [`Broadcast`]: vertices are components of a containment tree; a call
//!   reaches every component reachable from the root, bottom-up.
//! - [`Chain`]: vertices are handlers along a single path; a call stops at
//!   the first handler that accepts it.
//!
//! Adapters never mutate the graph.
//!
//! # Example
//!
//! ```rust
//! use graphkit_core::adapter::Chain;
//! use graphkit_core::graph::{AdjacencyList, EdgeMutation};
//!
//! let even: fn(u32) -> bool = |n| n % 2 == 0;
//! let small: fn(u32) -> bool = |n| n < 10;
//! let mut handlers: AdjacencyList<fn(u32) -> bool, ()> = [even, small].into_iter().collect();
//! handlers.upsert_edge(0, 1, ()).unwrap();
//!
//! let chain = Chain::new(&handlers, 0).unwrap();
//! assert_eq!(chain.invoke(4).unwrap(), Some(0));
//! assert_eq!(chain.invoke(7).unwrap(), Some(1));
//! assert_eq!(chain.invoke(11).unwrap(), None);
//! ```

mod broadcast;
mod chain;
mod dispatch;


pub use broadcast::Broadcast;
pub use chain::Chain;
pub use dispatch::{PairDispatch, Tagged};

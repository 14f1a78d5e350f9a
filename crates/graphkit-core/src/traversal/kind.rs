//! Run-time selection of a traversal kind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The four traversal producers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TraversalKind {
    /// Indices `0..N` in order.
    #[serde(rename = "natural", alias = "index")]
    Natural,
    /// Stack-driven depth-first search.
    #[default]
    #[serde(rename = "dfs", alias = "depth-first")]
    DepthFirst,
    /// Queue-driven breadth-first search.
    #[serde(rename = "bfs", alias = "breadth-first")]
    BreadthFirst,
    /// Single path following the first neighbor of each vertex.
    #[serde(rename = "path", alias = "first-path")]
    FirstPath,
}

impl TraversalKind {
    /// All kinds, in declaration order.
    pub const ALL: [TraversalKind; 4] = [
        TraversalKind::Natural,
        TraversalKind::DepthFirst,
        TraversalKind::BreadthFirst,
        TraversalKind::FirstPath,
    ];

    /// Short name used in configuration files and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TraversalKind::Natural => "natural",
            TraversalKind::DepthFirst => "dfs",
            TraversalKind::BreadthFirst => "bfs",
            TraversalKind::FirstPath => "path",
        }
    }

    /// Returns `true` if the kind uses a start vertex.
    #[must_use]
    pub fn needs_start(self) -> bool {
        !matches!(self, TraversalKind::Natural)
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "natural" | "index" => Ok(TraversalKind::Natural),
            "dfs" | "depth-first" => Ok(TraversalKind::DepthFirst),
            "bfs" | "breadth-first" => Ok(TraversalKind::BreadthFirst),
            "path" | "first-path" => Ok(TraversalKind::FirstPath),
            other => Err(Error::Config(format!("unknown traversal kind '{other}'"))),
        }
    }
}

//! Visitation order computation for the four traversal kinds.
//!
//! Each function walks the graph once and returns the visited indices. The
//! depth-first and breadth-first walks are iterative, mark a vertex visited
//! when it is taken off the frontier, and discard repeated entries.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::graph::{check_index, Graph};

/// `0..vertex_count()`.
pub(crate) fn natural_order<G: Graph + ?Sized>(graph: &G) -> Vec<usize> {
    (0..graph.vertex_count()).collect()
}

/// Stack-driven depth-first order from `start`.
///
/// Neighbors are pushed in reported order, so they are popped (and visited)
/// in reverse of that order.
pub(crate) fn depth_first_order<G: Graph + ?Sized>(graph: &G, start: usize) -> Result<Vec<usize>> {
    let count = graph.vertex_count();
    check_index(start, count)?;

    let mut visited = vec![false; count];
    let mut order = Vec::with_capacity(count);
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if !mark(&mut visited, node)? {
            continue;
        }
        order.push(node);
        stack.extend(graph.neighbors(node)?);
    }

    tracing::trace!(start, visited = order.len(), "depth-first traversal complete");
    Ok(order)
}

/// Queue-driven breadth-first order from `start`.
///
/// A vertex may be enqueued several times before its first dequeue; later
/// dequeues are discarded.
pub(crate) fn breadth_first_order<G: Graph + ?Sized>(
    graph: &G,
    start: usize,
) -> Result<Vec<usize>> {
    let count = graph.vertex_count();
    check_index(start, count)?;

    let mut visited = vec![false; count];
    let mut order = Vec::with_capacity(count);
    let mut queue = VecDeque::from([start]);

    while let Some(node) = queue.pop_front() {
        if !mark(&mut visited, node)? {
            continue;
        }
        order.push(node);
        queue.extend(graph.neighbors(node)?);
    }

    tracing::trace!(start, visited = order.len(), "breadth-first traversal complete");
    Ok(order)
}

/// Follows the first reported neighbor from `start` until a vertex has none.
///
/// Siblings are never explored. The walk also ends when the next vertex is
/// already on the path, so cyclic chains terminate.
pub(crate) fn first_path_order<G: Graph + ?Sized>(graph: &G, start: usize) -> Result<Vec<usize>> {
    let count = graph.vertex_count();
    check_index(start, count)?;

    let mut on_path = vec![false; count];
    on_path[start] = true;
    let mut order = vec![start];
    let mut current = start;

    while let Some(next) = graph.first_neighbor(current)? {
        if !mark(&mut on_path, next)? {
            tracing::debug!(
                start,
                vertex = next,
                "first-path walk returned to a vertex already on the path"
            );
            break;
        }
        order.push(next);
        current = next;
    }

    tracing::trace!(start, visited = order.len(), "first-path traversal complete");
    Ok(order)
}

/// Marks `node` as seen. Returns `false` if it was already marked.
fn mark(seen: &mut [bool], node: usize) -> Result<bool> {
    let len = seen.len();
    let slot = seen
        .get_mut(node)
        .ok_or_else(|| Error::out_of_range(node, len))?;
    Ok(!std::mem::replace(slot, true))
}

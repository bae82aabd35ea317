//! Breadth-first shortest-path computation.
//!
//! This module provides the level-synchronized breadth-first search used for all
//! distance queries in the crate. Every vertex is assigned its distance exactly
//! once, at the level it is first discovered, so the reported value is the true
//! shortest-path length even on branching graphs.
//!
//! # Functions
//!
//! - [`shortest_distance`] - Distance between one source/target pair, with early exit
//! - [`distances_from`] - The full distance vector from one source
//!
//! Ancestor queries scan every vertex as a candidate, so they run
//! [`distances_from`] once per query endpoint instead of one search per
//! candidate pair.

use std::collections::VecDeque;

use crate::graph::{Successors, VertexId};

/// Returns the length, in edges, of a shortest directed path from `source` to
/// `target`, or `None` if `target` is unreachable.
///
/// The search terminates as soon as `target` is assigned a distance; vertices
/// beyond that level are never explored. `source == target` yields `Some(0)`.
///
/// # Complexity
///
/// - Time: O(V + E) where V is the number of vertices and E is the number of edges
/// - Space: O(V) for the distance array and queue
///
/// # Examples
///
/// ```rust
/// use lexigraph::graph::algorithms::shortest_distance;
/// use lexigraph::{DirectedGraph, VertexId};
///
/// let mut graph = DirectedGraph::new(4);
/// graph.add_edge(VertexId::new(0), VertexId::new(1))?;
/// graph.add_edge(VertexId::new(1), VertexId::new(2))?;
/// graph.add_edge(VertexId::new(0), VertexId::new(2))?;
///
/// assert_eq!(shortest_distance(&graph, VertexId::new(0), VertexId::new(2)), Some(1));
/// assert_eq!(shortest_distance(&graph, VertexId::new(0), VertexId::new(3)), None);
/// # Ok::<(), lexigraph::Error>(())
/// ```
#[must_use]
pub fn shortest_distance<G: Successors>(
    graph: &G,
    source: VertexId,
    target: VertexId,
) -> Option<usize> {
    if source.index() >= graph.vertex_count() || target.index() >= graph.vertex_count() {
        return None;
    }
    if source == target {
        return Some(0);
    }

    let mut distance: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    distance[source.index()] = Some(0);

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let next = distance[v.index()].unwrap_or(0) + 1;

        for w in graph.successors(v) {
            if distance[w.index()].is_none() {
                distance[w.index()] = Some(next);
                if w == target {
                    return Some(next);
                }
                queue.push_back(w);
            }
        }
    }

    None
}

/// Computes the breadth-first distance from `source` to every vertex.
///
/// The result is indexed by vertex; unreachable vertices hold `None` and
/// `result[source] == Some(0)`. One call costs the same as a single full
/// search, which makes this the right building block when many targets are
/// queried against the same source.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use lexigraph::graph::algorithms::distances_from;
/// use lexigraph::{DirectedGraph, VertexId};
///
/// let mut graph = DirectedGraph::new(3);
/// graph.add_edge(VertexId::new(0), VertexId::new(1))?;
///
/// let distances = distances_from(&graph, VertexId::new(0));
/// assert_eq!(distances, vec![Some(0), Some(1), None]);
/// # Ok::<(), lexigraph::Error>(())
/// ```
#[must_use]
pub fn distances_from<G: Successors>(graph: &G, source: VertexId) -> Vec<Option<usize>> {
    let mut distance: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    if source.index() >= graph.vertex_count() {
        return distance;
    }

    distance[source.index()] = Some(0);

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let next = distance[v.index()].unwrap_or(0) + 1;

        for w in graph.successors(v) {
            if distance[w.index()].is_none() {
                distance[w.index()] = Some(next);
                queue.push_back(w);
            }
        }
    }

    distance
}

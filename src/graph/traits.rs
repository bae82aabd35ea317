//! Trait definitions for graph abstractions.
//!
//! This module defines the core traits that enable graph algorithms to work with
//! different graph implementations. By programming against these traits, algorithms
//! can be reused across various graph types without modification.
//!
//! # Architecture
//!
//! The trait hierarchy is designed to be minimal and composable:
//!
//! - [`GraphBase`] - Core properties: vertex count and vertex iteration
//! - [`Successors`] - Forward edge traversal (outgoing edges)
//!
//! # Design Principles
//!
//! ## Iterator-Based Traversal
//!
//! All adjacency queries return iterators rather than collections, enabling lazy
//! evaluation and avoiding unnecessary allocations for simple traversals.
//!
//! ## Minimal Requirements
//!
//! Each trait requires only what is necessary for its purpose. The traversal and
//! cycle-detection algorithms in [`algorithms`](crate::graph::algorithms) need
//! nothing beyond vertex enumeration and successor iteration.

use crate::graph::VertexId;

/// Base trait providing core graph properties.
///
/// This trait defines the fundamental properties that all graphs must have:
/// the number of vertices and the ability to iterate over all vertex identifiers.
///
/// # Examples
///
/// ```rust
/// use lexigraph::graph::{DirectedGraph, GraphBase};
///
/// let graph = DirectedGraph::new(2);
/// assert_eq!(graph.vertex_count(), 2);
///
/// let ids: Vec<_> = GraphBase::vertex_ids(&graph).collect();
/// assert_eq!(ids.len(), 2);
/// ```
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    ///
    /// This count includes all vertices, regardless of their connectivity.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over all vertex identifiers in the graph.
    ///
    /// The iteration order is ascending `VertexId` index.
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId>;
}

/// Trait for graphs that support forward edge traversal.
///
/// This trait provides access to the successor vertices of any given vertex,
/// enabling forward graph traversal and algorithms that follow edges in
/// their natural direction.
///
/// # Examples
///
/// ```rust
/// use lexigraph::graph::{DirectedGraph, Successors};
/// use lexigraph::VertexId;
///
/// let mut graph = DirectedGraph::new(3);
/// graph.add_edge(VertexId::new(0), VertexId::new(1))?;
/// graph.add_edge(VertexId::new(0), VertexId::new(2))?;
///
/// let successors: Vec<VertexId> = Successors::successors(&graph, VertexId::new(0)).collect();
/// assert_eq!(successors.len(), 2);
/// # Ok::<(), lexigraph::Error>(())
/// ```
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor vertices of the given vertex.
    ///
    /// Successors are vertices that are targets of edges originating from the
    /// specified vertex. For a directed edge `(v, w)`, vertex `w` is a successor
    /// of `v`. Parallel edges yield the same successor multiple times.
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not a valid vertex in the graph. Algorithms in
    /// this crate only pass identifiers obtained from
    /// [`vertex_ids`](GraphBase::vertex_ids); external callers should prefer the
    /// range-checked [`DirectedGraph::adjacent`](crate::graph::DirectedGraph::adjacent).
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal test graph implementation for trait testing
    struct TestGraph {
        vertex_count: usize,
        edges: Vec<(VertexId, VertexId)>,
    }

    impl GraphBase for TestGraph {
        fn vertex_count(&self) -> usize {
            self.vertex_count
        }

        fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
            (0..self.vertex_count).map(VertexId::new)
        }
    }

    impl Successors for TestGraph {
        fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
            self.edges
                .iter()
                .filter(move |(src, _)| *src == vertex)
                .map(|(_, dst)| *dst)
        }
    }

    #[test]
    fn test_graph_base() {
        let graph = TestGraph {
            vertex_count: 5,
            edges: vec![],
        };
        assert_eq!(graph.vertex_count(), 5);

        let ids: Vec<VertexId> = graph.vertex_ids().collect();
        assert_eq!(ids.len(), 5);
        assert_eq!(ids[0], VertexId::new(0));
        assert_eq!(ids[4], VertexId::new(4));
    }

    #[test]
    fn test_successors() {
        let edges = vec![
            (VertexId::new(0), VertexId::new(1)),
            (VertexId::new(0), VertexId::new(2)),
            (VertexId::new(1), VertexId::new(3)),
        ];
        let graph = TestGraph {
            vertex_count: 4,
            edges,
        };

        let succ: Vec<VertexId> = graph.successors(VertexId::new(0)).collect();
        assert_eq!(succ.len(), 2);
        assert!(succ.contains(&VertexId::new(1)));
        assert!(succ.contains(&VertexId::new(2)));

        let succ: Vec<VertexId> = graph.successors(VertexId::new(3)).collect();
        assert!(succ.is_empty());
    }
}

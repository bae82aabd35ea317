//! Vertex identifier implementation for directed graphs.
//!
//! This module provides the [`VertexId`] type, a strongly-typed identifier for
//! vertices within a directed graph. The newtype wrapper provides type safety and
//! prevents accidental confusion between vertex indices and other integer values.

use std::fmt;

/// A strongly-typed identifier for vertices within a directed graph.
///
/// `VertexId` wraps a `usize` index, providing type safety to prevent
/// accidental mixing of vertex indices with other integer values. Vertices are
/// named `0` through `V - 1`, where `V` is the vertex count fixed when the
/// graph is constructed.
///
/// # Usage
///
/// Vertex IDs index into a specific [`DirectedGraph`](crate::graph::DirectedGraph);
/// any graph operation validates them against that graph's vertex count. They are
/// used to:
///
/// - Reference endpoints when adding edges
/// - Query adjacency and degree information
/// - Store analysis results indexed by vertex
///
/// # Examples
///
/// ```rust
/// use lexigraph::{DirectedGraph, VertexId};
///
/// let graph = DirectedGraph::new(2);
/// let a = VertexId::new(0);
/// let b = VertexId::new(1);
///
/// // VertexIds can be compared
/// assert_ne!(a, b);
///
/// // VertexIds can be used as keys in collections
/// use std::collections::HashMap;
/// let mut data: HashMap<VertexId, i32> = HashMap::new();
/// data.insert(a, 42);
/// # let _ = graph;
/// ```
///
/// # Thread Safety
///
/// `VertexId` is [`Copy`], [`Send`], and [`Sync`], enabling efficient passing
/// between threads and use in concurrent data structures.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index value.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw vertex index (0-based)
    ///
    /// # Returns
    ///
    /// A new `VertexId` wrapping the provided index. The value is not validated
    /// here; graph operations reject indices outside their vertex range.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw index value of this vertex identifier.
    ///
    /// The index is a 0-based position that can be used to index into vectors
    /// or arrays that store per-vertex data.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexigraph::VertexId;
    ///
    /// let vertex = VertexId::new(5);
    /// assert_eq!(vertex.index(), 5);
    /// ```
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for VertexId {
    /// Converts a raw `usize` index into a `VertexId`.
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    /// Extracts the raw index from a `VertexId`.
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}

//! Generic directed graph infrastructure.
//!
//! This module provides the adjacency-list digraph at the core of the crate,
//! together with the traversal algorithms that answer distance and cycle
//! queries over it.
//!
//! # Architecture
//!
//! The graph module is organized into several components:
//!
//! - **Core Types**: [`VertexId`] and [`DirectedGraph`] provide the fundamental
//!   building blocks for graph representation
//! - **Algorithms**: Breadth-first shortest paths and depth-first cycle
//!   detection under [`algorithms`]
//! - **Traits**: [`GraphBase`] and [`Successors`] let the algorithms work with
//!   any graph implementation
//!
//! # Design Principles
//!
//! ## Strongly-Typed Identifiers
//!
//! Vertex identifiers use a newtype wrapper to prevent accidental mixing of
//! indices and provide type safety at compile time.
//!
//! ## Immutable After Construction
//!
//! Graphs are built incrementally through [`DirectedGraph::add_edge`], then
//! treated as read-only for all queries. This enables safe concurrent access
//! without locks.
//!
//! ## Bounded Traversal State
//!
//! Traversals allocate their working state per call and never rely on
//! call-stack recursion, so graph depth is bounded by heap memory rather than
//! stack size.
//!
//! # Usage Examples
//!
//! ## Building and Querying a Graph
//!
//! ```rust
//! use lexigraph::{DirectedGraph, VertexId};
//!
//! // A diamond: 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
//! let mut graph = DirectedGraph::new(4);
//! graph.add_edge(VertexId::new(0), VertexId::new(1))?;
//! graph.add_edge(VertexId::new(0), VertexId::new(2))?;
//! graph.add_edge(VertexId::new(1), VertexId::new(3))?;
//! graph.add_edge(VertexId::new(2), VertexId::new(3))?;
//!
//! assert_eq!(graph.distance(VertexId::new(0), VertexId::new(3))?, Some(2));
//! # Ok::<(), lexigraph::Error>(())
//! ```
//!
//! ## Detecting Cycles
//!
//! ```rust
//! use lexigraph::graph::algorithms;
//! use lexigraph::{DirectedGraph, VertexId};
//!
//! let mut graph = DirectedGraph::new(2);
//! graph.add_edge(VertexId::new(0), VertexId::new(1))?;
//! graph.add_edge(VertexId::new(1), VertexId::new(0))?;
//!
//! assert!(algorithms::has_cycle(&graph));
//! # Ok::<(), lexigraph::Error>(())
//! ```

mod directed;
mod traits;
mod vertex;

pub mod algorithms;

// Re-export core types at module level
pub use algorithms::CycleDetector;
pub use directed::DirectedGraph;
pub use traits::{GraphBase, Successors};
pub use vertex::VertexId;

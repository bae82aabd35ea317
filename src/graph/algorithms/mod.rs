//! Graph algorithms for the digraph engine.
//!
//! This module provides the traversal algorithms behind the crate's query
//! surface: breadth-first shortest-path distances and depth-first cycle
//! detection. All algorithms are generic over the
//! [`Successors`](crate::graph::Successors) trait, so they work with any graph
//! type that can enumerate vertices and out-neighbors.
//!
//! # Available Algorithms
//!
//! ## Shortest Paths
//!
//! - [`shortest_distance`] - BFS distance between a pair of vertices
//! - [`distances_from`] - BFS distance vector from one source to every vertex
//!
//! ## Cycle Detection
//!
//! - [`CycleDetector`] - Full search result with access to one concrete cycle
//! - [`has_cycle`] - Check whether any directed cycle exists
//! - [`find_cycle`] - Find a cycle if one exists
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | BFS distance | O(V + E) | Shortest paths, ancestor scans |
//! | Cycle detection | O(V + E) | Rooted-DAG validation |
//!
//! # Examples
//!
//! ```rust
//! use lexigraph::graph::algorithms;
//! use lexigraph::{DirectedGraph, VertexId};
//!
//! let mut graph = DirectedGraph::new(3);
//! graph.add_edge(VertexId::new(0), VertexId::new(1))?;
//! graph.add_edge(VertexId::new(1), VertexId::new(2))?;
//!
//! let d = algorithms::shortest_distance(&graph, VertexId::new(0), VertexId::new(2));
//! assert_eq!(d, Some(2));
//! assert!(!algorithms::has_cycle(&graph));
//! # Ok::<(), lexigraph::Error>(())
//! ```

mod cycles;
mod traversal;

pub use cycles::{find_cycle, has_cycle, CycleDetector};
pub use traversal::{distances_from, shortest_distance};

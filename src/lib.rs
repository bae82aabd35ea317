// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # lexigraph
//!
//! [![Crates.io](https://img.shields.io/crates/v/lexigraph.svg)](https://crates.io/crates/lexigraph)
//! [![Documentation](https://docs.rs/lexigraph/badge.svg)](https://docs.rs/lexigraph)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/lexigraph/blob/main/LICENSE-APACHE)
//!
//! A directed-graph engine for lexical hierarchies. `lexigraph` models a network
//! of concepts as an adjacency-list digraph and answers shortest-path and
//! shortest-common-ancestor queries over it, from plain vertex indices up to
//! term-level queries against a synonym/hypernym record set.
//!
//! ## Features
//!
//! - **Adjacency-list digraph** - Fixed vertex count, parallel edges and
//!   self-loops permitted, O(1) degree queries, edge reversal
//! - **Shortest paths** - Level-synchronized breadth-first search with an
//!   explicit per-vertex distance array
//! - **Cycle detection** - Iterative depth-first search that reports one
//!   concrete cycle, safe on deeply chained graphs
//! - **Rooted-DAG ancestor queries** - Shortest common ancestor of vertex
//!   pairs and vertex sets, with deterministic tie-breaking
//! - **Lexical layer** - Synonym and hypernym record parsing, term-level
//!   distance/ancestor queries, outcast selection
//!
//! ## Quick Start
//!
//! Add `lexigraph` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! lexigraph = "0.1"
//! ```
//!
//! ### Vertex-level queries
//!
//! ```rust
//! use lexigraph::{DirectedGraph, VertexId};
//!
//! let mut graph = DirectedGraph::new(3);
//! graph.add_edge(VertexId::new(0), VertexId::new(1))?;
//! graph.add_edge(VertexId::new(1), VertexId::new(2))?;
//! graph.add_edge(VertexId::new(0), VertexId::new(2))?;
//!
//! // Direct edge wins over the two-hop path
//! let d = graph.distance(VertexId::new(0), VertexId::new(2))?;
//! assert_eq!(d, Some(1));
//!
//! // Nothing points back at vertex 0
//! let d = graph.distance(VertexId::new(2), VertexId::new(0))?;
//! assert_eq!(d, None);
//! # Ok::<(), lexigraph::Error>(())
//! ```
//!
//! ### Term-level queries
//!
//! ```rust
//! use lexigraph::LexicalNetwork;
//!
//! let synonyms = "0,hound dog\n1,feline cat\n2,animal\n";
//! let hypernyms = "0,2\n1,2\n";
//!
//! let network = LexicalNetwork::new(synonyms, hypernyms)?;
//! assert!(network.contains("hound"));
//! assert_eq!(network.sca("dog", "cat")?, Some("animal"));
//! # Ok::<(), lexigraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `lexigraph` is organized into several key modules:
//!
//! - [`graph`] - The digraph data structure, traversal algorithms, and cycle
//!   detection
//! - [`ancestor`] - Shortest-common-ancestor queries over rooted DAGs
//! - [`lexicon`] - Record parsing and the term-level query surface
//!
//! The graph is built incrementally through [`DirectedGraph::add_edge`] and
//! treated as read-only once queries begin. All graph types are [`Send`] and
//! [`Sync`], enabling concurrent reads after construction; the crate provides
//! no internal locking.

pub(crate) mod error;

pub mod ancestor;
pub mod graph;
pub mod lexicon;

pub use ancestor::AncestorFinder;
pub use error::Error;
pub use graph::{CycleDetector, DirectedGraph, VertexId};
pub use lexicon::{LexicalNetwork, Outcast};

/// Convenience alias for operations that can fail with a [`Error`].
///
/// # Examples
///
/// ```rust
/// use lexigraph::{DirectedGraph, Result};
///
/// fn parse_graph(records: &str) -> Result<DirectedGraph> {
///     DirectedGraph::from_records(records)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

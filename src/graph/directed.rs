//! Core directed graph implementation.
//!
//! This module provides [`DirectedGraph`], the primary graph data structure of the
//! crate. The implementation uses adjacency lists for efficient traversal and keeps
//! a per-vertex indegree counter so that both degree queries are O(1).
//!
//! The vertex count is fixed at construction; edges are added incrementally and
//! never removed. Parallel edges and self-loops are permitted.

use std::fmt;

use crate::{
    graph::{
        algorithms,
        traits::{GraphBase, Successors},
        vertex::VertexId,
    },
    Error, Result,
};

/// A directed graph of vertices named `0` through `V - 1`.
///
/// `DirectedGraph` supports two primary operations: adding an edge and iterating
/// over the vertices adjacent from a given vertex. It also provides degree
/// queries, the reverse digraph, and breadth-first shortest-path distances.
/// Parallel edges and self-loops are permitted.
///
/// # Memory Layout
///
/// The graph is a vertex-indexed adjacency-list representation:
///
/// - `adjacency[v]` holds the out-neighbors of `v` in insertion order,
///   duplicates included
/// - `indegree[v]` counts the edges pointing at `v`
///
/// This uses O(V + E) space; [`reverse`](Self::reverse) takes O(V + E) time and
/// space, [`distance`](Self::distance) takes O(V + E) time, and all other
/// operations take O(1) time (iterating an adjacency list is proportional to the
/// outdegree of its vertex).
///
/// # Mutability
///
/// The graph is built incrementally through [`add_edge`](Self::add_edge) and
/// treated as read-only for all query operations. A failing call never leaves a
/// partial mutation behind.
///
/// # Thread Safety
///
/// `DirectedGraph` is [`Send`] and [`Sync`]. The crate provides no internal
/// locking; build the graph single-threaded, then query it from as many threads
/// as needed.
///
/// # Examples
///
/// ```rust
/// use lexigraph::{DirectedGraph, VertexId};
///
/// let mut graph = DirectedGraph::new(3);
/// graph.add_edge(VertexId::new(0), VertexId::new(1))?;
/// graph.add_edge(VertexId::new(1), VertexId::new(2))?;
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.out_degree(VertexId::new(0))?, 1);
/// assert_eq!(graph.in_degree(VertexId::new(2))?, 1);
/// # Ok::<(), lexigraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph {
    /// Out-neighbors per vertex, in insertion order, duplicates allowed
    adjacency: Vec<Vec<VertexId>>,
    /// Incoming edge count per vertex
    indegree: Vec<usize>,
    /// Total number of edges
    edge_count: usize,
}

impl DirectedGraph {
    /// Creates an empty digraph with the given number of vertices.
    ///
    /// All adjacency lists start empty and every indegree is zero. The vertex
    /// count cannot change afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexigraph::DirectedGraph;
    ///
    /// let graph = DirectedGraph::new(4);
    /// assert_eq!(graph.vertex_count(), 4);
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertex_count],
            indegree: vec![0; vertex_count],
            edge_count: 0,
        }
    }

    /// Parses a digraph from a whitespace-separated text record.
    ///
    /// The format is the number of vertices `V`, followed by the number of
    /// edges `E`, followed by `E` pairs of vertex indices, with each entry
    /// separated by whitespace (newlines included).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRecord`] if a count is negative, a token is
    /// not an integer, or the input ends before `E` pairs have been read, and
    /// [`Error::VertexOutOfRange`] if an edge endpoint is not in `[0, V)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexigraph::{DirectedGraph, VertexId};
    ///
    /// let graph = DirectedGraph::from_records("3 2\n0 1\n1 2\n")?;
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// assert_eq!(graph.distance(VertexId::new(0), VertexId::new(2))?, Some(2));
    /// # Ok::<(), lexigraph::Error>(())
    /// ```
    pub fn from_records(input: &str) -> Result<Self> {
        let mut tokens = input
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |token| (i + 1, token)));

        let vertex_count = next_count(&mut tokens, "vertex count")?;
        let edge_count = next_count(&mut tokens, "edge count")?;

        let mut graph = DirectedGraph::new(vertex_count);
        for _ in 0..edge_count {
            let v = next_count(&mut tokens, "edge source")?;
            let w = next_count(&mut tokens, "edge target")?;
            graph.add_edge(VertexId::new(v), VertexId::new(w))?;
        }

        Ok(graph)
    }

    /// Returns the number of vertices in this digraph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges in this digraph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns an iterator over all vertex identifiers in index order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.adjacency.len()).map(VertexId::new)
    }

    /// Adds the directed edge `v -> w` to this digraph.
    ///
    /// Appends `w` to `v`'s adjacency list, increments the indegree of `w`
    /// and the edge count. This is the only mutating operation on a graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfRange`] unless both endpoints are in
    /// `[0, V)`. The graph is unchanged on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexigraph::{DirectedGraph, VertexId};
    ///
    /// let mut graph = DirectedGraph::new(2);
    /// graph.add_edge(VertexId::new(0), VertexId::new(1))?;
    ///
    /// // Parallel edges and self-loops are permitted
    /// graph.add_edge(VertexId::new(0), VertexId::new(1))?;
    /// graph.add_edge(VertexId::new(1), VertexId::new(1))?;
    /// assert_eq!(graph.edge_count(), 3);
    /// # Ok::<(), lexigraph::Error>(())
    /// ```
    pub fn add_edge(&mut self, v: VertexId, w: VertexId) -> Result<()> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;

        self.adjacency[v.index()].push(w);
        self.indegree[w.index()] += 1;
        self.edge_count += 1;

        Ok(())
    }

    /// Returns the vertices adjacent from vertex `v`, in insertion order.
    ///
    /// The returned iterator is lazy and can be obtained again for a fresh
    /// pass. Parallel edges yield their target once per edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfRange`] unless `v` is in `[0, V)`.
    pub fn adjacent(&self, v: VertexId) -> Result<impl Iterator<Item = VertexId> + '_> {
        self.check_vertex(v)?;
        Ok(self.adjacency[v.index()].iter().copied())
    }

    /// Returns the number of directed edges incident from vertex `v`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfRange`] unless `v` is in `[0, V)`.
    pub fn out_degree(&self, v: VertexId) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.adjacency[v.index()].len())
    }

    /// Returns the number of directed edges incident to vertex `v`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfRange`] unless `v` is in `[0, V)`.
    pub fn in_degree(&self, v: VertexId) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.indegree[v.index()])
    }

    /// Returns the reverse of this digraph.
    ///
    /// Every edge `v -> w` becomes `w -> v` in the result; the receiver is not
    /// modified. Takes O(V + E) time and space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexigraph::{DirectedGraph, VertexId};
    ///
    /// let mut graph = DirectedGraph::new(2);
    /// graph.add_edge(VertexId::new(0), VertexId::new(1))?;
    ///
    /// let reversed = graph.reverse();
    /// assert_eq!(reversed.out_degree(VertexId::new(1))?, 1);
    /// assert_eq!(reversed.in_degree(VertexId::new(0))?, 1);
    /// # Ok::<(), lexigraph::Error>(())
    /// ```
    #[must_use]
    pub fn reverse(&self) -> DirectedGraph {
        let mut reversed = DirectedGraph::new(self.vertex_count());

        for (v, targets) in self.adjacency.iter().enumerate() {
            for &w in targets {
                // Endpoints came from this graph, so they are in range
                reversed.adjacency[w.index()].push(VertexId::new(v));
                reversed.indegree[v] += 1;
                reversed.edge_count += 1;
            }
        }

        reversed
    }

    /// Returns the length, in edges, of a shortest directed path from `source`
    /// to `target`.
    ///
    /// Runs a level-synchronized breadth-first search: each vertex is assigned
    /// a distance exactly once, at the level it is first discovered. Returns
    /// `Some(0)` when `source == target` and `None` when `target` is not
    /// reachable from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfRange`] unless both vertices are in `[0, V)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexigraph::{DirectedGraph, VertexId};
    ///
    /// let mut graph = DirectedGraph::new(3);
    /// graph.add_edge(VertexId::new(0), VertexId::new(1))?;
    /// graph.add_edge(VertexId::new(1), VertexId::new(2))?;
    /// graph.add_edge(VertexId::new(0), VertexId::new(2))?;
    ///
    /// assert_eq!(graph.distance(VertexId::new(0), VertexId::new(2))?, Some(1));
    /// assert_eq!(graph.distance(VertexId::new(2), VertexId::new(0))?, None);
    /// # Ok::<(), lexigraph::Error>(())
    /// ```
    pub fn distance(&self, source: VertexId, target: VertexId) -> Result<Option<usize>> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        Ok(algorithms::shortest_distance(self, source, target))
    }

    /// Checks if the given vertex ID is valid for this graph.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexigraph::{DirectedGraph, VertexId};
    ///
    /// let graph = DirectedGraph::new(2);
    /// assert!(graph.contains(VertexId::new(1)));
    /// assert!(!graph.contains(VertexId::new(2)));
    /// ```
    #[must_use]
    pub fn contains(&self, v: VertexId) -> bool {
        v.index() < self.adjacency.len()
    }

    /// Checks that `v` names a vertex of this graph.
    pub(crate) fn check_vertex(&self, v: VertexId) -> Result<()> {
        if v.index() >= self.adjacency.len() {
            return Err(Error::VertexOutOfRange {
                vertex: v.index(),
                vertex_count: self.adjacency.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for DirectedGraph {
    /// Renders the vertex count, the edge count, and one adjacency line per vertex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.vertex_count(),
            self.edge_count
        )?;

        for (v, targets) in self.adjacency.iter().enumerate() {
            write!(f, "{v}:")?;
            for w in targets {
                write!(f, " {w}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl GraphBase for DirectedGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.adjacency.len()).map(VertexId::new)
    }
}

impl Successors for DirectedGraph {
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.adjacency[vertex.index()].iter().copied()
    }
}

/// Reads the next token as a non-negative count or index.
fn next_count<'a>(
    tokens: &mut impl Iterator<Item = (usize, &'a str)>,
    what: &str,
) -> Result<usize> {
    let (line, raw) = next_int(tokens, what)?;
    usize::try_from(raw).map_err(|_| Error::MalformedRecord {
        message: format!("{what} must be non-negative, got {raw}"),
        line,
    })
}

/// Reads the next token as an integer, reporting truncation and parse failures.
fn next_int<'a>(
    tokens: &mut impl Iterator<Item = (usize, &'a str)>,
    what: &str,
) -> Result<(usize, i64)> {
    let Some((line, token)) = tokens.next() else {
        return Err(Error::MalformedRecord {
            message: format!("input ended while reading {what}"),
            line: 0,
        });
    };

    let value = token.parse::<i64>().map_err(|_| Error::MalformedRecord {
        message: format!("{what} is not an integer: {token:?}"),
        line,
    })?;

    Ok((line, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Creates a linear graph: 0 -> 1 -> 2
    fn create_linear_graph() -> DirectedGraph {
        let mut graph = DirectedGraph::new(3);
        graph.add_edge(VertexId::new(0), VertexId::new(1)).unwrap();
        graph.add_edge(VertexId::new(1), VertexId::new(2)).unwrap();
        graph
    }

    /// Creates a diamond graph: 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
    fn create_diamond_graph() -> DirectedGraph {
        let mut graph = DirectedGraph::new(4);
        graph.add_edge(VertexId::new(0), VertexId::new(1)).unwrap();
        graph.add_edge(VertexId::new(0), VertexId::new(2)).unwrap();
        graph.add_edge(VertexId::new(1), VertexId::new(3)).unwrap();
        graph.add_edge(VertexId::new(2), VertexId::new(3)).unwrap();
        graph
    }

    #[test]
    fn test_new_graph_has_no_edges() {
        let graph = DirectedGraph::new(5);
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 0);

        for v in graph.vertices() {
            assert_eq!(graph.out_degree(v).unwrap(), 0);
            assert_eq!(graph.in_degree(v).unwrap(), 0);
        }
    }

    #[test]
    fn test_zero_vertex_graph() {
        let mut graph = DirectedGraph::new(0);
        assert_eq!(graph.vertex_count(), 0);
        assert!(graph.add_edge(VertexId::new(0), VertexId::new(0)).is_err());
    }

    #[test]
    fn test_add_edge_updates_degrees() {
        let mut graph = DirectedGraph::new(3);
        graph.add_edge(VertexId::new(0), VertexId::new(1)).unwrap();
        graph.add_edge(VertexId::new(0), VertexId::new(2)).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.out_degree(VertexId::new(0)).unwrap(), 2);
        assert_eq!(graph.in_degree(VertexId::new(1)).unwrap(), 1);
        assert_eq!(graph.in_degree(VertexId::new(2)).unwrap(), 1);
    }

    #[test]
    fn test_add_edge_out_of_range() {
        let mut graph = DirectedGraph::new(2);

        let result = graph.add_edge(VertexId::new(5), VertexId::new(0));
        assert!(matches!(
            result,
            Err(Error::VertexOutOfRange { vertex: 5, .. })
        ));

        let result = graph.add_edge(VertexId::new(0), VertexId::new(2));
        assert!(matches!(
            result,
            Err(Error::VertexOutOfRange { vertex: 2, .. })
        ));

        // Failed calls leave the graph unchanged
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.in_degree(VertexId::new(0)).unwrap(), 0);
    }

    #[test]
    fn test_parallel_edges_and_self_loops() {
        let mut graph = DirectedGraph::new(2);
        graph.add_edge(VertexId::new(0), VertexId::new(1)).unwrap();
        graph.add_edge(VertexId::new(0), VertexId::new(1)).unwrap();
        graph.add_edge(VertexId::new(1), VertexId::new(1)).unwrap();

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.out_degree(VertexId::new(0)).unwrap(), 2);
        assert_eq!(graph.in_degree(VertexId::new(1)).unwrap(), 3);

        let adjacent: Vec<VertexId> = graph.adjacent(VertexId::new(0)).unwrap().collect();
        assert_eq!(adjacent, vec![VertexId::new(1), VertexId::new(1)]);
    }

    #[test]
    fn test_adjacent_insertion_order() {
        let mut graph = DirectedGraph::new(4);
        graph.add_edge(VertexId::new(0), VertexId::new(3)).unwrap();
        graph.add_edge(VertexId::new(0), VertexId::new(1)).unwrap();
        graph.add_edge(VertexId::new(0), VertexId::new(2)).unwrap();

        let adjacent: Vec<VertexId> = graph.adjacent(VertexId::new(0)).unwrap().collect();
        assert_eq!(
            adjacent,
            vec![VertexId::new(3), VertexId::new(1), VertexId::new(2)]
        );

        // A second pass yields the same sequence
        let again: Vec<VertexId> = graph.adjacent(VertexId::new(0)).unwrap().collect();
        assert_eq!(adjacent, again);
    }

    #[test]
    fn test_adjacent_out_of_range() {
        let graph = DirectedGraph::new(1);
        assert!(graph.adjacent(VertexId::new(1)).is_err());
        assert!(graph.out_degree(VertexId::new(1)).is_err());
        assert!(graph.in_degree(VertexId::new(1)).is_err());
    }

    #[test]
    fn test_degree_sums_match_edge_count() {
        let graph = create_diamond_graph();

        let out_sum: usize = graph
            .vertices()
            .map(|v| graph.out_degree(v).unwrap())
            .sum();
        let in_sum: usize = graph.vertices().map(|v| graph.in_degree(v).unwrap()).sum();

        assert_eq!(out_sum, graph.edge_count());
        assert_eq!(in_sum, graph.edge_count());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = create_linear_graph();
        let mut copied = original.clone();

        copied.add_edge(VertexId::new(2), VertexId::new(0)).unwrap();

        assert_eq!(original.edge_count(), 2);
        assert_eq!(copied.edge_count(), 3);

        // Adjacency order is preserved by the copy
        let original_adj: Vec<VertexId> = original.adjacent(VertexId::new(0)).unwrap().collect();
        let copied_adj: Vec<VertexId> = copied.adjacent(VertexId::new(0)).unwrap().collect();
        assert_eq!(original_adj, copied_adj);
    }

    #[test]
    fn test_reverse_flips_edges() {
        let graph = create_linear_graph();
        let reversed = graph.reverse();

        assert_eq!(reversed.vertex_count(), 3);
        assert_eq!(reversed.edge_count(), 2);

        let adjacent: Vec<VertexId> = reversed.adjacent(VertexId::new(2)).unwrap().collect();
        assert_eq!(adjacent, vec![VertexId::new(1)]);
        assert_eq!(reversed.out_degree(VertexId::new(0)).unwrap(), 0);
        assert_eq!(reversed.in_degree(VertexId::new(0)).unwrap(), 1);
    }

    #[test]
    fn test_reverse_twice_restores_edge_multiset() {
        let mut graph = DirectedGraph::new(3);
        graph.add_edge(VertexId::new(0), VertexId::new(1)).unwrap();
        graph.add_edge(VertexId::new(0), VertexId::new(1)).unwrap(); // Parallel edge
        graph.add_edge(VertexId::new(1), VertexId::new(2)).unwrap();
        graph.add_edge(VertexId::new(2), VertexId::new(2)).unwrap(); // Self-loop

        let round_trip = graph.reverse().reverse();

        assert_eq!(round_trip.edge_count(), graph.edge_count());
        for v in graph.vertices() {
            let mut expected: Vec<VertexId> = graph.adjacent(v).unwrap().collect();
            let mut actual: Vec<VertexId> = round_trip.adjacent(v).unwrap().collect();
            expected.sort();
            actual.sort();
            assert_eq!(expected, actual, "adjacency multiset differs at {v}");
        }
    }

    #[test]
    fn test_distance_direct_edge_beats_longer_path() {
        // Scenario: 0 -> 1, 1 -> 2, 0 -> 2
        let mut graph = DirectedGraph::new(3);
        graph.add_edge(VertexId::new(0), VertexId::new(1)).unwrap();
        graph.add_edge(VertexId::new(1), VertexId::new(2)).unwrap();
        graph.add_edge(VertexId::new(0), VertexId::new(2)).unwrap();

        assert_eq!(
            graph.distance(VertexId::new(0), VertexId::new(2)).unwrap(),
            Some(1)
        );
        assert_eq!(
            graph.distance(VertexId::new(2), VertexId::new(0)).unwrap(),
            None
        );
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let graph = create_diamond_graph();
        for v in graph.vertices() {
            assert_eq!(graph.distance(v, v).unwrap(), Some(0));
        }
    }

    #[test]
    fn test_distance_out_of_range() {
        let graph = DirectedGraph::new(2);
        assert!(graph.distance(VertexId::new(0), VertexId::new(2)).is_err());
        assert!(graph.distance(VertexId::new(2), VertexId::new(0)).is_err());
    }

    #[test]
    fn test_from_records() {
        let graph = DirectedGraph::from_records("4 3\n0 1\n1 2\n2 3\n").unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            graph.distance(VertexId::new(0), VertexId::new(3)).unwrap(),
            Some(3)
        );
    }

    #[test]
    fn test_from_records_negative_counts() {
        let result = DirectedGraph::from_records("-1 0");
        assert!(matches!(result, Err(Error::MalformedRecord { .. })));

        let result = DirectedGraph::from_records("3 -2");
        assert!(matches!(result, Err(Error::MalformedRecord { .. })));
    }

    #[test]
    fn test_from_records_malformed_tokens() {
        let result = DirectedGraph::from_records("three 2");
        assert!(matches!(
            result,
            Err(Error::MalformedRecord { line: 1, .. })
        ));

        let result = DirectedGraph::from_records("3 2\n0 1\n1 x\n");
        assert!(matches!(
            result,
            Err(Error::MalformedRecord { line: 3, .. })
        ));
    }

    #[test]
    fn test_from_records_truncated_edge_list() {
        let result = DirectedGraph::from_records("3 2\n0 1\n");
        assert!(matches!(result, Err(Error::MalformedRecord { .. })));
    }

    #[test]
    fn test_from_records_edge_out_of_range() {
        let result = DirectedGraph::from_records("2 1\n0 5\n");
        assert!(matches!(
            result,
            Err(Error::VertexOutOfRange { vertex: 5, .. })
        ));
    }

    #[test]
    fn test_display_format() {
        let graph = create_linear_graph();
        let rendered = graph.to_string();

        assert!(rendered.starts_with("3 vertices, 2 edges"));
        assert!(rendered.contains("0: 1"));
        assert!(rendered.contains("1: 2"));
        assert!(rendered.contains("2:"));
    }
}

//! Cycle detection for directed graphs.
//!
//! This module provides [`CycleDetector`], which determines whether a digraph has
//! a directed cycle and, if so, reports one concrete cycle. Cycle detection is the
//! first half of the rooted-DAG validation performed by
//! [`AncestorFinder`](crate::AncestorFinder).
//!
//! The search is a depth-first traversal driven by an explicit heap-allocated
//! stack of `(vertex, remaining successors)` frames rather than call-stack
//! recursion, so deeply chained graphs cannot overflow the call stack.

use crate::graph::{Successors, VertexId};

/// Determines whether a digraph has a directed cycle.
///
/// Construction runs the full search; afterwards [`has_cycle`](Self::has_cycle)
/// and [`cycle`](Self::cycle) answer in O(1). All traversal state (visited
/// flags, on-stack flags, predecessor links) lives only for the duration of the
/// constructor; a `CycleDetector` value is an immutable result.
///
/// Vertices are explored in index order, and the search stops at the first
/// cycle found, so the reported cycle is deterministic for a given graph.
///
/// # Complexity
///
/// The constructor takes O(V + E) time in the worst case and O(V + E) extra
/// space for the frame stack.
///
/// # Examples
///
/// ```rust
/// use lexigraph::{CycleDetector, DirectedGraph, VertexId};
///
/// let mut graph = DirectedGraph::new(3);
/// graph.add_edge(VertexId::new(0), VertexId::new(1))?;
/// graph.add_edge(VertexId::new(1), VertexId::new(2))?;
/// graph.add_edge(VertexId::new(2), VertexId::new(0))?;
///
/// let detector = CycleDetector::new(&graph);
/// assert!(detector.has_cycle());
///
/// let cycle = detector.cycle().unwrap();
/// assert_eq!(cycle.first(), cycle.last());
/// # Ok::<(), lexigraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CycleDetector {
    /// The recorded cycle, if any; first and last vertex coincide
    cycle: Option<Vec<VertexId>>,
}

impl CycleDetector {
    /// Determines whether the digraph `graph` has a directed cycle and, if so,
    /// finds such a cycle.
    ///
    /// Launches a depth-first exploration from each still-unvisited vertex in
    /// index order, short-circuiting once a cycle has been recorded.
    pub fn new<G: Successors>(graph: &G) -> Self {
        let mut search = CycleSearch::new(graph.vertex_count());

        for v in graph.vertex_ids() {
            if !search.marked[v.index()] && search.cycle.is_none() {
                search.explore(graph, v);
            }
        }

        CycleDetector {
            cycle: search.cycle,
        }
    }

    /// Does the digraph have a directed cycle?
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns a directed cycle if the digraph has one, and `None` otherwise.
    ///
    /// The cycle is an ordered vertex sequence whose first and last element
    /// coincide; every consecutive pair is joined by a real edge.
    #[must_use]
    pub fn cycle(&self) -> Option<&[VertexId]> {
        self.cycle.as_deref()
    }

    /// Consumes the detector and returns the recorded cycle, if any.
    #[must_use]
    pub fn into_cycle(self) -> Option<Vec<VertexId>> {
        self.cycle
    }
}

/// Checks whether `graph` contains any directed cycle.
///
/// Convenience wrapper around [`CycleDetector`] for callers that only need the
/// boolean answer.
#[must_use]
pub fn has_cycle<G: Successors>(graph: &G) -> bool {
    CycleDetector::new(graph).has_cycle()
}

/// Finds a directed cycle in `graph` if one exists.
///
/// Returns the cycle as a vertex sequence starting and ending with the same
/// vertex, or `None` for an acyclic graph.
#[must_use]
pub fn find_cycle<G: Successors>(graph: &G) -> Option<Vec<VertexId>> {
    CycleDetector::new(graph).into_cycle()
}

/// Transient state for one detection run.
struct CycleSearch {
    /// Has the vertex been visited by any exploration?
    marked: Vec<bool>,
    /// Is the vertex on the current depth-first path?
    on_stack: Vec<bool>,
    /// Predecessor of each vertex on the depth-first path that reached it
    edge_to: Vec<VertexId>,
    /// The recorded cycle, once found
    cycle: Option<Vec<VertexId>>,
}

impl CycleSearch {
    fn new(vertex_count: usize) -> Self {
        CycleSearch {
            marked: vec![false; vertex_count],
            on_stack: vec![false; vertex_count],
            edge_to: vec![VertexId::new(0); vertex_count],
            cycle: None,
        }
    }

    /// Depth-first exploration from `root` over an explicit frame stack.
    ///
    /// Each frame pairs a vertex with its remaining successors; a frame is
    /// popped once its successor sequence is exhausted, at which point the
    /// vertex leaves the depth-first path but stays globally marked.
    fn explore<G: Successors>(&mut self, graph: &G, root: VertexId) {
        let mut stack = vec![self.enter(graph, root)];

        while let Some((v, successors)) = stack.last_mut() {
            let v = *v;
            match successors.next() {
                Some(w) if self.on_stack[w.index()] => {
                    self.cycle = Some(self.trace_cycle(v, w));
                    return;
                }
                Some(w) if !self.marked[w.index()] => {
                    self.edge_to[w.index()] = v;
                    stack.push(self.enter(graph, w));
                }
                Some(_) => {}
                None => {
                    self.on_stack[v.index()] = false;
                    stack.pop();
                }
            }
        }
    }

    /// Marks `v` visited and on the path, and builds its frame.
    fn enter<G: Successors>(
        &mut self,
        graph: &G,
        v: VertexId,
    ) -> (VertexId, std::vec::IntoIter<VertexId>) {
        self.marked[v.index()] = true;
        self.on_stack[v.index()] = true;
        (v, graph.successors(v).collect::<Vec<_>>().into_iter())
    }

    /// Reconstructs the cycle closed by the back edge `v -> w`.
    ///
    /// Walks predecessor links from `v` back to `w`, orients the path along
    /// edge direction, and appends `w` so that first and last coincide.
    fn trace_cycle(&self, v: VertexId, w: VertexId) -> Vec<VertexId> {
        let mut path = vec![v];
        let mut x = v;
        while x != w {
            x = self.edge_to[x.index()];
            path.push(x);
        }
        path.reverse();
        path.push(w);
        path
    }
}

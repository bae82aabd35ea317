//! Shortest-common-ancestor queries over rooted DAGs.
//!
//! This module provides [`AncestorFinder`], which validates that a digraph is a
//! *rooted DAG* (no directed cycle, exactly one vertex of outdegree zero) and
//! answers shortest-common-ancestor queries over it.
//!
//! An *ancestral path* between two vertices `v` and `w` is a directed path from
//! `v` to some vertex `c` together with a directed path from `w` to the same
//! `c`. The shortest common ancestor is the `c` minimizing the combined length
//! of the two paths. In a hypernym hierarchy this is the most specific concept
//! that generalizes both query concepts.

use crate::{
    graph::{algorithms, DirectedGraph, Successors, VertexId},
    Error, Result,
};

/// Shortest-common-ancestor queries over a rooted DAG.
///
/// Construction validates the rooted-DAG invariant and takes a private deep
/// copy of the graph, so later mutation of the caller's graph cannot
/// invalidate the finder.
///
/// # Determinism
///
/// Candidate ancestors are scanned in vertex index order and the reported
/// ancestor is the first candidate that strictly improved the best-known
/// combined distance. Ties on the combined distance therefore resolve to the
/// lowest-indexed candidate encountered first, making results reproducible
/// across runs.
///
/// # Examples
///
/// ```rust
/// use lexigraph::{AncestorFinder, DirectedGraph, VertexId};
///
/// // Two leaves sharing a single root: 0 -> 2 <- 1
/// let mut graph = DirectedGraph::new(3);
/// graph.add_edge(VertexId::new(0), VertexId::new(2))?;
/// graph.add_edge(VertexId::new(1), VertexId::new(2))?;
///
/// let finder = AncestorFinder::new(&graph)?;
/// assert_eq!(finder.ancestor(VertexId::new(0), VertexId::new(1))?, Some(VertexId::new(2)));
/// assert_eq!(finder.length(VertexId::new(0), VertexId::new(1))?, Some(2));
/// # Ok::<(), lexigraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AncestorFinder {
    /// Private copy of the validated graph
    graph: DirectedGraph,
    /// The unique vertex of outdegree zero
    root: VertexId,
}

impl AncestorFinder {
    /// Validates `graph` as a rooted DAG and builds a finder over a deep copy
    /// of it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRootedDag`] if the graph contains a directed cycle
    /// or does not have exactly one vertex of outdegree zero. The message
    /// names the violated requirement.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexigraph::{AncestorFinder, DirectedGraph, VertexId};
    ///
    /// // 0 -> 1 and 0 -> 2 leaves two roots behind
    /// let mut graph = DirectedGraph::new(3);
    /// graph.add_edge(VertexId::new(0), VertexId::new(1))?;
    /// graph.add_edge(VertexId::new(0), VertexId::new(2))?;
    ///
    /// assert!(AncestorFinder::new(&graph).is_err());
    /// # Ok::<(), lexigraph::Error>(())
    /// ```
    pub fn new(graph: &DirectedGraph) -> Result<Self> {
        let graph = graph.clone();

        if algorithms::has_cycle(&graph) {
            return Err(Error::NotRootedDag(
                "graph contains a directed cycle".to_string(),
            ));
        }

        let roots: Vec<VertexId> = graph
            .vertices()
            .filter(|&v| Successors::successors(&graph, v).next().is_none())
            .collect();

        let root = match roots.as_slice() {
            [root] => *root,
            [] => {
                return Err(Error::NotRootedDag(
                    "graph has no root vertex".to_string(),
                ))
            }
            _ => {
                return Err(Error::NotRootedDag(format!(
                    "graph has {} root vertices",
                    roots.len()
                )))
            }
        };

        Ok(AncestorFinder { graph, root })
    }

    /// Returns the unique root of the underlying DAG.
    ///
    /// The root is the single vertex with no outgoing edges; every vertex in a
    /// rooted DAG reaches it.
    #[must_use]
    pub fn root(&self) -> VertexId {
        self.root
    }

    /// Returns the length of a shortest ancestral path between `v` and `w`.
    ///
    /// This is the minimum of `dist(v, c) + dist(w, c)` over every vertex `c`
    /// reachable from both arguments. A vertex is its own ancestor at distance
    /// zero, so `length(v, v)` is `Some(0)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfRange`] unless both vertices are in range.
    pub fn length(&self, v: VertexId, w: VertexId) -> Result<Option<usize>> {
        Ok(self.shortest_ancestral(v, w)?.map(|(length, _)| length))
    }

    /// Returns a shortest common ancestor of `v` and `w`.
    ///
    /// Candidates are scanned in index order; the reported vertex is the first
    /// one that strictly improved the best-known combined distance. `None` is
    /// returned when no vertex is reachable from both arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfRange`] unless both vertices are in range.
    pub fn ancestor(&self, v: VertexId, w: VertexId) -> Result<Option<VertexId>> {
        Ok(self.shortest_ancestral(v, w)?.map(|(_, ancestor)| ancestor))
    }

    /// Returns the length of a shortest ancestral path between the vertex sets
    /// `a` and `b`.
    ///
    /// Every pair `(v, w)` with `v` from `a` and `w` from `b` is scanned and
    /// the minimum pairwise ancestral length is returned, matching the
    /// "shortest ancestral path between the sets" semantic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySubset`] if either set is empty and
    /// [`Error::VertexOutOfRange`] if any member is out of range.
    pub fn length_subset(&self, a: &[VertexId], b: &[VertexId]) -> Result<Option<usize>> {
        Ok(self.shortest_ancestral_subset(a, b)?.map(|(length, _)| length))
    }

    /// Returns a shortest common ancestor of the vertex sets `a` and `b`.
    ///
    /// The reported vertex is the ancestor of the first pair that strictly
    /// improved the best-known combined distance, scanning pairs in input
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySubset`] if either set is empty and
    /// [`Error::VertexOutOfRange`] if any member is out of range.
    pub fn ancestor_subset(&self, a: &[VertexId], b: &[VertexId]) -> Result<Option<VertexId>> {
        Ok(self
            .shortest_ancestral_subset(a, b)?
            .map(|(_, ancestor)| ancestor))
    }

    /// Scans every vertex as a candidate ancestor of `v` and `w`.
    ///
    /// Returns the minimal combined distance together with the first candidate
    /// that strictly improved it, or `None` when no common ancestor exists.
    fn shortest_ancestral(&self, v: VertexId, w: VertexId) -> Result<Option<(usize, VertexId)>> {
        self.graph.check_vertex(v)?;
        self.graph.check_vertex(w)?;

        let from_v = algorithms::distances_from(&self.graph, v);
        let from_w = algorithms::distances_from(&self.graph, w);

        let mut best: Option<(usize, VertexId)> = None;
        for c in self.graph.vertices() {
            if let (Some(d1), Some(d2)) = (from_v[c.index()], from_w[c.index()]) {
                let combined = d1 + d2;
                if best.is_none_or(|(length, _)| combined < length) {
                    best = Some((combined, c));
                }
            }
        }

        Ok(best)
    }

    /// Pairwise scan over two vertex sets with minimum aggregation.
    fn shortest_ancestral_subset(
        &self,
        a: &[VertexId],
        b: &[VertexId],
    ) -> Result<Option<(usize, VertexId)>> {
        if a.is_empty() || b.is_empty() {
            return Err(Error::EmptySubset);
        }

        let mut best: Option<(usize, VertexId)> = None;
        for &v in a {
            for &w in b {
                if let Some((length, ancestor)) = self.shortest_ancestral(v, w)? {
                    if best.is_none_or(|(shortest, _)| length < shortest) {
                        best = Some((length, ancestor));
                    }
                }
            }
        }

        Ok(best)
    }
}

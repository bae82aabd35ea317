//! The term-level query surface over a concept digraph.
//!
//! This module provides [`LexicalNetwork`], which builds a
//! [`DirectedGraph`](crate::DirectedGraph) from two external record sets (a
//! synonym table and a hypernym table) and answers distance and
//! shortest-common-ancestor queries posed in terms rather than vertex indices,
//! and [`Outcast`], a consumer of the distance query that picks the
//! semantically most distant member of a term list.
//!
//! # Record Formats
//!
//! - Synonym record: `id,term1 term2 ...` - one concept per line, its integer
//!   id and a space-separated synonym list
//! - Hypernym record: `id,parent1,parent2,...` - one edge per listed parent,
//!   from the specific concept to the general one
//!
//! Concept ids must cover `0..n` without gaps, where `n` is the number of
//! distinct ids; the graph is sized to `n` vertices and each id doubles as its
//! vertex index.

mod outcast;
mod parse;

pub use outcast::Outcast;

use std::collections::HashMap;
use std::path::Path;

use crate::{
    ancestor::AncestorFinder,
    graph::{algorithms, DirectedGraph, VertexId},
    Error, Result,
};

/// A lexical hierarchy of concepts with term-level distance and ancestor queries.
///
/// The network owns three immutable tables built once at construction: the
/// id-to-synset table, the term-to-id table (first writer wins on duplicate
/// terms), and the hypernym digraph. Queries translate terms to vertex
/// identifiers, delegate to the graph layer, and translate results back.
///
/// # Examples
///
/// ```rust
/// use lexigraph::LexicalNetwork;
///
/// let synonyms = "\
/// 0,hound dog
/// 1,feline cat
/// 2,carnivore
/// 3,animal beast";
/// let hypernyms = "\
/// 0,2
/// 1,2
/// 2,3";
///
/// let network = LexicalNetwork::new(synonyms, hypernyms)?;
///
/// assert!(network.contains("hound"));
/// assert_eq!(network.distance("dog", "carnivore")?, Some(1));
/// assert_eq!(network.sca("dog", "cat")?, Some("carnivore"));
/// # Ok::<(), lexigraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct LexicalNetwork {
    /// Synset strings indexed by vertex
    synsets: Vec<String>,
    /// Term to the vertex of the first id it appeared under
    term_ids: HashMap<String, VertexId>,
    /// Hypernym digraph: one vertex per concept, edges specific -> general
    graph: DirectedGraph,
}

impl LexicalNetwork {
    /// Builds a network from a synonym record set and a hypernym record set.
    ///
    /// The graph is sized to the number of distinct concept ids and one edge
    /// is added per declared hypernym relation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRecord`] for unparsable records or
    /// non-contiguous concept ids, and [`Error::VertexOutOfRange`] when a
    /// hypernym record references an id with no synonym record.
    pub fn new(synonyms: &str, hypernyms: &str) -> Result<Self> {
        let table = parse::parse_synonyms(synonyms)?;

        let mut synsets = Vec::with_capacity(table.synsets.len());
        for id in 0..table.synsets.len() {
            match table.synsets.get(&id) {
                Some(synset) => synsets.push(synset.clone()),
                None => {
                    return Err(Error::MalformedRecord {
                        message: format!(
                            "synonym ids must cover 0..{} without gaps, id {id} is missing",
                            table.synsets.len()
                        ),
                        line: 0,
                    })
                }
            }
        }

        let term_ids = table
            .term_ids
            .into_iter()
            .map(|(term, id)| (term, VertexId::new(id)))
            .collect();

        let mut graph = DirectedGraph::new(synsets.len());
        for (child, parent) in parse::parse_hypernyms(hypernyms)? {
            graph.add_edge(VertexId::new(child), VertexId::new(parent))?;
        }

        Ok(LexicalNetwork {
            synsets,
            term_ids,
            graph,
        })
    }

    /// Builds a network from the two record files on disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if either file cannot be read, plus every error
    /// [`new`](Self::new) can produce.
    pub fn from_files(
        synonym_path: impl AsRef<Path>,
        hypernym_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let synonyms = std::fs::read_to_string(synonym_path)?;
        let hypernyms = std::fs::read_to_string(hypernym_path)?;
        LexicalNetwork::new(&synonyms, &hypernyms)
    }

    /// Returns an iterator over all known terms, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.term_ids.keys().map(String::as_str)
    }

    /// Is the word a known term of this network?
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.term_ids.contains_key(term)
    }

    /// Returns the vertex a term maps to, if the term is known.
    ///
    /// Terms that appeared under several ids map to the first id seen.
    #[must_use]
    pub fn id(&self, term: &str) -> Option<VertexId> {
        self.term_ids.get(term).copied()
    }

    /// Returns the synset string of a concept vertex.
    #[must_use]
    pub fn synset(&self, id: VertexId) -> Option<&str> {
        self.synsets.get(id.index()).map(String::as_str)
    }

    /// Returns the number of concepts in the network.
    #[must_use]
    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// Returns the shortest-path distance between the concepts of two terms.
    ///
    /// Both terms are mapped to their vertices and the query delegates to the
    /// graph's breadth-first distance: the number of hypernym edges on a
    /// shortest directed path from the first concept to the second, `Some(0)`
    /// when both terms name the same concept, `None` when no directed path
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTerm`] if either term is not in the network.
    pub fn distance(&self, first: &str, second: &str) -> Result<Option<usize>> {
        let a = self.term_vertex(first)?;
        let b = self.term_vertex(second)?;
        self.graph.distance(a, b)
    }

    /// Returns the synset that is a shortest common ancestor of two terms.
    ///
    /// The network graph is validated as a rooted DAG for the query, mirroring
    /// the construction-time contract of [`AncestorFinder`]; the resulting
    /// ancestor vertex is mapped back to its synset string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTerm`] if either term is unknown and
    /// [`Error::NotRootedDag`] if the hypernym graph is not a rooted DAG.
    pub fn sca(&self, first: &str, second: &str) -> Result<Option<&str>> {
        let a = self.term_vertex(first)?;
        let b = self.term_vertex(second)?;

        let finder = AncestorFinder::new(&self.graph)?;
        Ok(finder.ancestor(a, b)?.and_then(|c| self.synset(c)))
    }

    /// Returns the shortest ancestral-path distance between two concept ids.
    ///
    /// Scans every vertex as a candidate meeting point and returns the minimal
    /// `dist(a, c) + dist(b, c)`, seeded with the direct-path distance between
    /// the two ids as a candidate lower bound. Unlike [`distance`](Self::distance),
    /// this treats the two concepts symmetrically.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfRange`] unless both ids are in range.
    pub fn id_distance(&self, a: VertexId, b: VertexId) -> Result<Option<usize>> {
        let mut best = self.graph.distance(a, b)?;

        let from_a = algorithms::distances_from(&self.graph, a);
        let from_b = algorithms::distances_from(&self.graph, b);

        for c in self.graph.vertices() {
            if let (Some(d1), Some(d2)) = (from_a[c.index()], from_b[c.index()]) {
                let combined = d1 + d2;
                if best.is_none_or(|shortest| combined < shortest) {
                    best = Some(combined);
                }
            }
        }

        Ok(best)
    }

    /// Maps a term to its vertex or reports it as unknown.
    fn term_vertex(&self, term: &str) -> Result<VertexId> {
        self.term_ids
            .get(term)
            .copied()
            .ok_or_else(|| Error::UnknownTerm(term.to_string()))
    }
}

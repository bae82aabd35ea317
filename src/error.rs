use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all possible error conditions that can occur while building graphs,
/// parsing record sets, and running distance or ancestor queries. Each variant provides
/// specific context about the failure mode to enable appropriate error handling.
///
/// # Error Categories
///
/// ## Graph Construction and Query Errors
/// - [`Error::VertexOutOfRange`] - A vertex index outside `[0, V)` was passed to a graph operation
/// - [`Error::NotRootedDag`] - Ancestor queries were requested over a graph that is not a rooted DAG
/// - [`Error::EmptySubset`] - A set-based query was given an empty vertex or term set
///
/// ## Record Parsing Errors
/// - [`Error::MalformedRecord`] - A graph, synonym, or hypernym record could not be parsed
///
/// ## Lexical Query Errors
/// - [`Error::UnknownTerm`] - A term-based query referenced a term absent from the network
///
/// ## I/O Errors
/// - [`Error::Io`] - Filesystem errors while reading record files
///
/// Unreachability is deliberately *not* an error: distance and ancestor queries return
/// `Option` values, with `None` standing in for "no directed path exists" and
/// distinguishing it from a zero-length path.
///
/// # Examples
///
/// ```rust
/// use lexigraph::{DirectedGraph, Error, VertexId};
///
/// let mut graph = DirectedGraph::new(2);
/// match graph.add_edge(VertexId::new(0), VertexId::new(7)) {
///     Err(Error::VertexOutOfRange { vertex, vertex_count }) => {
///         eprintln!("vertex {} rejected, graph has {} vertices", vertex, vertex_count);
///     }
///     Err(e) => eprintln!("other error: {}", e),
///     Ok(()) => {}
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A vertex index was outside the valid range of its graph.
    ///
    /// Every graph operation validates its vertex arguments against the fixed
    /// vertex count chosen at construction. This error is raised before any
    /// mutation takes place, so a failing call leaves the graph unchanged.
    #[error("vertex {vertex} is not between 0 and {}", .vertex_count.saturating_sub(1))]
    VertexOutOfRange {
        /// The offending vertex index
        vertex: usize,
        /// The number of vertices in the graph
        vertex_count: usize,
    },

    /// A text record could not be parsed.
    ///
    /// Raised for negative vertex or edge counts, non-numeric identifiers,
    /// wrong field counts, and truncated edge lists. The line number refers
    /// to the input being parsed (1-based), not to source code; it is 0 when
    /// the failure concerns the record set as a whole rather than one line.
    #[error("malformed record at line {line}: {message}")]
    MalformedRecord {
        /// Description of what was malformed
        message: String,
        /// 1-based line number within the parsed input
        line: usize,
    },

    /// A term-based query referenced a term that is not in the network.
    ///
    /// Term lookups go through the term table built from the synonym records;
    /// a term that never appeared in any synonym record cannot be mapped to a
    /// vertex and the query fails before touching the graph.
    #[error("term is not in the network: {0}")]
    UnknownTerm(String),

    /// Ancestor queries require a rooted DAG and the graph is not one.
    ///
    /// A rooted DAG has no directed cycle and exactly one vertex of
    /// outdegree zero. The message names which of the two requirements
    /// was violated.
    #[error("not a rooted DAG: {0}")]
    NotRootedDag(String),

    /// A set-based query was given an empty input set.
    ///
    /// Subset ancestor queries and outcast selection have no meaningful
    /// answer for empty inputs.
    #[error("subset query requires a non-empty set")]
    EmptySubset,

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur when constructing a network
    /// from record files on disk.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

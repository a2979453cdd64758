//! Waypoint - shortest-path scenarios over small file-described graphs
//!
//! This library implements one shortest-path engine configurable for three
//! scenarios: finding the central vertex of an undirected weighted graph by
//! all-pairs distances, point-to-point routing on a directed graph that may
//! carry negative edge weights (with negative-cycle detection), and routing
//! on a terrain grid with heterogeneous traversal costs and impassable cells.
//!
//! The grid is only a graph-construction strategy; both algorithms run over
//! the same [`graph::Graph`] abstraction and share one result type.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod input;
pub mod scenario;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;
pub use graph::grid::GridMap;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed header at line {line}: {reason}")]
    MalformedHeader { line: usize, reason: String },

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Graph contains no vertices")]
    EmptyGraph,

    #[error("Grid has no '{0}' cell")]
    MissingMarker(char),

    #[error("Grid has more than one '{0}' cell")]
    DuplicateMarker(char),

    #[error("Graph contains a negative-weight cycle reachable from the source")]
    NegativeCycle,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

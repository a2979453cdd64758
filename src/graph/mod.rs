pub mod adjacency;
pub mod generators;
pub mod grid;
pub mod traits;

pub use adjacency::AdjacencyGraph;
pub use grid::{Coord, GridMap, Terrain};
pub use traits::{Graph, MutableGraph, VertexId, Weight};

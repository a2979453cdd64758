pub mod bellman_ford;
pub mod dijkstra;
pub mod path;
pub mod traits;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};

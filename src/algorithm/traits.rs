use std::collections::HashMap;

use crate::algorithm::path::reconstruct;
use crate::graph::{Graph, VertexId, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution.
///
/// Vertices absent from `distances` are unreachable from the source (the
/// "infinite" sentinel is absence, not a magic value); vertices absent from
/// `predecessors` are the source itself or were never reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Best known distance from the source for each reachable vertex
    pub distances: HashMap<V, W>,

    /// Predecessor vertex on a shortest path, for each reached vertex
    pub predecessors: HashMap<V, V>,

    /// Source vertex the search started from
    pub source: V,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Creates an empty result seeded with distance 0 at the source
    pub fn new(source: V) -> Self {
        let mut distances = HashMap::new();
        distances.insert(source.clone(), W::zero());
        ShortestPathResult {
            distances,
            predecessors: HashMap::new(),
            source,
        }
    }

    /// Distance from the source to a vertex, `None` if unreachable
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Shortest path from the source to `goal` as a forward vertex sequence,
    /// `None` if unreachable
    pub fn path_to(&self, goal: &V) -> Option<Vec<V>> {
        if !self.distances.contains_key(goal) {
            return None;
        }
        reconstruct(&self.predecessors, &self.source, goal)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: VertexId,
    W: Weight,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

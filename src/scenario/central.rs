use std::collections::HashMap;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{AdjacencyGraph, VertexId};
use crate::{Dijkstra, Error, Result};

/// Outcome of the central-vertex search over an undirected weighted graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CentralReport<V: VertexId> {
    /// All vertices in sorted order, the order every table below is keyed by
    pub vertices: Vec<V>,

    /// The central vertex: minimum sum of finite distances to all others
    pub central: V,

    /// Sum of finite distances from the central vertex
    pub central_cost: i64,

    /// Distance row of the central vertex
    pub central_distances: HashMap<V, i64>,

    /// Farthest reachable vertex from the central vertex, with its distance
    pub farthest: V,
    pub farthest_distance: i64,

    /// Full all-pairs distance matrix, one row per candidate source
    pub matrix: HashMap<V, HashMap<V, i64>>,
}

/// Finds the central vertex by running the priority-queue engine once per
/// candidate source.
///
/// Each candidate's cost is the sum of its *finite* distances: unreachable
/// vertices contribute nothing rather than infinity, a deliberate leniency
/// that keeps disconnected graphs comparable. Ties on the total cost go to
/// the first candidate in sorted order, and likewise for the farthest-vertex
/// ties.
pub fn find_central_vertex<V: VertexId + 'static>(
    graph: &AdjacencyGraph<V, i64>,
) -> Result<CentralReport<V>> {
    let vertices = graph.sorted_vertices();
    if vertices.is_empty() {
        return Err(Error::EmptyGraph);
    }

    let engine = Dijkstra::new();
    let mut matrix: HashMap<V, HashMap<V, i64>> = HashMap::with_capacity(vertices.len());
    let mut central: Option<(V, i64)> = None;

    for candidate in &vertices {
        let result: ShortestPathResult<V, i64> = engine.compute_shortest_paths(graph, candidate)?;
        let total: i64 = result.distances.values().sum();

        match &central {
            Some((_, best)) if total >= *best => {}
            _ => central = Some((candidate.clone(), total)),
        }
        matrix.insert(candidate.clone(), result.distances);
    }

    // vertices is non-empty, so a central candidate always exists
    let (central, central_cost) = central.ok_or(Error::EmptyGraph)?;
    let central_distances = matrix[&central].clone();

    let mut farthest: Option<(V, i64)> = None;
    for vertex in &vertices {
        if let Some(dist) = central_distances.get(vertex) {
            match &farthest {
                Some((_, best)) if dist <= best => {}
                _ => farthest = Some((vertex.clone(), *dist)),
            }
        }
    }
    let (farthest, farthest_distance) = farthest.ok_or(Error::EmptyGraph)?;

    Ok(CentralReport {
        vertices,
        central,
        central_cost,
        central_distances,
        farthest,
        farthest_distance,
        matrix,
    })
}

use log::debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, VertexId, Weight};
use crate::{Error, Result};

/// Bellman-Ford full-relaxation algorithm, tolerant of negative edge weights.
///
/// Performs exactly (vertex_count - 1) passes over every edge, then one
/// detection pass: an edge that still improves a distance witnesses a
/// negative-weight cycle reachable from the source, in which case no table is
/// returned at all since the distances are meaningless.
///
/// Edges are relaxed in vertex-insertion then edge-insertion order. Final
/// distances do not depend on that order; intermediate predecessor choices
/// do, so the predecessor table describes *some* shortest path, not a
/// canonical one.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new BellmanFord algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for BellmanFord
where
    V: VertexId,
    W: Weight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let mut result = ShortestPathResult::new(source.clone());
        let passes = graph.vertex_count().saturating_sub(1);

        for pass in 0..passes {
            let mut improved = false;
            for u in graph.vertices() {
                let Some(dist_u) = result.distances.get(u).copied() else {
                    continue;
                };
                for (v, weight) in graph.outgoing_edges(u) {
                    let candidate = dist_u + weight;
                    let improves = match result.distances.get(&v) {
                        None => true,
                        Some(current) => candidate < *current,
                    };
                    if improves {
                        result.distances.insert(v.clone(), candidate);
                        result.predecessors.insert(v, u.clone());
                        improved = true;
                    }
                }
            }
            if !improved {
                debug!("relaxation converged after {} of {} passes", pass + 1, passes);
                break;
            }
        }

        // Detection pass: any remaining improvement means a negative cycle.
        for u in graph.vertices() {
            let Some(dist_u) = result.distances.get(u).copied() else {
                continue;
            };
            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = dist_u + weight;
                match result.distances.get(&v) {
                    Some(current) if candidate >= *current => {}
                    _ => return Err(Error::NegativeCycle),
                }
            }
        }

        Ok(result)
    }
}

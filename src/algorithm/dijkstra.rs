use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{Graph, VertexId, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over the graph abstraction.
///
/// Requires all edge weights to be non-negative; on negative weights the
/// distances are silently wrong, so negative-capable inputs must go through
/// [`crate::BellmanFord`] instead. A goal vertex may be supplied to stop the
/// search the moment the goal is popped from the frontier, which is sound
/// because a non-negative-weight pop is final.
#[derive(Debug, Default)]
pub struct Dijkstra<V> {
    goal: Option<V>,
}

impl<V: VertexId> Dijkstra<V> {
    /// Creates an instance that exhausts the frontier (full distance table)
    pub fn new() -> Self {
        Dijkstra { goal: None }
    }

    /// Creates an instance that terminates early once `goal` is settled
    pub fn to_goal(goal: V) -> Self {
        Dijkstra { goal: Some(goal) }
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra<V>
where
    V: VertexId,
    W: Weight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let mut result = ShortestPathResult::new(source.clone());

        // Min-priority frontier seeded with the source; stale entries are
        // never removed from the middle, only filtered on pop.
        let mut frontier = BinaryHeapWrapper::new();
        frontier.push(source.clone(), W::zero());

        while let Some((u, dist_u)) = frontier.pop() {
            if self.goal.as_ref() == Some(&u) {
                break;
            }

            // Lazy deletion: skip entries superseded by a shorter path.
            match result.distances.get(&u) {
                Some(best) if *best < dist_u => continue,
                _ => {}
            }

            for (v, weight) in graph.outgoing_edges(&u) {
                let candidate = dist_u + weight;
                let improves = match result.distances.get(&v) {
                    None => true,
                    Some(current) => candidate < *current,
                };
                if improves {
                    result.distances.insert(v.clone(), candidate);
                    result.predecessors.insert(v.clone(), u.clone());
                    frontier.push(v, candidate);
                }
            }
        }

        Ok(result)
    }
}

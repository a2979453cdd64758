use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::AdjacencyGraph;
use crate::{BellmanFord, Error, Result};

/// Outcome of a directed point-to-point route query.
///
/// "No path" and "negative cycle" are normal, reportable outcomes at this
/// boundary, not errors: only file and input problems propagate as `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// A shortest path exists, with its total cost and vertex sequence
    Path { cost: i64, vertices: Vec<usize> },
    /// The goal cannot be reached from the source
    Unreachable,
    /// Distances are unbounded below; no path can be reported
    NegativeCycle,
}

/// Computes the cheapest route between two vertices of a directed graph that
/// may carry negative edge weights, using the negative-tolerant engine.
pub fn find_route(
    graph: &AdjacencyGraph<usize, i64>,
    source: usize,
    goal: usize,
) -> Result<RouteOutcome> {
    let engine = BellmanFord::new();
    let result = match engine.compute_shortest_paths(graph, &source) {
        Ok(result) => result,
        Err(Error::NegativeCycle) => return Ok(RouteOutcome::NegativeCycle),
        Err(err) => return Err(err),
    };

    match (result.distance(&goal), result.path_to(&goal)) {
        (Some(cost), Some(vertices)) => Ok(RouteOutcome::Path { cost, vertices }),
        _ => Ok(RouteOutcome::Unreachable),
    }
}

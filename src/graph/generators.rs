use rand::prelude::*;

use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::traits::MutableGraph;

/// Generates a random directed graph with non-negative integer weights.
///
/// Roughly `edge_factor * n` edges are drawn uniformly; self-loops are
/// skipped. All vertex indices in `0..n` exist even when isolated, so the
/// result is always a valid engine input. Useful for cross-validating the
/// two engines against each other on inputs neither was written for.
pub fn random_graph(n: usize, edge_factor: f64, max_weight: i64) -> AdjacencyGraph<usize, i64> {
    let mut graph = AdjacencyGraph::with_capacity(n);
    let mut rng = rand::thread_rng();

    for v in 0..n {
        graph.add_vertex(v);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(0..=max_weight);
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

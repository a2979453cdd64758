use std::collections::HashMap;

use crate::graph::VertexId;

/// Rebuilds the explicit vertex sequence from `source` to `goal` out of a
/// predecessor table.
///
/// Walks backward from `goal` until hitting a vertex with no predecessor;
/// returns `None` if that terminal vertex is not the source (the chain never
/// reached back, so there is no path). On success the sequence runs from
/// source to goal inclusive, in forward order.
pub fn reconstruct<V: VertexId>(
    predecessors: &HashMap<V, V>,
    source: &V,
    goal: &V,
) -> Option<Vec<V>> {
    let mut path = vec![goal.clone()];
    let mut current = goal;

    while let Some(pred) = predecessors.get(current) {
        // A predecessor chain is acyclic by construction, but a chain longer
        // than the table itself can only mean a corrupted table.
        if path.len() > predecessors.len() + 1 {
            return None;
        }
        path.push(pred.clone());
        current = pred;
    }

    if current != source {
        return None;
    }

    path.reverse();
    Some(path)
}

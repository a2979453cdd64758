use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{PrimInt, Signed};

/// Marker trait for types usable as vertex identifiers.
///
/// Vertices only need equality, hashing and a total order (for deterministic
/// tie-breaking); `String` labels, `usize` indices and `(row, col)` grid
/// coordinates all qualify.
pub trait VertexId: Clone + Eq + Hash + Ord + Debug {}

impl<T> VertexId for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Marker trait for edge weights: signed primitive integers.
///
/// Costs in the input formats are always integral, so an integer weight with
/// `Ord` replaces any floating-point "infinity" sentinel; unreachable is
/// represented by absence, never by a magic value.
pub trait Weight: PrimInt + Signed + Debug {}

impl<T> Weight for T where T: PrimInt + Signed + Debug {}

/// Trait representing a weighted directed graph
pub trait Graph<V, W>: Debug
where
    V: VertexId,
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all vertices in insertion order
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (V, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Ensures a vertex exists in the graph, with an empty edge list if new
    fn add_vertex(&mut self, vertex: V);

    /// Adds a directed edge, materializing both endpoints as vertices
    fn add_edge(&mut self, from: V, to: V, weight: W);

    /// Adds an undirected edge as two mirror directed edges
    fn add_undirected_edge(&mut self, a: V, b: V, weight: W) {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }
}

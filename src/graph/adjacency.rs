use std::collections::HashMap;

use crate::graph::traits::{Graph, MutableGraph, VertexId, Weight};

/// A directed graph over arbitrary vertex identifiers, using adjacency lists.
///
/// Invariant: every vertex referenced by any edge endpoint is a key in the
/// adjacency map (isolated vertices included, with an empty edge list), so
/// lookups during relaxation never miss. Vertex insertion order is retained
/// for deterministic edge iteration.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Outgoing edges for each vertex: vertex -> [(target, weight)]
    outgoing_edges: HashMap<V, Vec<(V, W)>>,

    /// Vertices in first-insertion order
    order: Vec<V>,
}

impl<V, W> AdjacencyGraph<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            outgoing_edges: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Creates a graph pre-sized for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        AdjacencyGraph {
            outgoing_edges: HashMap::with_capacity(vertices),
            order: Vec::with_capacity(vertices),
        }
    }

    /// Returns true if no edge in the graph has a negative weight.
    ///
    /// Dijkstra's relaxation is only correct under this condition; callers
    /// feeding untrusted inputs to it should check first.
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .values()
            .all(|edges| edges.iter().all(|(_, w)| *w >= W::zero()))
    }

    /// Returns all vertices sorted by their natural order
    pub fn sorted_vertices(&self) -> Vec<V> {
        let mut vertices = self.order.clone();
        vertices.sort();
        vertices
    }
}

impl<V, W> Default for AdjacencyGraph<V, W>
where
    V: VertexId,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for AdjacencyGraph<V, W>
where
    V: VertexId + 'static,
    W: Weight + 'static,
{
    fn vertex_count(&self) -> usize {
        self.order.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.order.iter())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (V, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.outgoing_edges.contains_key(vertex)
    }
}

impl<V, W> MutableGraph<V, W> for AdjacencyGraph<V, W>
where
    V: VertexId + 'static,
    W: Weight + 'static,
{
    fn add_vertex(&mut self, vertex: V) {
        if !self.outgoing_edges.contains_key(&vertex) {
            self.outgoing_edges.insert(vertex.clone(), Vec::new());
            self.order.push(vertex);
        }
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        if let Some(edges) = self.outgoing_edges.get_mut(&from) {
            edges.push((to, weight));
        }
    }
}

use waypoint::graph::{Graph, GridMap, MutableGraph, Terrain};
use waypoint::AdjacencyGraph;

#[test]
fn terrain_costs_match_symbols() {
    assert_eq!(Terrain::from_symbol('.').entry_cost(), Some(1));
    assert_eq!(Terrain::from_symbol('~').entry_cost(), Some(3));
    assert_eq!(Terrain::from_symbol('S').entry_cost(), Some(1));
    assert_eq!(Terrain::from_symbol('G').entry_cost(), Some(1));
    assert_eq!(Terrain::from_symbol('#').entry_cost(), None);
}

#[test]
fn edges_are_weighted_by_destination_cost() {
    let map = GridMap::from_rows(&["S~", ".G"]).unwrap();
    let graph = map.to_graph();

    // Moving into the difficult cell costs 3 from anywhere; leaving it is
    // priced by the cell entered, not the cell left.
    let into_difficult: Vec<_> = graph
        .outgoing_edges(&(0, 0))
        .filter(|(to, _)| *to == (0, 1))
        .collect();
    assert_eq!(into_difficult, vec![((0, 1), 3)]);

    let out_of_difficult: Vec<_> = graph
        .outgoing_edges(&(0, 1))
        .filter(|(to, _)| *to == (1, 1))
        .collect();
    assert_eq!(out_of_difficult, vec![((1, 1), 1)]);
}

#[test]
fn obstacles_generate_no_edges_either_way() {
    let map = GridMap::from_rows(&["S#G"]).unwrap();
    let graph = map.to_graph();

    assert!(!graph.has_vertex(&(0, 1)));
    assert_eq!(graph.outgoing_edges(&(0, 0)).count(), 0);
    assert_eq!(graph.outgoing_edges(&(0, 2)).count(), 0);
}

#[test]
fn adjacency_is_orthogonal_only() {
    let map = GridMap::from_rows(&["S.", ".G"]).unwrap();
    let graph = map.to_graph();

    // No diagonal edge from the start corner to the goal corner.
    assert!(graph.outgoing_edges(&(0, 0)).all(|(to, _)| to != (1, 1)));
    assert_eq!(graph.outgoing_edges(&(0, 0)).count(), 2);
}

#[test]
fn walled_in_cells_remain_vertices() {
    let map = GridMap::from_rows(&["S#G", "###"]).unwrap();
    let graph = map.to_graph();

    assert!(graph.has_vertex(&(0, 0)));
    assert!(graph.has_vertex(&(0, 2)));
}

#[test]
fn graph_invariant_holds_for_every_edge_endpoint() {
    let map = GridMap::from_rows(&["S.~", ".#.", "~.G"]).unwrap();
    let graph = map.to_graph();

    let vertices: Vec<_> = graph.vertices().cloned().collect();
    for vertex in &vertices {
        for (target, _) in graph.outgoing_edges(vertex) {
            assert!(graph.has_vertex(&target));
        }
    }
}

#[test]
fn undirected_insertion_keeps_endpoints_registered() {
    let mut graph: AdjacencyGraph<String, i64> = AdjacencyGraph::new();
    graph.add_undirected_edge("hub".to_string(), "leaf".to_string(), 2);
    graph.add_vertex("lone".to_string());

    assert_eq!(graph.vertex_count(), 3);
    assert!(graph.has_vertex(&"lone".to_string()));
    assert_eq!(graph.sorted_vertices(), vec!["hub", "leaf", "lone"]);
}

use std::io::Cursor;
use std::path::Path;

use waypoint::input::{parse_directed, parse_grid, parse_undirected};
use waypoint::scenario::{
    find_central_vertex, find_grid_route, find_route, GridRouteOutcome, RouteOutcome,
};

fn undirected(text: &str) -> waypoint::AdjacencyGraph<String, i64> {
    parse_undirected(&mut Cursor::new(text), Path::new("<test>")).unwrap()
}

fn directed(text: &str) -> waypoint::AdjacencyGraph<usize, i64> {
    parse_directed(&mut Cursor::new(text), Path::new("<test>")).unwrap()
}

fn grid(text: &str) -> waypoint::GridMap {
    parse_grid(&mut Cursor::new(text), Path::new("<test>")).unwrap()
}

const RING_GRAPH: &str = "4 4\nA B 1\nB C 2\nC D 1\nA D 5\n";

#[test]
fn central_vertex_of_ring_graph() {
    let graph = undirected(RING_GRAPH);
    let report = find_central_vertex(&graph).unwrap();

    // B reaches A:1, C:2, D:3 for a total of 6, beating every other vertex.
    assert_eq!(report.central, "B");
    assert_eq!(report.central_cost, 6);
    assert_eq!(report.farthest, "D");
    assert_eq!(report.farthest_distance, 3);

    assert_eq!(report.vertices, vec!["A", "B", "C", "D"]);
    assert_eq!(report.matrix["A"]["D"], 4);
    assert_eq!(report.matrix["D"]["A"], 4);
}

#[test]
fn central_vertex_ignores_unreachable_components() {
    // X and Y are a separate component; their mutual distances still count,
    // but distances across components contribute nothing to any total.
    let graph = undirected("6 3\nA B 1\nB C 1\nX Y 10\n");
    let report = find_central_vertex(&graph).unwrap();

    assert_eq!(report.central, "B");
    assert_eq!(report.central_cost, 2);
    assert_eq!(report.central_distances.get("X"), None);
    assert_eq!(report.matrix["X"]["Y"], 10);
}

#[test]
fn route_prefers_negative_shortcut() {
    let graph = directed("3 3\n0 1 4\n1 2 -2\n0 2 5\n");
    let outcome = find_route(&graph, 0, 2).unwrap();

    assert_eq!(
        outcome,
        RouteOutcome::Path {
            cost: 2,
            vertices: vec![0, 1, 2]
        }
    );
}

#[test]
fn route_reports_negative_cycle() {
    let graph = directed("3 3\n0 1 1\n1 2 -3\n2 1 1\n");
    assert_eq!(find_route(&graph, 0, 2).unwrap(), RouteOutcome::NegativeCycle);
}

#[test]
fn route_reports_unreachable_goal() {
    let graph = directed("4 2\n0 1 3\n1 2 3\n");
    assert_eq!(find_route(&graph, 0, 3).unwrap(), RouteOutcome::Unreachable);
}

#[test]
fn grid_route_avoids_difficult_terrain() {
    let map = grid("3 3\nS..\n.~.\n..G\n");
    let outcome = find_grid_route(&map).unwrap();

    // Four unit moves around the '~' cell beat three moves through it (cost 5).
    match outcome {
        GridRouteOutcome::Path { cost, cells } => {
            assert_eq!(cost, 4);
            assert_eq!(cells.first(), Some(&(0, 0)));
            assert_eq!(cells.last(), Some(&(2, 2)));
            assert_eq!(cells.len(), 5);
            assert!(!cells.contains(&(1, 1)));
        }
        other => panic!("expected a path, got {:?}", other),
    }
}

#[test]
fn grid_route_takes_difficult_terrain_when_cheaper() {
    let map = grid("3 3\n###\nS~G\n###\n");
    let outcome = find_grid_route(&map).unwrap();

    match outcome {
        GridRouteOutcome::Path { cost, cells } => {
            assert_eq!(cost, 4); // into '~' (3) then into 'G' (1)
            assert_eq!(cells, vec![(1, 0), (1, 1), (1, 2)]);
        }
        other => panic!("expected a path, got {:?}", other),
    }
}

#[test]
fn grid_route_reports_walled_off_goal() {
    let map = grid("3 3\nS.#\n..#\n##G\n");
    assert_eq!(find_grid_route(&map).unwrap(), GridRouteOutcome::Unreachable);
}

#[test]
fn scenarios_are_deterministic_across_runs() {
    let first = find_central_vertex(&undirected(RING_GRAPH)).unwrap();
    let second = find_central_vertex(&undirected(RING_GRAPH)).unwrap();
    assert_eq!(first, second);

    let graph_text = "5 6\n0 1 2\n0 2 2\n1 3 2\n2 3 2\n3 4 1\n0 4 9\n";
    let first = find_route(&directed(graph_text), 0, 4).unwrap();
    let second = find_route(&directed(graph_text), 0, 4).unwrap();
    assert_eq!(first, second);
}

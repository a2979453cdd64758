use std::io::Cursor;
use std::path::Path;

use waypoint::graph::{Graph, Terrain};
use waypoint::input::{parse_directed, parse_grid, parse_undirected, read_undirected};
use waypoint::Error;

#[test]
fn undirected_rows_insert_both_directions() {
    let text = "2 1\nA B 7\n";
    let graph = parse_undirected(&mut Cursor::new(text), Path::new("<test>")).unwrap();

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 2);
    let from_b: Vec<_> = graph.outgoing_edges(&"B".to_string()).collect();
    assert_eq!(from_b, vec![("A".to_string(), 7)]);
}

#[test]
fn malformed_rows_are_skipped_not_fatal() {
    let text = "4 4\nA B 1\nB C\nC D x\nC D 2\n";
    let graph = parse_undirected(&mut Cursor::new(text), Path::new("<test>")).unwrap();

    // Two valid rows survive: A-B and C-D.
    assert_eq!(graph.edge_count(), 4);
    assert!(graph.has_vertex(&"D".to_string()));
}

#[test]
fn missing_header_is_fatal() {
    let err = parse_undirected(&mut Cursor::new(""), Path::new("<test>")).unwrap_err();
    assert!(matches!(err, Error::MalformedHeader { line: 1, .. }));

    let err = parse_undirected(&mut Cursor::new("abc\n"), Path::new("<test>")).unwrap_err();
    assert!(matches!(err, Error::MalformedHeader { line: 1, .. }));
}

#[test]
fn missing_file_reports_path() {
    let err = read_undirected("/no/such/file.txt").unwrap_err();
    match err {
        Error::Io { path, .. } => assert_eq!(path, "/no/such/file.txt"),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn directed_graph_materializes_isolated_vertices() {
    let text = "5 2\n0 1 4\n1 2 -2\n";
    let graph = parse_directed(&mut Cursor::new(text), Path::new("<test>")).unwrap();

    // Vertices 3 and 4 carry no edges but still exist.
    assert_eq!(graph.vertex_count(), 5);
    assert!(graph.has_vertex(&4));
    assert_eq!(graph.outgoing_edges(&4).count(), 0);
}

#[test]
fn directed_rows_with_bad_indices_are_skipped() {
    let text = "3 3\n0 1 4\nx 2 1\n1 2 5\n";
    let graph = parse_directed(&mut Cursor::new(text), Path::new("<test>")).unwrap();
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn grid_dimensions_come_from_rows_not_header() {
    // Header claims 9x9; the real map is 2x3 and blank lines are ignored.
    let text = "9 9\n\nS.G\n...\n\n";
    let map = parse_grid(&mut Cursor::new(text), Path::new("<test>")).unwrap();

    assert_eq!(map.rows(), 2);
    assert_eq!(map.start(), (0, 0));
    assert_eq!(map.goal(), (0, 2));
}

#[test]
fn grid_requires_exactly_one_start_and_goal() {
    let err = parse_grid(&mut Cursor::new("1 3\n..G\n"), Path::new("<test>")).unwrap_err();
    assert!(matches!(err, Error::MissingMarker('S')));

    let err = parse_grid(&mut Cursor::new("1 4\nS.SG\n"), Path::new("<test>")).unwrap_err();
    assert!(matches!(err, Error::DuplicateMarker('S')));

    let err = parse_grid(&mut Cursor::new("2 3\nS.G\n..G\n"), Path::new("<test>")).unwrap_err();
    assert!(matches!(err, Error::DuplicateMarker('G')));
}

#[test]
fn unknown_terrain_symbols_fall_back_to_normal() {
    let map = parse_grid(&mut Cursor::new("1 3\nS?G\n"), Path::new("<test>")).unwrap();
    assert_eq!(map.terrain((0, 1)), Some(Terrain::Normal));
}

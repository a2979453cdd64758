//! Readers for the three plain-text input formats.
//!
//! Each format starts with a `<count> <count>` header line followed by
//! whitespace-separated data rows. Parsing works on any [`BufRead`] so tests
//! can feed strings; the `read_*` wrappers open files and attach the path to
//! I/O errors. Malformed data rows are recoverable: they are skipped with a
//! warning naming the line and reason, and construction continues.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::graph::{AdjacencyGraph, GridMap, MutableGraph};
use crate::{Error, Result};

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path).map(BufReader::new).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })
}

fn read_line(reader: &mut impl BufRead, path: &Path) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = reader.read_line(&mut line).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok((bytes > 0).then_some(line))
}

/// Parses a `<left> <right>` header line into its two counts
fn parse_header(line: Option<&str>) -> Result<(usize, usize)> {
    let line = line.ok_or_else(|| Error::MalformedHeader {
        line: 1,
        reason: "file is empty".to_string(),
    })?;
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [left, right] = tokens[..] else {
        return Err(Error::MalformedHeader {
            line: 1,
            reason: format!("expected two counts, got {} tokens", tokens.len()),
        });
    };
    let parse = |token: &str| {
        token.parse::<usize>().map_err(|_| Error::MalformedHeader {
            line: 1,
            reason: format!("'{}' is not a non-negative integer", token),
        })
    };
    Ok((parse(left)?, parse(right)?))
}

/// Splits an edge row into its three tokens, or reports why it was skipped
fn edge_tokens(line: &str, line_no: usize) -> Option<(&str, &str, i64)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }
    let [u, v, cost] = tokens[..] else {
        warn!("Skipping line {}: expected 3 tokens, got {}", line_no, tokens.len());
        return None;
    };
    match cost.parse::<i64>() {
        Ok(cost) => Some((u, v, cost)),
        Err(_) => {
            warn!("Skipping line {}: cost '{}' is not an integer", line_no, cost);
            None
        }
    }
}

/// Parses an undirected label-keyed weighted graph.
///
/// Header `<vertexCount> <edgeCount>`, then `<u> <v> <cost>` rows; each row
/// inserts the edge in both directions.
pub fn parse_undirected(reader: &mut impl BufRead, path: &Path) -> Result<AdjacencyGraph<String, i64>> {
    let header = read_line(reader, path)?;
    let (_vertices, _edges) = parse_header(header.as_deref())?;

    let mut graph = AdjacencyGraph::new();
    let mut line_no = 1;
    while let Some(line) = read_line(reader, path)? {
        line_no += 1;
        if let Some((u, v, cost)) = edge_tokens(&line, line_no) {
            graph.add_undirected_edge(u.to_string(), v.to_string(), cost);
        }
    }
    Ok(graph)
}

/// Parses a directed index-keyed weighted graph; costs may be negative.
///
/// All of `0..vertexCount` are materialized as vertices so that isolated
/// indices still appear in distance tables.
pub fn parse_directed(reader: &mut impl BufRead, path: &Path) -> Result<AdjacencyGraph<usize, i64>> {
    let header = read_line(reader, path)?;
    let (vertices, _edges) = parse_header(header.as_deref())?;

    let mut graph = AdjacencyGraph::with_capacity(vertices);
    for v in 0..vertices {
        graph.add_vertex(v);
    }

    let mut line_no = 1;
    while let Some(line) = read_line(reader, path)? {
        line_no += 1;
        let Some((origin, dest, cost)) = edge_tokens(&line, line_no) else {
            continue;
        };
        match (origin.parse::<usize>(), dest.parse::<usize>()) {
            (Ok(origin), Ok(dest)) => graph.add_edge(origin, dest, cost),
            _ => warn!("Skipping line {}: endpoints must be vertex indices", line_no),
        }
    }
    Ok(graph)
}

/// Parses a terrain grid.
///
/// The `<rows> <cols>` header is advisory: actual dimensions come from the
/// non-blank lines that follow, and a mismatch only warns.
pub fn parse_grid(reader: &mut impl BufRead, path: &Path) -> Result<GridMap> {
    let header = read_line(reader, path)?;
    let (rows, _cols) = parse_header(header.as_deref())?;

    let mut lines = Vec::new();
    while let Some(line) = read_line(reader, path)? {
        let trimmed = line.trim_end().to_string();
        if !trimmed.is_empty() {
            lines.push(trimmed);
        }
    }
    if lines.len() != rows {
        warn!("Header declares {} rows but file has {}", rows, lines.len());
    }

    GridMap::from_rows(&lines)
}

/// Reads an undirected graph file (scenario: central vertex)
pub fn read_undirected(path: impl AsRef<Path>) -> Result<AdjacencyGraph<String, i64>> {
    let path = path.as_ref();
    parse_undirected(&mut open(path)?, path)
}

/// Reads a directed graph file (scenario: negative-tolerant routing)
pub fn read_directed(path: impl AsRef<Path>) -> Result<AdjacencyGraph<usize, i64>> {
    let path = path.as_ref();
    parse_directed(&mut open(path)?, path)
}

/// Reads a terrain grid file (scenario: grid routing)
pub fn read_grid(path: impl AsRef<Path>) -> Result<GridMap> {
    let path = path.as_ref();
    parse_grid(&mut open(path)?, path)
}

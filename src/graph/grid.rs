use log::warn;

use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::traits::MutableGraph;
use crate::{Error, Result};

/// Grid cell coordinate as (row, col)
pub type Coord = (usize, usize);

/// Terrain symbol for the start cell
pub const START_CELL: char = 'S';
/// Terrain symbol for the goal cell
pub const GOAL_CELL: char = 'G';
/// Terrain symbol for an impassable cell
pub const OBSTACLE_CELL: char = '#';
/// Terrain symbol for a normal cell
pub const NORMAL_CELL: char = '.';
/// Terrain symbol for a difficult cell
pub const DIFFICULT_CELL: char = '~';

/// A terrain type on the grid map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Start,
    Goal,
    Normal,
    Difficult,
    Obstacle,
}

impl Terrain {
    /// Parses a terrain symbol; unknown symbols fall back to normal terrain
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            START_CELL => Terrain::Start,
            GOAL_CELL => Terrain::Goal,
            OBSTACLE_CELL => Terrain::Obstacle,
            DIFFICULT_CELL => Terrain::Difficult,
            NORMAL_CELL => Terrain::Normal,
            other => {
                warn!("Unknown terrain symbol '{}', treating as normal cell", other);
                Terrain::Normal
            }
        }
    }

    /// Cost of moving into a cell of this terrain, or `None` if impassable
    pub fn entry_cost(&self) -> Option<i64> {
        match self {
            Terrain::Start | Terrain::Goal | Terrain::Normal => Some(1),
            Terrain::Difficult => Some(3),
            Terrain::Obstacle => None,
        }
    }
}

/// A two-dimensional terrain map with one start and one goal cell.
///
/// The grid is not a graph representation of its own: `to_graph` derives a
/// plain directed graph from cell adjacency, and the shortest-path engine
/// runs on that, oblivious to grids.
#[derive(Debug, Clone)]
pub struct GridMap {
    cells: Vec<Vec<Terrain>>,
    start: Coord,
    goal: Coord,
}

impl GridMap {
    /// Builds a grid from symbol rows, validating start/goal cardinality.
    ///
    /// Expects exactly one `S` and one `G` among the rows; anything else is
    /// an error because the routing scenario has no meaningful interpretation
    /// for it.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let mut cells = Vec::with_capacity(rows.len());
        let mut start = None;
        let mut goal = None;

        for (r, row) in rows.iter().enumerate() {
            let mut parsed = Vec::new();
            for (c, symbol) in row.as_ref().chars().enumerate() {
                let terrain = Terrain::from_symbol(symbol);
                match terrain {
                    Terrain::Start if start.replace((r, c)).is_some() => {
                        return Err(Error::DuplicateMarker(START_CELL));
                    }
                    Terrain::Goal if goal.replace((r, c)).is_some() => {
                        return Err(Error::DuplicateMarker(GOAL_CELL));
                    }
                    _ => {}
                }
                parsed.push(terrain);
            }
            cells.push(parsed);
        }

        let start = start.ok_or(Error::MissingMarker(START_CELL))?;
        let goal = goal.ok_or(Error::MissingMarker(GOAL_CELL))?;
        Ok(GridMap { cells, start, goal })
    }

    /// Coordinate of the start cell
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Coordinate of the goal cell
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Terrain at a coordinate, if it lies on the map
    pub fn terrain(&self, coord: Coord) -> Option<Terrain> {
        self.cells.get(coord.0).and_then(|row| row.get(coord.1)).copied()
    }

    /// Derives the directed graph of legal moves between passable cells.
    ///
    /// Every passable cell gets up to 4 outgoing edges to its orthogonal
    /// passable neighbors, each weighted by the destination cell's entry
    /// cost: moving into difficult terrain costs more no matter which cell
    /// is left. Obstacle cells get no edges in either direction.
    pub fn to_graph(&self) -> AdjacencyGraph<Coord, i64> {
        let mut graph = AdjacencyGraph::new();
        const MOVES: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

        for (r, row) in self.cells.iter().enumerate() {
            for (c, terrain) in row.iter().enumerate() {
                if terrain.entry_cost().is_none() {
                    continue;
                }
                // Passable cells exist as vertices even when walled in.
                graph.add_vertex((r, c));

                for (dr, dc) in MOVES {
                    let nr = r as i64 + dr;
                    let nc = c as i64 + dc;
                    if nr < 0 || nc < 0 {
                        continue;
                    }
                    let neighbor = (nr as usize, nc as usize);
                    if let Some(cost) = self.terrain(neighbor).and_then(|t| t.entry_cost()) {
                        graph.add_edge((r, c), neighbor, cost);
                    }
                }
            }
        }

        graph
    }
}

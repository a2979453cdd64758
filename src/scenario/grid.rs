use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::{Coord, GridMap};
use crate::{Dijkstra, Result};

/// Outcome of a grid route query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridRouteOutcome {
    /// A path from start to goal exists, as a cell sequence with total cost
    Path { cost: i64, cells: Vec<Coord> },
    /// The goal is walled off from the start
    Unreachable,
}

/// Routes from the grid's start cell to its goal cell.
///
/// The grid is lowered to a plain directed graph (edges weighted by the
/// destination cell's terrain cost) and searched with the goal-directed
/// priority-queue engine, which stops as soon as the goal is settled.
pub fn find_grid_route(map: &GridMap) -> Result<GridRouteOutcome> {
    let graph = map.to_graph();
    let engine = Dijkstra::to_goal(map.goal());
    let result = engine.compute_shortest_paths(&graph, &map.start())?;

    match (result.distance(&map.goal()), result.path_to(&map.goal())) {
        (Some(cost), Some(cells)) => Ok(GridRouteOutcome::Path { cost, cells }),
        _ => Ok(GridRouteOutcome::Unreachable),
    }
}

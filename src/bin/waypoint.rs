use std::env;
use std::process;

use colored::Colorize;

use waypoint::graph::Graph;
use waypoint::scenario::{
    find_central_vertex, find_grid_route, find_route, CentralReport, GridRouteOutcome,
    RouteOutcome,
};
use waypoint::{input, Result};

fn usage() -> ! {
    eprintln!("Usage:");
    eprintln!("  waypoint central <graph-file>");
    eprintln!("  waypoint route <graph-file> [source] [goal]");
    eprintln!("  waypoint grid <grid-file>");
    process::exit(2);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let outcome = match args.get(1).map(String::as_str) {
        Some("central") => args.get(2).map(|path| run_central(path)),
        Some("route") => args.get(2).map(|path| run_route(path, &args[3..])),
        Some("grid") => args.get(2).map(|path| run_grid(path)),
        _ => None,
    };

    match outcome {
        None => usage(),
        Some(Ok(())) => {}
        Some(Err(err)) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            process::exit(1);
        }
    }
}

fn run_central(path: &str) -> Result<()> {
    let graph = input::read_undirected(path)?;
    let report = find_central_vertex(&graph)?;
    print_central(&report);
    Ok(())
}

fn print_central(report: &CentralReport<String>) {
    println!(
        "Central vertex: {} (total cost {})",
        report.central.green().bold(),
        report.central_cost
    );

    let row = |distances: &std::collections::HashMap<String, i64>| -> Vec<String> {
        report
            .vertices
            .iter()
            .map(|v| match distances.get(v) {
                Some(d) => d.to_string(),
                None => "inf".to_string(),
            })
            .collect()
    };

    println!(
        "Distances from {}: [{}]",
        report.central,
        row(&report.central_distances).join(", ")
    );
    println!(
        "Farthest vertex: {} at distance {}",
        report.farthest.yellow(),
        report.farthest_distance
    );

    println!("\nAll-pairs distance matrix:");
    println!("{}\t{}", "from".bold(), report.vertices.join("\t"));
    for candidate in &report.vertices {
        println!("{}\t{}", candidate, row(&report.matrix[candidate]).join("\t"));
    }
}

fn run_route(path: &str, rest: &[String]) -> Result<()> {
    let graph = input::read_directed(path)?;

    let parse_vertex = |arg: Option<&String>, default: usize| -> usize {
        match arg {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                eprintln!("{} '{}' is not a vertex index", "error:".red().bold(), raw);
                process::exit(2);
            }),
            None => default,
        }
    };
    let source = parse_vertex(rest.first(), 0);
    let goal = parse_vertex(rest.get(1), graph.vertex_count().saturating_sub(1));

    match find_route(&graph, source, goal)? {
        RouteOutcome::Path { cost, vertices } => {
            println!("Total path cost: {}", cost.to_string().green().bold());
            let steps: Vec<String> = vertices.iter().map(|v| v.to_string()).collect();
            println!("Shortest path: {}", steps.join(" -> "));
        }
        RouteOutcome::Unreachable => {
            println!("No path exists from vertex {} to vertex {}.", source, goal);
        }
        RouteOutcome::NegativeCycle => {
            println!(
                "{}",
                "The graph contains a negative-weight cycle; shortest distances are undefined."
                    .red()
            );
        }
    }
    Ok(())
}

fn run_grid(path: &str) -> Result<()> {
    let map = input::read_grid(path)?;

    match find_grid_route(&map)? {
        GridRouteOutcome::Path { cost, cells } => {
            println!("Total path cost: {}", cost.to_string().green().bold());
            let steps: Vec<String> = cells
                .iter()
                .map(|(r, c)| format!("({}, {})", r, c))
                .collect();
            println!("{}", steps.join(" -> "));
        }
        GridRouteOutcome::Unreachable => {
            println!("No path exists from start to goal.");
        }
    }
    Ok(())
}

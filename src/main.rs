//! graph-kernels - run one graph algorithm and report the result.

mod cli;

use std::{fs, path::Path, process::ExitCode};

use clap::Parser;
use serde_json::json;

use cli::{Cli, Command, OutputFormat};
use graph_kernels::{
    algo::{self, coloring},
    datasets, logging, render,
    report::{ColoringReport, PathReport, RouteReport, TreeReport},
    Error, GraphKind, Result,
};
use graph_kernels::input::WeightMatrix;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Color { order } => run_color(cli, order),
        Command::Mst { csv, root } => run_mst(cli, csv, root.as_deref()),
        Command::Maze { start, goal } => run_maze(cli, start, goal),
        Command::Route { from, to } => run_route(cli, from, to),
    }
}

fn run_color(cli: &Cli, order: &str) -> Result<()> {
    let graph = datasets::coloring_grid()?;
    let (strategy, visit) = match order {
        "natural" => ("natural", coloring::natural_order(&graph)),
        "largest-first" => ("largest-first", coloring::largest_first_order(&graph)),
        list => ("custom", parse_order(list)?),
    };
    let colors = algo::color(&graph, Some(visit.as_slice()))?;

    match cli.format {
        OutputFormat::Text => println!(
            "{}",
            ColoringReport {
                graph: &graph,
                coloring: &colors,
                strategy,
            }
        ),
        OutputFormat::Json => print_json(&json!({
            "strategy": strategy,
            "colors": colors,
            "num_colors": colors.num_colors(),
            "proper": colors.is_proper(&graph),
        }))?,
    }
    write_dot(cli, || render::coloring(&graph, &colors, "Greedy coloring"))
}

fn parse_order(list: &str) -> Result<Vec<u32>> {
    list.split(',')
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|_| Error::Usage(format!("'{v}' is not a vertex of the grid")))
        })
        .collect()
}

fn run_mst(cli: &Cli, csv: &Path, root: Option<&str>) -> Result<()> {
    let graph = WeightMatrix::from_csv_path(csv)?.to_graph(GraphKind::Undirected)?;
    let root = root.map(str::to_string);
    let tree = algo::minimum_spanning_tree(&graph, root.as_ref())?;

    match cli.format {
        OutputFormat::Text => println!("{}", TreeReport { tree: &tree }),
        OutputFormat::Json => print_json(&json!({
            "root": tree.root(),
            "edges": tree.edges(),
            "total_weight": tree.total_weight(),
        }))?,
    }
    write_dot(cli, || {
        render::spanning_tree(&graph, &tree, "Minimum spanning tree")
    })
}

fn run_maze(cli: &Cli, start: &str, goal: &str) -> Result<()> {
    let graph = datasets::maze()?;
    let path = algo::find_path(&graph, &start, &goal)?;
    let explored = match path {
        Some(_) => Vec::new(),
        None => algo::reachable(&graph, &start)?,
    };

    match cli.format {
        OutputFormat::Text => println!(
            "{}",
            PathReport {
                start: &start,
                goal: &goal,
                path: path.as_ref(),
                explored: &explored,
            }
        ),
        OutputFormat::Json => print_json(&json!({
            "start": start,
            "goal": goal,
            "path": path,
            "reachable": path.is_none().then_some(explored.len()),
        }))?,
    }
    write_dot(cli, || match &path {
        Some(path) => render::path(&graph, path, "Maze solution (DFS)"),
        None => render::plain(&graph, "Maze"),
    })
}

fn run_route(cli: &Cli, from: &str, to: &str) -> Result<()> {
    let graph = datasets::coastal_road_map()?;
    let from = from.to_string();
    let to = to.to_string();
    if !graph.contains(&to) {
        return Err(graph_kernels::GraphError::MissingVertex(format!("{to:?}")).into());
    }
    let paths = algo::shortest_paths(&graph, &from)?;
    let route = paths.path_to(&to);

    match cli.format {
        OutputFormat::Text => println!(
            "{}",
            RouteReport {
                paths: &paths,
                target: &to,
                unit: "km",
            }
        ),
        OutputFormat::Json => print_json(&json!({
            "from": from,
            "to": to,
            "distance_km": paths.distance(&to),
            "path": route,
        }))?,
    }
    write_dot(cli, || match &route {
        Some(route) => render::path(&graph, route, &format!("Best route: {from} to {to}")),
        None => render::plain(&graph, "Coastal road map"),
    })
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn write_dot(cli: &Cli, dot: impl FnOnce() -> String) -> Result<()> {
    let Some(path) = &cli.dot else {
        return Ok(());
    };
    fs::write(path, dot()).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), "diagram written");
    Ok(())
}

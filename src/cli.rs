use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use graph_kernels::datasets::{MAZE_GOAL, MAZE_START, ROUTE_FROM, ROUTE_TO};

#[derive(Parser, Debug)]
#[command(name = "graph-kernels", version, about = "Run classic graph algorithms on bundled or CSV graphs")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. `trace` or `graph_kernels=debug`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Result format on stdout
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text, env = "GRAPH_KERNELS_FORMAT")]
    pub format: OutputFormat,

    /// Also write a Graphviz DOT diagram of the result to this file
    #[arg(long, global = true)]
    pub dot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Greedy coloring of the bundled 16-vertex grid
    Color {
        /// `natural`, `largest-first`, or a comma-separated vertex list
        #[arg(long, default_value = "natural")]
        order: String,
    },
    /// Minimum spanning tree (Prim) of a weight-matrix CSV file
    Mst {
        csv: PathBuf,

        /// Vertex to grow the tree from; defaults to the first one
        #[arg(long)]
        root: Option<String>,
    },
    /// Depth-first path through the bundled maze
    Maze {
        #[arg(long, default_value = MAZE_START)]
        start: String,

        #[arg(long, default_value = MAZE_GOAL)]
        goal: String,
    },
    /// Shortest route (Dijkstra) on the bundled coastal road map
    Route {
        #[arg(long, default_value = ROUTE_FROM)]
        from: String,

        #[arg(long, default_value = ROUTE_TO)]
        to: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn route_defaults() {
        let cli = Cli::try_parse_from(["graph-kernels", "route"]).unwrap();
        match cli.command {
            Command::Route { from, to } => {
                assert_eq!(from, ROUTE_FROM);
                assert_eq!(to, ROUTE_TO);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["graph-kernels", "mst", "g.csv", "--root", "B", "--format", "json"])
            .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Command::Mst { root: Some(ref r), .. } if r == "B"));
    }
}

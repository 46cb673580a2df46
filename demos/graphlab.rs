//! Runs one of the graph engines on the demo data.
//!
//! This example demonstrates how to:
//! - Run a shortest-path, traversal, spanning-tree or PERT engine
//! - Highlight the engine's result in a DOT rendering of the graph
//! - Turn on engine tracing and print per-engine timings
//!
//! Examples:
//!
//! ```text
//! cargo run --example graphlab -- dijkstra --source Casablanca --target Oujda
//! cargo run --example graphlab -- kruskal --dot mst.dot
//! cargo run --example graphlab -- pert --verbose --timings
//! ```

use clap::{Parser, ValueEnum};
use graphlab::{
    WeightedGraph, bellman_ford, demo, dijkstra, floyd_warshall,
    highlight::{Highlight, Highlighted},
    mst, pert, search,
    tracing_support::{engine_timings, init_tracing},
};

/// Engine selector for CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Dijkstra,
    BellmanFord,
    FloydWarshall,
    Bfs,
    Dfs,
    Prim,
    Kruskal,
    /// Schedule the house-construction project
    Pert,
}

/// Run a graph engine on the 10-city demo graph or the demo project
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Engine to run
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Source (or start) city
    #[arg(short, long, default_value = "Casablanca")]
    source: String,

    /// Target city, for single-pair shortest paths
    #[arg(short, long, default_value = "Oujda")]
    target: String,

    /// Write the graph with the result highlighted as DOT ("-" for stdout)
    #[arg(long)]
    dot: Option<String>,

    /// Show engine debug events on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print the time spent in each engine
    #[arg(long)]
    timings: bool,
}

/// Runs the selected engine, prints its result and returns what to highlight.
fn run_engine(args: &Args) -> Result<Option<Highlight>, Box<dyn std::error::Error>> {
    let graph = demo::cities();
    let highlight = match args.algorithm {
        Algorithm::Dijkstra => {
            let path = dijkstra::shortest_path(graph, &args.source, &args.target)?;
            println!("{path}");
            Some(path.highlight())
        }
        Algorithm::BellmanFord => {
            let paths = bellman_ford::shortest_paths(graph, &args.source)?;
            print!("{paths}");
            let path = paths.path_to(&args.target)?;
            println!("{path}");
            Some(path.highlight())
        }
        Algorithm::FloydWarshall => {
            print!("{}", floyd_warshall::all_pairs_distances(graph));
            None
        }
        Algorithm::Bfs | Algorithm::Dfs => {
            let traversal = if matches!(args.algorithm, Algorithm::Bfs) {
                search::bfs(graph, &args.source)?
            } else {
                search::dfs(graph, &args.source)?
            };
            println!("{traversal}");
            Some(traversal.highlight())
        }
        Algorithm::Prim | Algorithm::Kruskal => {
            let tree = if matches!(args.algorithm, Algorithm::Prim) {
                mst::prim(graph, &args.source)?
            } else {
                mst::kruskal(graph)
            };
            println!("{tree}");
            Some(tree.highlight())
        }
        Algorithm::Pert => {
            let schedule = pert::schedule(&demo::house_construction())?;
            println!("{schedule}");
            None
        }
    };
    Ok(highlight)
}

#[cfg(feature = "dot")]
fn write_dot_output(
    path: &str,
    highlight: Option<&Highlight>,
) -> Result<(), Box<dyn std::error::Error>> {
    use std::fs::File;
    use std::io::{self, Write};

    let graph = demo::cities();
    if path == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        graphlab::dot::write_dot(graph, highlight, &mut handle)?;
        handle.flush()?;
    } else {
        let mut file = File::create(path)?;
        graphlab::dot::write_dot(graph, highlight, &mut file)?;
        eprintln!(
            "DOT file written; visualize it with: dot -Tpng {} -o {}.png",
            path,
            path.trim_end_matches(".dot")
        );
    }
    Ok(())
}

#[cfg(not(feature = "dot"))]
fn write_dot_output(
    _path: &str,
    _highlight: Option<&Highlight>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("DOT output requires the 'dot' feature to be enabled.");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    eprintln!(
        "Demo graph: {} cities, {} roads",
        demo::cities().num_vertices(),
        demo::cities().num_edges() / 2
    );
    let highlight = run_engine(&args)?;

    if let Some(ref path) = args.dot {
        write_dot_output(path, highlight.as_ref())?;
    }

    if args.timings {
        eprintln!("\nEngine timings:");
        for (name, total, calls) in engine_timings() {
            eprintln!("  {name:<16} {calls:>3} call(s) {total:?}");
        }
    }

    Ok(())
}

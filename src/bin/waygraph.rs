//! CLI entry point for the `waygraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use waygraph::cli::commands::{self, TourAlgorithm};
use waygraph::GraphError;

#[derive(Parser)]
#[command(
    name = "waygraph",
    about = "Waygraph CLI — shortest paths and travelling-salesman tours over weighted graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run Dijkstra between two vertices of a seeded random sparse graph
    ShortestPath {
        /// Start vertex (0-based)
        start: usize,
        /// End vertex (0-based)
        end: usize,
        /// Number of vertices
        #[arg(long, default_value = "10000")]
        vertices: usize,
        /// Out-edges generated per vertex
        #[arg(long, default_value = "5")]
        edges_per_vertex: usize,
        /// Maximum edge weight
        #[arg(long, default_value = "100.0")]
        max_weight: f64,
        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },
    /// Run tour heuristics over a seeded random complete graph
    Tour {
        /// Number of vertices
        #[arg(long, default_value = "100")]
        vertices: usize,
        /// Start vertex (0-based)
        #[arg(long, default_value = "0")]
        start: usize,
        /// Algorithm: greedy, two-opt, or both
        #[arg(long, default_value = "both")]
        algorithm: String,
        /// Maximum edge weight
        #[arg(long, default_value = "100.0")]
        max_weight: f64,
        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },
    /// Run the fixed demonstration graphs
    Demo {
        /// Start vertex key for the route demo (A-E)
        #[arg(long, default_value = "A")]
        from: String,
        /// End vertex key for the route demo (A-E)
        #[arg(long, default_value = "E")]
        to: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let result = match cli.command {
        Commands::ShortestPath {
            start,
            end,
            vertices,
            edges_per_vertex,
            max_weight,
            seed,
        } => commands::cmd_shortest_path(
            vertices,
            edges_per_vertex,
            max_weight,
            seed,
            start,
            end,
            json,
        ),
        Commands::Tour {
            vertices,
            start,
            algorithm,
            max_weight,
            seed,
        } => {
            let algorithm = match TourAlgorithm::from_name(&algorithm) {
                Some(a) => a,
                None => {
                    eprintln!("Invalid algorithm: {}", algorithm);
                    process::exit(3);
                }
            };
            commands::cmd_tour(vertices, max_weight, seed, start, algorithm, json)
        }
        Commands::Demo { from, to } => commands::cmd_demo(&from, &to, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidVertex(_) => 3,
            GraphError::UnknownVertex(_) => 4,
            GraphError::InvalidWeight(_) => 5,
        };
        process::exit(code);
    }
}

//! Waygraph — weighted adjacency-map graph engine.
//!
//! Stores vertices with weighted edges in an adjacency map and runs
//! single-source shortest-path queries (Dijkstra) and approximate
//! travelling-salesman tours (greedy nearest-neighbor plus 2-opt local
//! search) over it. Solvers borrow the graph immutably and return
//! independently-owned results; missing connectivity is signalled with
//! the [`NO_EDGE`] sentinel instead of an error.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    greedy_tour, shortest_path, tour_length, two_opt_tour, GraphBuilder, ShortestPath, Tour,
    WeightedGraph,
};
pub use types::{GraphError, GraphResult, VertexId, MAX_TWO_OPT_PASSES, NO_EDGE};

//! In-memory weighted graph and the algorithms that run over it.

pub mod builder;
pub mod shortest_path;
pub mod tour;
pub mod weighted_graph;

pub use builder::GraphBuilder;
pub use shortest_path::{shortest_path, ShortestPath};
pub use tour::{greedy_tour, tour_length, two_opt_tour, Tour};
pub use weighted_graph::WeightedGraph;

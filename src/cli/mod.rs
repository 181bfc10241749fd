//! Command-line interface support for the `waygraph` binary.

pub mod commands;

pub use commands::TourAlgorithm;

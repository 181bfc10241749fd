//! All data types for the waygraph library.

pub mod error;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use vertex::VertexId;

/// Sentinel weight meaning "no edge" (and, for solvers, "no path").
///
/// Stored edge weights are validated finite, so infinity is free to act
/// as the missing-edge value: sums over a route containing a missing
/// edge stay infinite instead of raising.
pub const NO_EDGE: f64 = f64::INFINITY;

/// Upper bound on 2-opt improvement passes.
pub const MAX_TWO_OPT_PASSES: usize = 100;

//! Error types for the waygraph library.

use std::fmt;

use thiserror::Error;

/// All errors that can occur in the waygraph library.
///
/// Missing connectivity is never an error: "no path" and "no edge" are
/// signalled through the [`NO_EDGE`](crate::types::NO_EDGE) sentinel so
/// that length arithmetic over incomplete graphs composes without
/// unwinding.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An operation referenced a vertex absent from the graph.
    #[error("Vertex {0} not in graph")]
    UnknownVertex(String),

    /// A key that cannot serve as a vertex identity (CLI/parse boundary;
    /// inside the library the `VertexId` bound enforces this at compile
    /// time).
    #[error("Invalid vertex key: {0}")]
    InvalidVertex(String),

    /// Edge weight outside the accepted range.
    #[error("Invalid edge weight {0}: must be finite and non-negative")]
    InvalidWeight(f64),
}

impl GraphError {
    /// Build an `UnknownVertex` error from any vertex key.
    pub fn unknown_vertex<V: fmt::Debug>(vertex: &V) -> Self {
        Self::UnknownVertex(format!("{:?}", vertex))
    }
}

/// Convenience result type for waygraph operations.
pub type GraphResult<T> = Result<T, GraphError>;

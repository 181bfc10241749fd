//! Core graph structure — adjacency map with weighted edges.

use std::collections::{HashMap, HashSet};

use crate::types::{GraphError, GraphResult, VertexId, NO_EDGE};

/// The core in-memory weighted graph: vertex -> neighbor -> edge weight.
///
/// Directed or undirected mode is fixed at construction. In undirected
/// mode every mutation keeps the (u, v) and (v, u) entries synchronized.
/// A vertex with no outgoing edges holds an empty neighbor map, not
/// absence.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedGraph<V: VertexId> {
    /// Adjacency map: vertex -> (neighbor -> weight).
    adjacency: HashMap<V, HashMap<V, f64>>,
    /// Whether edges are one-way.
    directed: bool,
}

impl<V: VertexId> WeightedGraph<V> {
    /// Create a new empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            adjacency: HashMap::new(),
            directed,
        }
    }

    /// Whether this graph was constructed in directed mode.
    pub fn directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges. In undirected mode a synchronized (u, v)/(v, u)
    /// pair counts as one edge.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.values().map(HashMap::len).sum();
        if self.directed {
            entries
        } else {
            let self_loops = self
                .adjacency
                .iter()
                .filter(|(v, neighbors)| neighbors.contains_key(*v))
                .count();
            (entries - self_loops) / 2 + self_loops
        }
    }

    /// Whether a vertex is present.
    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Iterate over all vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Iterate over all edges as (src, dest, weight). In undirected mode
    /// each edge is reported once, with src <= dest.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, f64)> {
        let directed = self.directed;
        self.adjacency
            .iter()
            .flat_map(|(src, neighbors)| {
                neighbors.iter().map(move |(dest, &weight)| (src, dest, weight))
            })
            .filter(move |(src, dest, _)| directed || src <= dest)
    }

    /// Add a vertex with an empty neighbor map. No-op if already present.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Set the weight of the src -> dest edge, overwriting any existing
    /// weight (upsert semantics). In undirected mode the dest -> src
    /// entry is set to the same weight.
    ///
    /// Fails with [`GraphError::UnknownVertex`] if either endpoint is
    /// absent, and with [`GraphError::InvalidWeight`] if the weight is
    /// negative, NaN or infinite (an infinite stored weight would be
    /// indistinguishable from the [`NO_EDGE`] sentinel).
    pub fn add_edge(&mut self, src: &V, dest: &V, weight: f64) -> GraphResult<()> {
        if !self.contains(src) {
            return Err(GraphError::unknown_vertex(src));
        }
        if !self.contains(dest) {
            return Err(GraphError::unknown_vertex(dest));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }

        if let Some(neighbors) = self.adjacency.get_mut(src) {
            neighbors.insert(dest.clone(), weight);
        }
        if !self.directed {
            if let Some(neighbors) = self.adjacency.get_mut(dest) {
                neighbors.insert(src.clone(), weight);
            }
        }
        Ok(())
    }

    /// Remove the src -> dest edge if present; silent no-op otherwise.
    /// In undirected mode the dest -> src entry is removed too.
    pub fn remove_edge(&mut self, src: &V, dest: &V) {
        if let Some(neighbors) = self.adjacency.get_mut(src) {
            neighbors.remove(dest);
        }
        if !self.directed {
            if let Some(neighbors) = self.adjacency.get_mut(dest) {
                neighbors.remove(src);
            }
        }
    }

    /// Remove a vertex and scrub it from every other vertex's neighbor
    /// map. No-op if absent.
    pub fn remove_vertex(&mut self, vertex: &V) {
        if self.adjacency.remove(vertex).is_some() {
            for neighbors in self.adjacency.values_mut() {
                neighbors.remove(vertex);
            }
        }
    }

    /// The set of neighbor identifiers of a vertex. Empty if the vertex
    /// is unknown or has no neighbors, never an error.
    pub fn adjacent(&self, vertex: &V) -> HashSet<V> {
        self.adjacency
            .get(vertex)
            .map(|neighbors| neighbors.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Iterate over (neighbor, weight) pairs of a vertex. Empty if the
    /// vertex is unknown. Borrowed fast path for the solvers; `adjacent`
    /// clones into an owned set.
    pub fn neighbors(&self, vertex: &V) -> impl Iterator<Item = (&V, f64)> {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flatten()
            .map(|(neighbor, &weight)| (neighbor, weight))
    }

    /// The stored weight of the src -> dest edge, or [`NO_EDGE`] if
    /// absent. This sentinel is how tour-length arithmetic detects
    /// broken tours without raising.
    pub fn edge_weight(&self, src: &V, dest: &V) -> f64 {
        self.adjacency
            .get(src)
            .and_then(|neighbors| neighbors.get(dest))
            .copied()
            .unwrap_or(NO_EDGE)
    }
}

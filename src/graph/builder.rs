//! Fluent construction and seeded random generation of graphs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{GraphResult, VertexId};

use super::WeightedGraph;

/// Fluent builder for constructing a [`WeightedGraph`].
///
/// Vertices and edges are accumulated first and validated together in
/// [`build`](GraphBuilder::build), so edges may be declared before their
/// endpoints.
pub struct GraphBuilder<V: VertexId> {
    directed: bool,
    vertices: Vec<V>,
    edges: Vec<(V, V, f64)>,
}

impl<V: VertexId> GraphBuilder<V> {
    /// Create a new builder.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Declare a vertex.
    pub fn vertex(&mut self, vertex: V) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    /// Declare an edge between two vertices.
    pub fn edge(&mut self, src: V, dest: V, weight: f64) -> &mut Self {
        self.edges.push((src, dest, weight));
        self
    }

    /// Build the final graph, validating all declared edges.
    pub fn build(self) -> GraphResult<WeightedGraph<V>> {
        let mut graph = WeightedGraph::new(self.directed);
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for (src, dest, weight) in self.edges {
            graph.add_edge(&src, &dest, weight)?;
        }
        Ok(graph)
    }
}

impl GraphBuilder<usize> {
    /// Generate a seeded directed sparse graph: `n` vertices, up to
    /// `edges_per_vertex` random out-edges each (self-edges and
    /// duplicate targets are skipped), weights drawn from
    /// `1.0..=max_weight`.
    pub fn random_sparse(
        n: usize,
        edges_per_vertex: usize,
        max_weight: f64,
        seed: u64,
    ) -> GraphResult<WeightedGraph<usize>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph = WeightedGraph::new(true);

        for i in 0..n {
            graph.add_vertex(i);
        }
        for i in 0..n {
            for _ in 0..edges_per_vertex {
                let dest = rng.gen_range(0..n);
                if dest != i {
                    let weight = rng.gen_range(1.0..=max_weight);
                    graph.add_edge(&i, &dest, weight)?;
                }
            }
        }

        log::debug!(
            "generated sparse graph: {} vertices, {} edges (seed {})",
            graph.vertex_count(),
            graph.edge_count(),
            seed
        );
        Ok(graph)
    }

    /// Generate a seeded undirected complete graph on `n` vertices,
    /// weights drawn from `1.0..=max_weight`.
    pub fn random_complete(
        n: usize,
        max_weight: f64,
        seed: u64,
    ) -> GraphResult<WeightedGraph<usize>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph = WeightedGraph::new(false);

        for i in 0..n {
            graph.add_vertex(i);
        }
        for i in 0..n {
            for j in i + 1..n {
                let weight = rng.gen_range(1.0..=max_weight);
                graph.add_edge(&i, &j, weight)?;
            }
        }

        log::debug!(
            "generated complete graph: {} vertices, {} edges (seed {})",
            graph.vertex_count(),
            graph.edge_count(),
            seed
        );
        Ok(graph)
    }
}

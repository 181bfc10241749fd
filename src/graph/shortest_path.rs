//! Single-source shortest path (Dijkstra).

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;

use crate::types::{GraphError, GraphResult, VertexId, NO_EDGE};

use super::WeightedGraph;

/// Result of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath<V> {
    /// Vertices from start to end inclusive. Empty when no path exists.
    pub path: Vec<V>,
    /// Total path weight. [`NO_EDGE`] when no path exists.
    pub distance: f64,
}

/// Priority-queue entry: a vertex with its tentative distance.
///
/// Ordering is reversed on distance so `BinaryHeap` acts as a min-heap.
/// Distances are finite sums of finite weights, so the `partial_cmp`
/// fallback to `Equal` is never hit in practice.
struct QueueEntry<V> {
    distance: f64,
    vertex: V,
}

impl<V> PartialEq for QueueEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl<V> Eq for QueueEntry<V> {}

impl<V> Ord for QueueEntry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
    }
}

impl<V> PartialOrd for QueueEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the shortest path between two vertices using Dijkstra's
/// algorithm.
///
/// The queue uses lazy deletion: a vertex may be pushed repeatedly with
/// successively better tentative distances, and stale entries are
/// discarded on pop. The search terminates as soon as `end` is popped as
/// the current minimum, which is final because edge weights are
/// non-negative.
///
/// Returns an empty path with the [`NO_EDGE`] distance when `end` is
/// unreachable; that is a valid outcome, not an error. Fails with
/// [`GraphError::UnknownVertex`] if either endpoint is absent.
pub fn shortest_path<V: VertexId>(
    graph: &WeightedGraph<V>,
    start: &V,
    end: &V,
) -> GraphResult<ShortestPath<V>> {
    if !graph.contains(start) {
        return Err(GraphError::unknown_vertex(start));
    }
    if !graph.contains(end) {
        return Err(GraphError::unknown_vertex(end));
    }

    // Early exit when start == end.
    if start == end {
        return Ok(ShortestPath {
            path: vec![start.clone()],
            distance: 0.0,
        });
    }

    let mut distances: HashMap<V, f64> = HashMap::new();
    let mut previous: HashMap<V, V> = HashMap::new();
    let mut visited: HashSet<V> = HashSet::new();
    let mut queue: BinaryHeap<QueueEntry<V>> = BinaryHeap::new();

    distances.insert(start.clone(), 0.0);
    queue.push(QueueEntry {
        distance: 0.0,
        vertex: start.clone(),
    });

    while let Some(QueueEntry { distance, vertex }) = queue.pop() {
        // Stale entry for an already-settled vertex.
        if visited.contains(&vertex) {
            continue;
        }
        visited.insert(vertex.clone());

        if &vertex == end {
            log::debug!("dijkstra settled target after {} vertices", visited.len());
            return Ok(ShortestPath {
                path: reconstruct_path(&previous, start, end),
                distance,
            });
        }

        // Stale entry superseded by a better distance found later.
        if distance > distances.get(&vertex).copied().unwrap_or(NO_EDGE) {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(&vertex) {
            if visited.contains(neighbor) {
                continue;
            }
            let candidate = distance + weight;
            if candidate < distances.get(neighbor).copied().unwrap_or(NO_EDGE) {
                distances.insert(neighbor.clone(), candidate);
                previous.insert(neighbor.clone(), vertex.clone());
                queue.push(QueueEntry {
                    distance: candidate,
                    vertex: neighbor.clone(),
                });
            }
        }
    }

    // Queue exhausted without reaching `end`.
    Ok(ShortestPath {
        path: Vec::new(),
        distance: NO_EDGE,
    })
}

/// Walk the predecessor map backward from `end` and reverse. Returns an
/// empty path if the walk does not reach `start`.
fn reconstruct_path<V: VertexId>(previous: &HashMap<V, V>, start: &V, end: &V) -> Vec<V> {
    let mut path = vec![end.clone()];
    let mut current = end;
    while let Some(prev) = previous.get(current) {
        path.push(prev.clone());
        current = prev;
    }
    path.reverse();

    if path.first() == Some(start) {
        path
    } else {
        Vec::new()
    }
}

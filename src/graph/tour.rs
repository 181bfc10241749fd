//! Travelling-salesman tour heuristics — greedy nearest-neighbor
//! construction and 2-opt local search.
//!
//! Both are heuristics with no optimality guarantee. 2-opt uses the
//! first-improvement strategy (restart the scan after every improving
//! swap) rather than best-improvement, so results are reproducible for a
//! given graph and start vertex.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::{GraphError, GraphResult, VertexId, MAX_TWO_OPT_PASSES, NO_EDGE};

use super::WeightedGraph;

/// Result of a tour query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour<V> {
    /// Total cycle weight. [`NO_EDGE`] when the graph lacks the
    /// connectivity for a full tour.
    pub distance: f64,
    /// Closed route: the start vertex is repeated at both ends, so a
    /// tour over N vertices has N + 1 entries. Empty when no tour
    /// exists.
    pub route: Vec<V>,
}

/// Build a tour with the greedy nearest-neighbor heuristic: from the
/// current vertex, always move to the closest unvisited vertex.
///
/// An empty graph yields an empty tour of distance 0; a single-vertex
/// graph yields `[start]` with distance 0. If at any step no unvisited
/// vertex is reachable from the current one, or the closing edge back
/// to `start` is missing, the graph lacks full connectivity and the
/// result is the [`NO_EDGE`] distance with an empty route, never a
/// partial tour.
pub fn greedy_tour<V: VertexId>(graph: &WeightedGraph<V>, start: &V) -> GraphResult<Tour<V>> {
    if graph.vertex_count() == 0 {
        return Ok(Tour {
            distance: 0.0,
            route: Vec::new(),
        });
    }
    if !graph.contains(start) {
        return Err(GraphError::unknown_vertex(start));
    }
    if graph.vertex_count() == 1 {
        return Ok(Tour {
            distance: 0.0,
            route: vec![start.clone()],
        });
    }

    let mut unvisited: HashSet<V> = graph
        .vertices()
        .filter(|v| *v != start)
        .cloned()
        .collect();
    let mut route = Vec::with_capacity(graph.vertex_count() + 1);
    route.push(start.clone());
    let mut current = start.clone();
    let mut total = 0.0;

    while !unvisited.is_empty() {
        let mut nearest: Option<V> = None;
        let mut nearest_weight = NO_EDGE;
        for candidate in &unvisited {
            let weight = graph.edge_weight(&current, candidate);
            if weight < nearest_weight {
                nearest_weight = weight;
                nearest = Some(candidate.clone());
            }
        }

        // No finite edge to any unvisited vertex: fail fast.
        let Some(next) = nearest else {
            return Ok(Tour {
                distance: NO_EDGE,
                route: Vec::new(),
            });
        };

        route.push(next.clone());
        total += nearest_weight;
        unvisited.remove(&next);
        current = next;
    }

    let closing = graph.edge_weight(&current, start);
    if closing == NO_EDGE {
        return Ok(Tour {
            distance: NO_EDGE,
            route: Vec::new(),
        });
    }
    total += closing;
    route.push(start.clone());

    Ok(Tour {
        distance: total,
        route,
    })
}

/// Build a greedy tour and refine it with 2-opt local search.
///
/// Each improving swap reverses the route segment between two indices,
/// replacing the pair of edges `(i-1, i)` and `(j, j+1)` with `(i-1, j)`
/// and `(i, j+1)`. The scan restarts after every swap and the whole
/// search is capped at [`MAX_TWO_OPT_PASSES`] passes, stopping earlier
/// once a full pass finds no strict improvement.
///
/// If the greedy seed already reports missing connectivity, that result
/// is returned unchanged.
pub fn two_opt_tour<V: VertexId>(graph: &WeightedGraph<V>, start: &V) -> GraphResult<Tour<V>> {
    let seed = greedy_tour(graph, start)?;
    if seed.distance == NO_EDGE || seed.route.len() < 3 {
        return Ok(seed);
    }

    // Work on the open route: drop the closing duplicate of `start`.
    let mut route = seed.route;
    route.pop();
    let n = route.len();

    let mut passes = 0;
    let mut improved = true;
    while improved && passes < MAX_TWO_OPT_PASSES {
        improved = false;
        passes += 1;

        'scan: for i in 1..n - 1 {
            for j in i + 1..n {
                let removed = graph.edge_weight(&route[i - 1], &route[i])
                    + graph.edge_weight(&route[j], &route[(j + 1) % n]);
                let added = graph.edge_weight(&route[i - 1], &route[j])
                    + graph.edge_weight(&route[i], &route[(j + 1) % n]);

                if added < removed {
                    route[i..=j].reverse();
                    improved = true;
                    break 'scan;
                }
            }
        }
    }
    log::debug!("2-opt finished after {} passes", passes);

    // Recompute around the final cycle; a reversal may have routed
    // through a missing edge on a non-complete graph.
    let total = tour_length(graph, &route);
    if total == NO_EDGE {
        return Ok(Tour {
            distance: NO_EDGE,
            route: Vec::new(),
        });
    }
    route.push(start.clone());

    Ok(Tour {
        distance: total,
        route,
    })
}

/// Total length of a cycle through the given route.
///
/// The route is OPEN: the closing repetition is omitted and the edge
/// from the last vertex back to the first is implicit, so `[A, B, C]`
/// means the cycle A -> B -> C -> A. Passing a closed route (start
/// repeated at the end) is a caller bug: the wraparound would then run
/// through a start-to-start self edge.
///
/// Returns [`NO_EDGE`] the moment any edge along the cycle is missing;
/// never an error. Routes of fewer than two vertices have length 0.
pub fn tour_length<V: VertexId>(graph: &WeightedGraph<V>, route: &[V]) -> f64 {
    if route.len() < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    for i in 0..route.len() {
        let weight = graph.edge_weight(&route[i], &route[(i + 1) % route.len()]);
        if weight == NO_EDGE {
            return NO_EDGE;
        }
        total += weight;
    }
    total
}

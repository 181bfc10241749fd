//! CLI command implementations.

use std::collections::HashSet;
use std::time::Instant;

use crate::graph::{
    greedy_tour, shortest_path, two_opt_tour, GraphBuilder, Tour, WeightedGraph,
};
use crate::types::{GraphError, GraphResult};

/// Which tour heuristic(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourAlgorithm {
    Greedy,
    TwoOpt,
    Both,
}

impl TourAlgorithm {
    /// Parse an algorithm from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "greedy" => Some(Self::Greedy),
            "two-opt" | "two_opt" | "2-opt" => Some(Self::TwoOpt),
            "both" => Some(Self::Both),
            _ => None,
        }
    }
}

/// Run Dijkstra between two vertices of a seeded random sparse graph.
pub fn cmd_shortest_path(
    vertices: usize,
    edges_per_vertex: usize,
    max_weight: f64,
    seed: u64,
    start: usize,
    end: usize,
    json: bool,
) -> GraphResult<()> {
    let build_started = Instant::now();
    let graph = GraphBuilder::random_sparse(vertices, edges_per_vertex, max_weight, seed)?;
    let build_elapsed = build_started.elapsed();

    let solve_started = Instant::now();
    let result = shortest_path(&graph, &start, &end)?;
    let solve_elapsed = solve_started.elapsed();

    if json {
        let out = serde_json::json!({
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "seed": seed,
            "start": start,
            "end": end,
            "reachable": result.distance.is_finite(),
            "distance": result.distance,
            "path": result.path,
            "build_ms": build_elapsed.as_secs_f64() * 1000.0,
            "solve_ms": solve_elapsed.as_secs_f64() * 1000.0,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!(
            "Graph: {} vertices, {} edges (seed {}, built in {:.2?})",
            graph.vertex_count(),
            graph.edge_count(),
            seed,
            build_elapsed
        );
        if result.distance.is_finite() {
            println!("Distance {} -> {}: {}", start, end, result.distance);
            if result.path.len() <= 32 {
                println!("Path: {}", join_path(&result.path));
            } else {
                println!("Path: {} vertices", result.path.len());
            }
        } else {
            println!("No path from {} to {}", start, end);
        }
        println!("Solved in {:.2?}", solve_elapsed);
    }
    Ok(())
}

/// Run tour heuristics over a seeded random complete graph.
pub fn cmd_tour(
    vertices: usize,
    max_weight: f64,
    seed: u64,
    start: usize,
    algorithm: TourAlgorithm,
    json: bool,
) -> GraphResult<()> {
    let graph = GraphBuilder::random_complete(vertices, max_weight, seed)?;

    let greedy = if algorithm != TourAlgorithm::TwoOpt {
        let started = Instant::now();
        let tour = greedy_tour(&graph, &start)?;
        Some((tour, started.elapsed()))
    } else {
        None
    };
    let improved = if algorithm != TourAlgorithm::Greedy {
        let started = Instant::now();
        let tour = two_opt_tour(&graph, &start)?;
        Some((tour, started.elapsed()))
    } else {
        None
    };

    if json {
        let report = |entry: &Option<(Tour<usize>, std::time::Duration)>| {
            entry.as_ref().map(|(tour, elapsed)| {
                serde_json::json!({
                    "distance": tour.distance,
                    "valid": tour_is_valid(tour, vertices, start),
                    "solve_ms": elapsed.as_secs_f64() * 1000.0,
                })
            })
        };
        let out = serde_json::json!({
            "vertices": vertices,
            "seed": seed,
            "start": start,
            "greedy": report(&greedy),
            "two_opt": report(&improved),
            "improvement_pct": improvement_pct(&greedy, &improved),
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!(
            "Complete graph: {} vertices, {} edges (seed {})",
            vertices,
            graph.edge_count(),
            seed
        );
        if let Some((tour, elapsed)) = &greedy {
            print_tour("Greedy", tour, vertices, start, *elapsed);
        }
        if let Some((tour, elapsed)) = &improved {
            print_tour("2-opt", tour, vertices, start, *elapsed);
        }
        if let Some(pct) = improvement_pct(&greedy, &improved) {
            println!("Improvement: {:.2}%", pct);
        }
    }
    Ok(())
}

/// Run the fixed demonstration graphs: the five-vertex route graph and
/// the four-city tour graph.
pub fn cmd_demo(from: &str, to: &str, json: bool) -> GraphResult<()> {
    let from = parse_vertex_key(from)?;
    let to = parse_vertex_key(to)?;

    let routes = demo_route_graph()?;
    let path = shortest_path(&routes, &from, &to)?;

    let cities = demo_city_graph()?;
    let greedy = greedy_tour(&cities, &'A')?;
    let improved = two_opt_tour(&cities, &'A')?;

    if json {
        let out = serde_json::json!({
            "shortest_path": {
                "start": from,
                "end": to,
                "distance": path.distance,
                "path": path.path,
            },
            "tour": {
                "greedy": { "distance": greedy.distance, "route": greedy.route },
                "two_opt": { "distance": improved.distance, "route": improved.route },
            },
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        if path.distance.is_finite() {
            println!(
                "Shortest path {} -> {}: {} (distance {})",
                from,
                to,
                join_path(&path.path),
                path.distance
            );
        } else {
            println!("No path from {} to {}", from, to);
        }
        println!(
            "Greedy tour from A: {} (distance {})",
            join_path(&greedy.route),
            greedy.distance
        );
        println!(
            "2-opt tour from A:  {} (distance {})",
            join_path(&improved.route),
            improved.distance
        );
    }
    Ok(())
}

/// Parse a route-demo vertex key: a single ASCII uppercase letter.
fn parse_vertex_key(key: &str) -> GraphResult<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => Ok(c),
        _ => Err(GraphError::InvalidVertex(key.to_string())),
    }
}

/// The five-vertex undirected route graph from the library docs.
fn demo_route_graph() -> GraphResult<WeightedGraph<char>> {
    let mut builder = GraphBuilder::new(false);
    for v in ['A', 'B', 'C', 'D', 'E'] {
        builder.vertex(v);
    }
    builder
        .edge('A', 'B', 4.0)
        .edge('A', 'C', 2.0)
        .edge('B', 'C', 1.0)
        .edge('B', 'D', 5.0)
        .edge('C', 'D', 8.0)
        .edge('C', 'E', 10.0)
        .edge('D', 'E', 2.0);
    builder.build()
}

/// The four-city undirected complete graph from the library docs.
fn demo_city_graph() -> GraphResult<WeightedGraph<char>> {
    let mut builder = GraphBuilder::new(false);
    for v in ['A', 'B', 'C', 'D'] {
        builder.vertex(v);
    }
    builder
        .edge('A', 'B', 10.0)
        .edge('A', 'C', 15.0)
        .edge('A', 'D', 20.0)
        .edge('B', 'C', 35.0)
        .edge('B', 'D', 25.0)
        .edge('C', 'D', 30.0);
    builder.build()
}

/// A closed tour is valid when it has N + 1 entries, starts and ends at
/// `start`, and visits every vertex exactly once.
fn tour_is_valid(tour: &Tour<usize>, n: usize, start: usize) -> bool {
    if tour.route.len() != n + 1 {
        return false;
    }
    if tour.route.first() != Some(&start) || tour.route.last() != Some(&start) {
        return false;
    }
    let unique: HashSet<&usize> = tour.route[..tour.route.len() - 1].iter().collect();
    unique.len() == n
}

fn improvement_pct(
    greedy: &Option<(Tour<usize>, std::time::Duration)>,
    improved: &Option<(Tour<usize>, std::time::Duration)>,
) -> Option<f64> {
    match (greedy, improved) {
        (Some((g, _)), Some((i, _))) if g.distance.is_finite() && g.distance > 0.0 => {
            Some((g.distance - i.distance) / g.distance * 100.0)
        }
        _ => None,
    }
}

fn print_tour(label: &str, tour: &Tour<usize>, n: usize, start: usize, elapsed: std::time::Duration) {
    if tour.distance.is_finite() {
        println!(
            "{} tour: distance {:.1}, {} vertices, {} (solved in {:.2?})",
            label,
            tour.distance,
            tour.route.len(),
            if tour_is_valid(tour, n, start) {
                "valid"
            } else {
                "INVALID"
            },
            elapsed
        );
    } else {
        println!("{} tour: graph is not complete, no tour exists", label);
    }
}

fn join_path<V: std::fmt::Display>(path: &[V]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

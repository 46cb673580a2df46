//! Dijkstra's algorithm.
//!
//! Only edges with a strictly positive weight are followed; zero and negative
//! weights are treated as unusable rather than rejected.  Use
//! [`crate::bellman_ford`] for graphs with negative weights.
//!
//! Distances are plain `f64` sums, so a vertex whose distance would exceed
//! `f64::MAX` is reported as unreachable.

use std::collections::BinaryHeap;

use crate::{
    error::GraphError,
    graph::WeightedGraph,
    path::{Path, ShortestPaths},
    tracing_support::{debug_event, engine_span},
    util::MinScored,
};

/// Finds the shortest path from `source` to `target`.
///
/// Fails with [`GraphError::InvalidVertex`] if either name is unknown and with
/// [`GraphError::NotFound`] if `target` cannot be reached.
pub fn shortest_path<G: WeightedGraph>(
    graph: &G,
    source: &str,
    target: &str,
) -> Result<Path, GraphError> {
    let _span = engine_span!("dijkstra", source, target);
    let from = graph.vertex(source)?;
    let to = graph.vertex(target)?;
    let (distances, predecessors) = relax(graph, from, Some(to));
    if distances[to] == f64::INFINITY {
        debug_event!(source, target, "target is unreachable");
        return Err(GraphError::not_found(source, target));
    }
    ShortestPaths::new(graph, from, distances, predecessors).path_to(target)
}

/// Computes shortest distances from `source` to every vertex.
pub fn shortest_paths<G: WeightedGraph>(
    graph: &G,
    source: &str,
) -> Result<ShortestPaths, GraphError> {
    let _span = engine_span!("dijkstra_all", source);
    let from = graph.vertex(source)?;
    let (distances, predecessors) = relax(graph, from, None);
    Ok(ShortestPaths::new(graph, from, distances, predecessors))
}

fn relax<G: WeightedGraph>(
    graph: &G,
    source: usize,
    target: Option<usize>,
) -> (Vec<f64>, Vec<Option<usize>>) {
    let n = graph.num_vertices();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors = vec![None; n];
    distances[source] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(MinScored(0.0, source));

    while let Some(MinScored(distance, u)) = heap.pop() {
        // Stale entry; a shorter path to u was already settled.
        if distance > distances[u] {
            continue;
        }
        if Some(u) == target {
            debug_event!(vertex = u, distance, "reached target, stopping early");
            break;
        }
        for (v, weight) in graph.neighbors(u) {
            if weight <= 0.0 {
                continue;
            }
            let candidate = distance + weight;
            if candidate < distances[v] {
                distances[v] = candidate;
                predecessors[v] = Some(u);
                heap.push(MinScored(candidate, v));
            }
        }
    }

    (distances, predecessors)
}

//! Bellman-Ford single-source shortest paths.
//!
//! Handles negative edge weights.  When a negative cycle is reachable from
//! the source, the cycle itself is reconstructed and returned as an error.
//! A distance that would exceed `f64::MAX` leaves its vertex unreachable.

use std::fmt;

use crate::{
    error::GraphError,
    graph::{Edge, WeightedGraph},
    path::{Path, ShortestPaths},
    tracing_support::{debug_event, engine_span},
};

/// A cycle of negative total weight.
#[derive(Clone, Debug, PartialEq)]
pub struct NegativeCycle {
    vertices: Vec<String>,
    weight: f64,
}

impl NegativeCycle {
    /// Returns the vertices of the cycle in traversal order.  The closing edge
    /// runs from the last vertex back to the first.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Returns the edges of the cycle, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| {
            (
                self.vertices[i].as_str(),
                self.vertices[(i + 1) % n].as_str(),
            )
        })
    }

    /// Returns the total weight of the cycle.  This is negative, except that
    /// a cycle whose exact weight is zero may come out within rounding of
    /// zero.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for NegativeCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} (total {})",
            self.vertices.join(" -> "),
            self.vertices[0],
            self.weight
        )
    }
}

/// Computes shortest distances and predecessors from `source`.
///
/// Fails with [`GraphError::NegativeCycle`] if a negative cycle is reachable
/// from `source`, and with [`GraphError::InvalidVertex`] if `source` is
/// unknown.
pub fn shortest_paths<G: WeightedGraph>(
    graph: &G,
    source: &str,
) -> Result<ShortestPaths, GraphError> {
    let _span = engine_span!("bellman_ford", source);
    let from = graph.vertex(source)?;
    let n = graph.num_vertices();
    let edges = graph.edges().collect::<Vec<_>>();

    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors = vec![None; n];
    distances[from] = 0.0;

    for _pass in 0..n.saturating_sub(1) {
        let mut changed = false;
        for &Edge { from: u, to: v, weight } in &edges {
            if distances[u] != f64::INFINITY && distances[u] + weight < distances[v] {
                distances[v] = distances[u] + weight;
                predecessors[v] = Some(u);
                changed = true;
            }
        }
        if !changed {
            debug_event!(pass = _pass, "no change, stopping early");
            break;
        }
    }

    let still_relaxing = edges.iter().find(|e| {
        distances[e.from] != f64::INFINITY && distances[e.from] + e.weight < distances[e.to]
    });
    if let Some(edge) = still_relaxing {
        // The relaxation of this edge is not applied, so predecessors[edge.to]
        // may still point outside the cycle; walking from edge.from is safe.
        let mut predecessors = predecessors;
        predecessors[edge.to] = Some(edge.from);
        let cycle = extract_cycle(graph, &predecessors, edge.to);
        debug_event!(%cycle, "negative cycle detected");
        return Err(GraphError::NegativeCycle(cycle));
    }

    // Rounding can leave a loop in the predecessors without any edge still
    // relaxing, e.g. when the source itself was relaxed below zero.
    if let Some(start) = find_predecessor_loop(&predecessors) {
        let cycle = extract_cycle(graph, &predecessors, start);
        debug_event!(%cycle, "predecessor loop detected");
        return Err(GraphError::NegativeCycle(cycle));
    }

    Ok(ShortestPaths::new(graph, from, distances, predecessors))
}

/// Returns a vertex whose predecessor chain never ends.  A chain longer than
/// the number of vertices must repeat one.
fn find_predecessor_loop(predecessors: &[Option<usize>]) -> Option<usize> {
    let n = predecessors.len();
    (0..n).find(|&start| {
        let mut v = start;
        for _ in 0..n {
            match predecessors[v] {
                Some(p) => v = p,
                None => return false,
            }
        }
        true
    })
}

/// Finds the shortest path from `source` to `target`, allowing negative
/// weights.
pub fn shortest_path<G: WeightedGraph>(
    graph: &G,
    source: &str,
    target: &str,
) -> Result<Path, GraphError> {
    graph.vertex(target)?;
    shortest_paths(graph, source)?.path_to(target)
}

/// Walks back `n` steps from `start` to land on the cycle, then follows
/// predecessors around it.
fn extract_cycle<G: WeightedGraph>(
    graph: &G,
    predecessors: &[Option<usize>],
    start: usize,
) -> NegativeCycle {
    let step = |v: usize| predecessors[v].expect("vertices on a relaxing chain have predecessors");
    let mut on_cycle = start;
    for _ in 0..graph.num_vertices() {
        on_cycle = step(on_cycle);
    }

    let mut cycle = vec![on_cycle];
    let mut v = step(on_cycle);
    while v != on_cycle {
        cycle.push(v);
        v = step(v);
    }
    cycle.reverse();

    let weight = (0..cycle.len())
        .map(|i| {
            let (u, v) = (cycle[i], cycle[(i + 1) % cycle.len()]);
            graph
                .weight(u, v)
                .expect("consecutive cycle vertices are joined by an edge")
        })
        .sum();

    NegativeCycle {
        vertices: cycle.into_iter().map(|i| graph.label(i).to_owned()).collect(),
        weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{demo, dijkstra, graph::MatrixGraph};

    fn triangle(closing_weight: f64) -> MatrixGraph {
        let mut graph = MatrixGraph::with_labels(["A", "B", "C"]).unwrap();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "C", 1.0).unwrap();
        graph.add_edge("C", "A", closing_weight).unwrap();
        graph
    }

    #[test]
    fn test_detects_negative_cycle() {
        let Err(GraphError::NegativeCycle(cycle)) = shortest_paths(&triangle(-3.0), "A") else {
            panic!("expected a negative cycle");
        };
        let mut vertices = cycle.vertices().to_vec();
        vertices.sort();
        assert_eq!(vertices, ["A", "B", "C"]);
        assert_eq!(cycle.weight(), -1.0);
        assert_eq!(cycle.edges().count(), 3);
    }

    #[test]
    fn test_cycle_order_follows_edges() {
        let Err(GraphError::NegativeCycle(cycle)) = shortest_paths(&triangle(-3.0), "A") else {
            panic!("expected a negative cycle");
        };
        let graph = triangle(-3.0);
        for (u, v) in cycle.edges() {
            let (u, v) = (graph.vertex(u).unwrap(), graph.vertex(v).unwrap());
            assert!(graph.weight(u, v).is_some(), "{u} -> {v} is not an edge");
        }
    }

    #[test]
    fn test_negative_edges_without_cycle() {
        let paths = shortest_paths(&triangle(-1.5), "B").unwrap();
        assert_eq!(paths.distance("A"), Ok(Some(-0.5)));
        assert_eq!(paths.distance("C"), Ok(Some(1.0)));
        let path = paths.path_to("A").unwrap();
        assert_eq!(path.vertices(), ["B", "C", "A"]);
    }

    #[test]
    fn test_unreachable_cycle_is_ignored() {
        let mut graph = MatrixGraph::with_labels(["S", "A", "B"]).unwrap();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "A", -2.0).unwrap();
        let paths = shortest_paths(&graph, "S").unwrap();
        assert_eq!(paths.distance("A"), Ok(None));
        assert_eq!(
            shortest_path(&graph, "S", "B"),
            Err(GraphError::not_found("S", "B"))
        );
    }

    #[test]
    fn test_cycle_downstream_of_source() {
        let mut graph = MatrixGraph::with_labels(["S", "A", "B", "C"]).unwrap();
        graph.add_edge("S", "A", 4.0).unwrap();
        graph.add_edge("A", "B", 2.0).unwrap();
        graph.add_edge("B", "C", -1.0).unwrap();
        graph.add_edge("C", "A", -2.0).unwrap();
        let Err(GraphError::NegativeCycle(cycle)) = shortest_paths(&graph, "S") else {
            panic!("expected a negative cycle");
        };
        assert!(!cycle.vertices().contains(&"S".to_string()));
        assert_eq!(cycle.weight(), -1.0);
        assert!(cycle.to_string().ends_with("(total -1)"));
    }

    #[test]
    fn test_unknown_vertices() {
        assert_eq!(
            shortest_paths(&triangle(1.0), "Q").unwrap_err(),
            GraphError::InvalidVertex("Q".to_string())
        );
        assert_eq!(
            shortest_path(&triangle(1.0), "A", "Q").unwrap_err(),
            GraphError::InvalidVertex("Q".to_string())
        );
    }

    #[test]
    fn test_single_vertex() {
        let graph = MatrixGraph::with_labels(["A"]).unwrap();
        let paths = shortest_paths(&graph, "A").unwrap();
        assert_eq!(paths.distance("A"), Ok(Some(0.0)));
    }

    #[test]
    fn test_rounding_loop_through_source_is_a_cycle() {
        // The exact cycle weight is zero, but rounding relaxes A below zero.
        let mut graph = MatrixGraph::with_labels(["A", "B", "C"]).unwrap();
        graph.add_edge("A", "B", 0.3).unwrap();
        graph.add_edge("B", "C", -0.1).unwrap();
        graph.add_edge("C", "A", -0.2).unwrap();
        let Err(GraphError::NegativeCycle(cycle)) = shortest_paths(&graph, "A") else {
            panic!("expected the rounding loop to be reported");
        };
        let mut vertices = cycle.vertices().to_vec();
        vertices.sort();
        assert_eq!(vertices, ["A", "B", "C"]);
        assert!(cycle.weight().abs() < 1e-9);
        assert!(matches!(
            shortest_path(&graph, "A", "C"),
            Err(GraphError::NegativeCycle(_))
        ));
    }

    #[test]
    fn test_finds_predecessor_loops() {
        assert_eq!(find_predecessor_loop(&[None, Some(0), Some(1)]), None);
        assert_eq!(find_predecessor_loop(&[Some(2), Some(0), Some(1)]), Some(0));
        assert_eq!(find_predecessor_loop(&[None, Some(2), Some(1)]), Some(1));
    }

    #[test]
    fn test_agrees_with_dijkstra_on_demo() {
        let graph = demo::cities();
        let expected = dijkstra::shortest_paths(graph, "Tanger").unwrap();
        let actual = shortest_paths(graph, "Tanger").unwrap();
        assert_eq!(actual.raw_distances(), expected.raw_distances());
    }
}

//! Minimum spanning trees, by Prim's and Kruskal's algorithms.
//!
//! Both read the graph as undirected.  On a disconnected graph neither fails:
//! Prim returns the tree of the start vertex's component and Kruskal returns
//! a spanning forest.

use std::{collections::BinaryHeap, fmt};

use bitvec::vec::BitVec;

use crate::{
    error::GraphError,
    graph::WeightedGraph,
    tracing_support::{debug_event, engine_span},
    union_find::UnionFind,
    util::MinScored,
};

/// An edge of a spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MstEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// The edges of a minimum spanning tree (or forest) and their total weight.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningTree {
    edges: Vec<MstEdge>,
    weight: f64,
}

impl MinimumSpanningTree {
    fn from_indices<G: WeightedGraph>(graph: &G, edges: Vec<(usize, usize, f64)>) -> Self {
        let weight = edges.iter().map(|&(_, _, w)| w).sum();
        let edges = edges
            .into_iter()
            .map(|(from, to, weight)| MstEdge {
                from: graph.label(from).to_owned(),
                to: graph.label(to).to_owned(),
                weight,
            })
            .collect();
        Self { edges, weight }
    }

    /// Returns the tree edges in the order they were chosen.
    pub fn edges(&self) -> &[MstEdge] {
        &self.edges
    }

    /// Returns the sum of the edge weights.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the tree spans a graph with `num_vertices` vertices.
    pub fn spans(&self, num_vertices: usize) -> bool {
        self.edges.len() + 1 >= num_vertices
    }
}

impl fmt::Display for MinimumSpanningTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in &self.edges {
            writeln!(f, "{} -- {} ({})", edge.from, edge.to, edge.weight)?;
        }
        write!(f, "total {}", self.weight)
    }
}

/// Grows a minimum spanning tree from `start` with a lazily-pruned heap.
///
/// Every present edge is usable, whatever its sign.  Vertices outside the
/// component of `start` are simply not part of the result.
pub fn prim<G: WeightedGraph>(graph: &G, start: &str) -> Result<MinimumSpanningTree, GraphError> {
    let _span = engine_span!("prim", start);
    let root = graph.vertex(start)?;
    let mut visited: BitVec = BitVec::repeat(false, graph.num_vertices());
    let mut tree = Vec::new();

    let mut heap = BinaryHeap::new();
    heap.push(MinScored(0.0, (root, None)));
    while let Some(MinScored(weight, (v, parent))) = heap.pop() {
        if visited[v] {
            continue;
        }
        visited.set(v, true);
        if let Some(parent) = parent {
            tree.push((parent, v, weight));
        }
        for (u, w) in graph.neighbors(v) {
            if !visited[u] {
                heap.push(MinScored(w, (u, Some(v))));
            }
        }
    }

    let result = MinimumSpanningTree::from_indices(graph, tree);
    if !result.spans(graph.num_vertices()) {
        debug_event!(edges = result.num_edges(), "graph is disconnected, tree is partial");
    }
    Ok(result)
}

/// Builds a minimum spanning forest from the edges `i -- j` with `i < j`,
/// taken in ascending weight order.  Equal weights keep row order.
pub fn kruskal<G: WeightedGraph>(graph: &G) -> MinimumSpanningTree {
    let _span = engine_span!("kruskal", vertices = graph.num_vertices());
    let n = graph.num_vertices();
    let mut candidates = graph
        .edges()
        .filter(|e| e.from < e.to)
        .collect::<Vec<_>>();
    candidates.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut sets = UnionFind::new(n);
    let mut tree = Vec::new();
    for edge in candidates {
        if tree.len() + 1 >= n {
            break;
        }
        if sets.union(edge.from, edge.to) {
            tree.push((edge.from, edge.to, edge.weight));
        }
    }

    let result = MinimumSpanningTree::from_indices(graph, tree);
    if !result.spans(n) {
        debug_event!(components = sets.num_sets(), "graph is disconnected, result is a forest");
    }
    result
}

//! Breadth-first and depth-first traversal.
//!
//! Any edge present in the graph is traversable, whatever the sign of its
//! weight.  Neighbors are always considered in index order.

use std::{collections::VecDeque, fmt};

use bitvec::vec::BitVec;

use crate::{
    error::GraphError,
    graph::WeightedGraph,
    tracing_support::engine_span,
};

/// One step of a traversal: a newly reached vertex and the vertex it was
/// discovered from (`None` for the start vertex).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visit {
    pub vertex: usize,
    pub parent: Option<usize>,
}

/// The outcome of a traversal: reachable vertices in visitation order and
/// the discovery edge used to first reach each of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Traversal {
    pub order: Vec<String>,
    pub tree_edges: Vec<(String, String)>,
}

impl Traversal {
    fn collect<G: WeightedGraph>(graph: &G, visits: impl Iterator<Item = Visit>) -> Self {
        let mut order = Vec::new();
        let mut tree_edges = Vec::new();
        for Visit { vertex, parent } in visits {
            order.push(graph.label(vertex).to_owned());
            if let Some(parent) = parent {
                tree_edges.push((graph.label(parent).to_owned(), graph.label(vertex).to_owned()));
            }
        }
        Self { order, tree_edges }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.order.join(", "))
    }
}

/// Lazy breadth-first traversal.  A vertex is marked as visited when it is
/// enqueued, so it is never queued twice.
pub struct Bfs<'g, G: WeightedGraph> {
    graph: &'g G,
    visited: BitVec,
    queue: VecDeque<Visit>,
}

impl<'g, G> Bfs<'g, G>
where
    G: WeightedGraph,
{
    pub fn new(graph: &'g G, start: usize) -> Self {
        let mut visited: BitVec = BitVec::repeat(false, graph.num_vertices());
        visited.set(start, true);
        Self {
            graph,
            visited,
            queue: VecDeque::from([Visit {
                vertex: start,
                parent: None,
            }]),
        }
    }
}

impl<'g, G> Iterator for Bfs<'g, G>
where
    G: WeightedGraph,
{
    type Item = Visit;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.queue.pop_front()?;
        let u = visit.vertex;
        for (v, _) in self.graph.neighbors(u) {
            if !self.visited[v] {
                self.visited.set(v, true);
                self.queue.push_back(Visit {
                    vertex: v,
                    parent: Some(u),
                });
            }
        }
        Some(visit)
    }
}

/// Lazy depth-first traversal with an explicit stack.  Visits vertices in the
/// same order as the recursive formulation: each vertex's neighbors are
/// explored in index order, descending as soon as an unvisited one is found.
pub struct Dfs<'g, G: WeightedGraph> {
    graph: &'g G,
    visited: BitVec,
    start: Option<usize>,
    /// Each frame holds a vertex and the next neighbor index to examine.
    stack: Vec<(usize, usize)>,
}

impl<'g, G> Dfs<'g, G>
where
    G: WeightedGraph,
{
    pub fn new(graph: &'g G, start: usize) -> Self {
        Self {
            graph,
            visited: BitVec::repeat(false, graph.num_vertices()),
            start: Some(start),
            stack: Vec::new(),
        }
    }

    fn enter(&mut self, vertex: usize) {
        self.visited.set(vertex, true);
        self.stack.push((vertex, 0));
    }
}

impl<'g, G> Iterator for Dfs<'g, G>
where
    G: WeightedGraph,
{
    type Item = Visit;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            self.enter(start);
            return Some(Visit {
                vertex: start,
                parent: None,
            });
        }
        let n = self.graph.num_vertices();
        while let Some(frame) = self.stack.last_mut() {
            let (u, cursor) = *frame;
            let found = (cursor..n)
                .find(|&v| !self.visited[v] && self.graph.weight(u, v).is_some());
            match found {
                Some(v) => {
                    frame.1 = v + 1;
                    self.enter(v);
                    return Some(Visit {
                        vertex: v,
                        parent: Some(u),
                    });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Breadth-first traversal from `source`.
pub fn bfs<G: WeightedGraph>(graph: &G, source: &str) -> Result<Traversal, GraphError> {
    let _span = engine_span!("bfs", source);
    let start = graph.vertex(source)?;
    Ok(Traversal::collect(graph, Bfs::new(graph, start)))
}

/// Depth-first traversal from `source`.
pub fn dfs<G: WeightedGraph>(graph: &G, source: &str) -> Result<Traversal, GraphError> {
    let _span = engine_span!("dfs", source);
    let start = graph.vertex(source)?;
    Ok(Traversal::collect(graph, Dfs::new(graph, start)))
}

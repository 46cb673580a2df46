#![allow(dead_code)]

use graphlab::{MatrixGraph, pert::Task};
use quickcheck::{Arbitrary, Gen};

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("v{i}")).collect()
}

/// Builds a graph on `n` vertices from random `(from, to, weight)` picks.
/// Self-loops are skipped and later picks overwrite earlier ones.
fn random_graph(
    g: &mut Gen,
    n: usize,
    undirected: bool,
    mut weight: impl FnMut(&mut Gen) -> f64,
) -> MatrixGraph {
    let labels = labels(n);
    let mut graph = MatrixGraph::with_labels(labels.clone()).unwrap();
    let num_edges = usize::arbitrary(g) % (3 * n + 1);
    for _ in 0..num_edges {
        let from = usize::arbitrary(g) % n;
        let to = usize::arbitrary(g) % n;
        if from == to {
            continue;
        }
        let w = weight(g);
        if undirected {
            graph.add_undirected_edge(&labels[from], &labels[to], w).unwrap();
        } else {
            graph.add_edge(&labels[from], &labels[to], w).unwrap();
        }
    }
    graph
}

/// A small graph with positive integer weights, directed or undirected.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: MatrixGraph,
    pub undirected: bool,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = 1 + usize::arbitrary(g) % 8;
        let undirected = bool::arbitrary(g);
        let graph = random_graph(g, n, undirected, |g| f64::from(1 + u8::arbitrary(g) % 20));
        ArbGraph { graph, undirected }
    }
}

/// A small directed graph whose integer weights may be negative, so it may
/// contain negative cycles.
#[derive(Debug, Clone)]
pub struct ArbSignedGraph {
    pub graph: MatrixGraph,
}

impl Arbitrary for ArbSignedGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = 1 + usize::arbitrary(g) % 7;
        let graph = random_graph(g, n, false, |g| {
            let w = i32::from(u8::arbitrary(g) % 20) - 5;
            f64::from(if w >= 0 { w + 1 } else { w })
        });
        ArbSignedGraph { graph }
    }
}

/// A valid project: each task depends only on tasks listed before it.
#[derive(Debug, Clone)]
pub struct ArbProject {
    pub tasks: Vec<Task>,
}

impl Arbitrary for ArbProject {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = 1 + usize::arbitrary(g) % 10;
        let mut tasks: Vec<Task> = Vec::with_capacity(n);
        for i in 0..n {
            let duration = f64::from(u8::arbitrary(g) % 10);
            let predecessors = (0..i)
                .filter(|_| u8::arbitrary(g) % 3 == 0)
                .map(|j| tasks[j].id.clone())
                .collect::<Vec<_>>();
            tasks.push(Task::new(format!("t{i}"), duration).after(predecessors));
        }
        if bool::arbitrary(g) {
            tasks.reverse();
        }
        ArbProject { tasks }
    }
}

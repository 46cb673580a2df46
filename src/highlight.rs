//! Parts of a graph to emphasize when rendering an engine's result.

use std::collections::BTreeSet;

use crate::{
    bellman_ford::NegativeCycle, mst::MinimumSpanningTree, path::Path, pert::Schedule,
    search::Traversal,
};

/// Vertex labels and directed `(from, to)` edges to draw emphasized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Highlight {
    pub vertices: BTreeSet<String>,
    pub edges: BTreeSet<(String, String)>,
}

impl Highlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, vertex: &str) {
        self.vertices.insert(vertex.to_owned());
    }

    /// Adds an edge and both of its endpoints.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.add_vertex(from);
        self.add_vertex(to);
        self.edges.insert((from.to_owned(), to.to_owned()));
    }

    pub fn has_vertex(&self, vertex: &str) -> bool {
        self.vertices.contains(vertex)
    }

    /// Returns true if the directed edge `from -> to` is highlighted.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.contains(&(from.to_owned(), to.to_owned()))
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Highlight {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut highlight = Self::new();
        for (from, to) in iter {
            highlight.add_edge(from, to);
        }
        highlight
    }
}

/// Results that can mark the part of the graph they describe.
pub trait Highlighted {
    fn highlight(&self) -> Highlight;
}

impl Highlighted for Path {
    fn highlight(&self) -> Highlight {
        let mut highlight = self.edges().collect::<Highlight>();
        highlight.add_vertex(self.first());
        highlight
    }
}

impl Highlighted for NegativeCycle {
    fn highlight(&self) -> Highlight {
        self.edges().collect()
    }
}

impl Highlighted for Traversal {
    fn highlight(&self) -> Highlight {
        let mut highlight = self
            .tree_edges
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
            .collect::<Highlight>();
        for vertex in &self.order {
            highlight.add_vertex(vertex);
        }
        highlight
    }
}

impl Highlighted for MinimumSpanningTree {
    fn highlight(&self) -> Highlight {
        self.edges()
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect()
    }
}

/// Critical tasks, and the dependencies between two critical tasks.
impl Highlighted for Schedule {
    fn highlight(&self) -> Highlight {
        let mut highlight = Highlight::new();
        for task in self.tasks().iter().filter(|t| t.is_critical()) {
            highlight.add_vertex(&task.id);
            for p in &task.predecessors {
                if self.task(p).is_some_and(|p| p.is_critical()) {
                    highlight.add_edge(p, &task.id);
                }
            }
        }
        highlight
    }
}

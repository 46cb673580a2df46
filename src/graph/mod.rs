//! The graph model shared by every engine.
//!
//! Engines are written against the [`WeightedGraph`] trait, which exposes a
//! graph as a set of labelled vertices addressed by index plus an optional
//! directed weight for each ordered pair of vertices.  Two implementations are
//! provided:
//!
//! - [`MatrixGraph`], a dense adjacency matrix where `0` and `+inf` both mean
//!   "no edge".  This is the representation entered interactively.
//! - [`SparseGraph`], an adjacency list with explicit edge presence, in which a
//!   zero-weight edge is a real edge.

mod matrix;
mod sparse;

pub use matrix::MatrixGraph;
pub use sparse::SparseGraph;

use crate::error::GraphError;

/// A directed, weighted edge between two vertex indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// A trait representing a small weighted graph with labelled vertices.
///
/// Vertices are addressed by index in `0..num_vertices()`; the index order is
/// the order of the labels.  Methods that iterate over vertices or edges do so
/// in index order, which the engines rely on for deterministic output.
///
/// Diagonal entries are never edges: `weight(v, v)` must return `None`.
pub trait WeightedGraph {
    /// Gets the number of vertices in the graph.
    fn num_vertices(&self) -> usize;

    /// Gets the label of the vertex at `index`.  Panics if the index is out of
    /// range.
    fn label(&self, index: usize) -> &str;

    /// Gets the weight of the directed edge `from -> to`, if there is one.
    fn weight(&self, from: usize, to: usize) -> Option<f64>;

    /// Finds the index of the vertex with the given label.
    ///
    /// The default implementation is a linear scan over the labels.
    fn index_of(&self, label: &str) -> Option<usize> {
        (0..self.num_vertices()).find(|&i| self.label(i) == label)
    }

    /// Like [`Self::index_of`], but reports an unknown label as
    /// [`GraphError::InvalidVertex`].
    fn vertex(&self, label: &str) -> Result<usize, GraphError> {
        self.index_of(label)
            .ok_or_else(|| GraphError::InvalidVertex(label.to_owned()))
    }

    /// Returns true if the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    /// Gets an iterator over the labels, in index order.
    fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.num_vertices()).map(move |i| self.label(i))
    }

    /// Gets an iterator over the outgoing edges of a vertex as
    /// `(neighbor, weight)` pairs, in neighbor index order.
    fn neighbors(&self, from: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..self.num_vertices()).filter_map(move |to| self.weight(from, to).map(|w| (to, w)))
    }

    /// Gets an iterator over every directed edge, row by row.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.num_vertices()).flat_map(move |from| {
            self.neighbors(from)
                .map(move |(to, weight)| Edge { from, to, weight })
        })
    }

    /// Gets the number of directed edges in the graph.
    fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Returns true if every edge `u -> v` has a matching edge `v -> u` with
    /// the same weight, i.e. the graph can be read as undirected.
    fn is_symmetric(&self) -> bool {
        self.edges()
            .all(|e| self.weight(e.to, e.from) == Some(e.weight))
    }

    /// Partitions the vertices into the connected components of the
    /// undirected view of the graph (edge direction is ignored).
    #[cfg(feature = "pathfinding")]
    fn connected_components(&self) -> Vec<Vec<usize>> {
        let vertices = (0..self.num_vertices()).collect::<Vec<_>>();
        let mut components: Vec<Vec<usize>> =
            pathfinding::prelude::connected_components(&vertices, |&v| {
                (0..self.num_vertices())
                    .filter(|&u| self.weight(v, u).is_some() || self.weight(u, v).is_some())
                    .collect::<Vec<_>>()
            })
            .into_iter()
            .map(|component| {
                let mut component = component.into_iter().collect::<Vec<_>>();
                component.sort_unstable();
                component
            })
            .collect();
        components.sort_unstable_by_key(|component| component[0]);
        components
    }
}

use std::fmt;

use crate::{error::GraphError, graph::WeightedGraph};

/// A path in a graph, represented as the sequence of vertex labels from
/// source to destination plus the sum of the edge weights along it.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    vertices: Vec<String>,
    weight: f64,
}

impl Path {
    /// Creates a path from its vertices and total weight.  Panics if
    /// `vertices` is empty.
    pub fn new(vertices: Vec<String>, weight: f64) -> Self {
        assert!(!vertices.is_empty(), "Path has no vertices");
        Self { vertices, weight }
    }

    /// Returns the first vertex in the path.
    pub fn first(&self) -> &str {
        &self.vertices[0]
    }

    /// Returns the last vertex in the path.
    pub fn last(&self) -> &str {
        &self.vertices[self.vertices.len() - 1]
    }

    /// Returns the vertices in order.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Returns an iterator over the edges in the path as `(from, to)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.vertices
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    /// Returns the total weight of the path.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the number of edges in the path.
    pub fn len(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Returns true if the path has no edges, i.e. source and target coincide.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (total {})", self.vertices.join(" -> "), self.weight)
    }
}

/// Single-source shortest-path distances and predecessors.
///
/// Distances are indexed like the graph the result was computed from; an
/// unreachable vertex has a distance of `None` and no predecessor.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    labels: Vec<String>,
    source: usize,
    distances: Vec<f64>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub(crate) fn new<G: WeightedGraph>(
        graph: &G,
        source: usize,
        distances: Vec<f64>,
        predecessors: Vec<Option<usize>>,
    ) -> Self {
        Self {
            labels: graph.labels().map(str::to_owned).collect(),
            source,
            distances,
            predecessors,
        }
    }

    /// Returns the label of the source vertex.
    pub fn source(&self) -> &str {
        &self.labels[self.source]
    }

    /// Returns the shortest distance to `target`, or `None` if it cannot be
    /// reached.
    pub fn distance(&self, target: &str) -> Result<Option<f64>, GraphError> {
        let target = self.index_of(target)?;
        Ok(self.distance_at(target))
    }

    fn distance_at(&self, index: usize) -> Option<f64> {
        let distance = self.distances[index];
        (distance != f64::INFINITY).then_some(distance)
    }

    /// Returns an iterator over `(label, distance)` for every vertex, in
    /// index order.
    pub fn distances(&self) -> impl Iterator<Item = (&str, Option<f64>)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), self.distance_at(i)))
    }

    /// Returns the raw distance array, with `+inf` for unreachable vertices.
    pub fn raw_distances(&self) -> &[f64] {
        &self.distances
    }

    /// Returns the predecessor of `target` on its shortest path.
    pub fn predecessor(&self, target: &str) -> Result<Option<&str>, GraphError> {
        let target = self.index_of(target)?;
        Ok(self.predecessors[target].map(|p| self.labels[p].as_str()))
    }

    /// Reconstructs the shortest path to `target` by following predecessors.
    ///
    /// A predecessor chain that does not end at the source within one step
    /// per vertex cannot be a path, and is reported as [`GraphError::NotFound`].
    pub fn path_to(&self, target: &str) -> Result<Path, GraphError> {
        let index = self.index_of(target)?;
        let Some(weight) = self.distance_at(index) else {
            return Err(GraphError::not_found(self.source(), target));
        };
        let mut vertices = vec![self.labels[index].clone()];
        let mut current = index;
        while let Some(previous) = self.predecessors[current] {
            if vertices.len() >= self.labels.len() {
                return Err(GraphError::not_found(self.source(), target));
            }
            vertices.push(self.labels[previous].clone());
            current = previous;
        }
        if current != self.source {
            return Err(GraphError::not_found(self.source(), target));
        }
        vertices.reverse();
        Ok(Path::new(vertices, weight))
    }

    fn index_of(&self, label: &str) -> Result<usize, GraphError> {
        self.labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| GraphError::InvalidVertex(label.to_owned()))
    }
}

impl fmt::Display for ShortestPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distances from {}:", self.source())?;
        for (label, distance) in self.distances() {
            match distance {
                Some(d) => writeln!(f, "  {label}: {d}")?,
                None => writeln!(f, "  {label}: unreachable")?,
            }
        }
        Ok(())
    }
}

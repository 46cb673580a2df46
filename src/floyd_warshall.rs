//! Floyd-Warshall all-pairs shortest distances.
//!
//! Negative weights are accepted.  There is no negative-cycle check while
//! relaxing: a negative cycle shows up as a negative diagonal entry, see
//! [`DistanceMatrix::has_negative_cycle`].

use std::fmt;

use crate::{
    error::GraphError,
    graph::{MatrixGraph, WeightedGraph},
    tracing_support::{debug_event, engine_span},
};

/// All-pairs shortest distances.  `+inf` marks an unreachable pair.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    labels: Vec<String>,
    distances: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Returns the labels, in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the raw distance rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.distances
    }

    /// Returns the shortest distance from `from` to `to`, or `None` if `to`
    /// cannot be reached.
    pub fn distance(&self, from: &str, to: &str) -> Result<Option<f64>, GraphError> {
        let (i, j) = (self.index_of(from)?, self.index_of(to)?);
        let distance = self.distances[i][j];
        Ok((distance != f64::INFINITY).then_some(distance))
    }

    /// Returns the row of distances from `from`.
    pub fn row(&self, from: &str) -> Result<&[f64], GraphError> {
        Ok(&self.distances[self.index_of(from)?])
    }

    /// Returns true if some vertex can reach itself with negative total weight,
    /// in which case the other distances are not meaningful.
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.labels.len()).any(|i| self.distances[i][i] < 0.0)
    }

    /// Converts the distances back into an adjacency matrix.  Unreachable pairs
    /// and zero distances become "no edge".
    pub fn to_graph(&self) -> Result<MatrixGraph, GraphError> {
        MatrixGraph::new(self.labels.iter().cloned(), self.distances.clone())
    }

    fn index_of(&self, label: &str) -> Result<usize, GraphError> {
        self.labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| GraphError::InvalidVertex(label.to_owned()))
    }
}

impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.labels.iter().map(String::len).max().unwrap_or(0).max(5);
        write!(f, "{:width$}", "")?;
        for label in &self.labels {
            write!(f, " {label:>width$}")?;
        }
        writeln!(f)?;
        for (label, row) in self.labels.iter().zip(&self.distances) {
            write!(f, "{label:width$}")?;
            for &d in row {
                if d == f64::INFINITY {
                    write!(f, " {:>width$}", "inf")?;
                } else {
                    write!(f, " {d:>width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Computes the shortest distance between every ordered pair of vertices.
pub fn all_pairs_distances<G: WeightedGraph>(graph: &G) -> DistanceMatrix {
    let _span = engine_span!("floyd_warshall", vertices = graph.num_vertices());
    let n = graph.num_vertices();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
        for (j, weight) in graph.neighbors(i) {
            row[j] = weight;
        }
    }

    for k in 0..n {
        for i in 0..n {
            if dist[i][k] == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                let through_k = dist[i][k] + dist[k][j];
                if through_k < dist[i][j] {
                    dist[i][j] = through_k;
                }
            }
        }
    }

    let result = DistanceMatrix {
        labels: graph.labels().map(str::to_owned).collect(),
        distances: dist,
    };
    if result.has_negative_cycle() {
        debug_event!("negative cycle makes the distances meaningless");
    }
    result
}

use std::collections::HashMap;

use derivative::Derivative;

use crate::{error::GraphError, graph::WeightedGraph, util::is_edge_weight};

/// A dense adjacency-matrix graph.
///
/// `matrix[i][j]` is the weight of the directed edge from vertex `i` to vertex
/// `j`.  By convention both `0` and `+inf` mean "there is no edge"; any other
/// finite value, including a negative one, is an edge.  Diagonal entries are
/// never treated as edges.
#[derive(Derivative)]
#[derivative(Clone, Debug, PartialEq)]
pub struct MatrixGraph {
    labels: Vec<String>,
    matrix: Vec<Vec<f64>>,
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    index: HashMap<String, usize>,
}

impl MatrixGraph {
    /// Creates a graph from a label list and a square weight matrix.
    ///
    /// Fails if the matrix is not square, if its size differs from the
    /// number of labels, if a label is repeated, or if an entry is NaN or
    /// `-inf`.
    pub fn new<S: Into<String>>(
        labels: impl IntoIterator<Item = S>,
        matrix: Vec<Vec<f64>>,
    ) -> Result<Self, GraphError> {
        let labels = labels.into_iter().map(Into::into).collect::<Vec<String>>();
        let index = index_labels(&labels)?;
        if matrix.len() != labels.len() {
            return Err(GraphError::DimensionMismatch {
                rows: matrix.len(),
                labels: labels.len(),
            });
        }
        for (row, entries) in matrix.iter().enumerate() {
            if entries.len() != labels.len() {
                return Err(GraphError::RaggedRow {
                    row,
                    len: entries.len(),
                    expected: labels.len(),
                });
            }
            for (col, &weight) in entries.iter().enumerate() {
                if weight.is_nan() || weight == f64::NEG_INFINITY {
                    return Err(GraphError::InvalidWeight {
                        from: labels[row].clone(),
                        to: labels[col].clone(),
                        weight,
                    });
                }
            }
        }
        Ok(Self {
            labels,
            matrix,
            index,
        })
    }

    /// Creates a graph with the given labels and no edges.
    pub fn with_labels<S: Into<String>>(
        labels: impl IntoIterator<Item = S>,
    ) -> Result<Self, GraphError> {
        let labels = labels.into_iter().map(Into::into).collect::<Vec<String>>();
        let n = labels.len();
        Self::new(labels, vec![vec![0.0; n]; n])
    }

    /// Sets the weight of the directed edge `from -> to`.  Setting `0` or
    /// `+inf` removes the edge.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<(), GraphError> {
        let (i, j) = (self.vertex(from)?, self.vertex(to)?);
        if weight.is_nan() || weight == f64::NEG_INFINITY {
            return Err(GraphError::InvalidWeight {
                from: from.to_owned(),
                to: to.to_owned(),
                weight,
            });
        }
        self.matrix[i][j] = weight;
        Ok(())
    }

    /// Sets the weight of both `from -> to` and `to -> from`.
    pub fn add_undirected_edge(
        &mut self,
        from: &str,
        to: &str,
        weight: f64,
    ) -> Result<(), GraphError> {
        self.add_edge(from, to, weight)?;
        self.add_edge(to, from, weight)
    }

    /// Gets the raw matrix, sentinels included.
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    /// Consumes the graph, returning its labels and matrix.
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<f64>>) {
        (self.labels, self.matrix)
    }
}

fn index_labels(labels: &[String]) -> Result<HashMap<String, usize>, GraphError> {
    let mut index = HashMap::with_capacity(labels.len());
    for (i, label) in labels.iter().enumerate() {
        if index.insert(label.clone(), i).is_some() {
            return Err(GraphError::DuplicateLabel(label.clone()));
        }
    }
    Ok(index)
}

impl WeightedGraph for MatrixGraph {
    fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    fn weight(&self, from: usize, to: usize) -> Option<f64> {
        let weight = self.matrix[from][to];
        (from != to && is_edge_weight(weight)).then_some(weight)
    }
}

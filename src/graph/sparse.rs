use std::collections::{BTreeMap, HashMap};

use crate::{
    error::GraphError,
    graph::{MatrixGraph, WeightedGraph},
};

/// An adjacency-list graph with explicit edge presence.
///
/// Unlike [`MatrixGraph`], a zero weight is a real edge here.  Weights must be
/// finite.  Each row is kept ordered by neighbor index so that iteration
/// order matches the dense representation.
#[derive(Clone, Debug, Default)]
pub struct SparseGraph {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<BTreeMap<usize, f64>>,
}

impl SparseGraph {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex, returning its index.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> Result<usize, GraphError> {
        let label = label.into();
        if self.index.contains_key(&label) {
            return Err(GraphError::DuplicateLabel(label));
        }
        let index = self.labels.len();
        self.index.insert(label.clone(), index);
        self.labels.push(label);
        self.rows.push(BTreeMap::new());
        Ok(index)
    }

    /// Adds or replaces the directed edge `from -> to`, returning the previous
    /// weight, if any.  Self-loops are ignored.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        weight: f64,
    ) -> Result<Option<f64>, GraphError> {
        let (i, j) = (self.vertex(from)?, self.vertex(to)?);
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight {
                from: from.to_owned(),
                to: to.to_owned(),
                weight,
            });
        }
        if i == j {
            return Ok(None);
        }
        Ok(self.rows[i].insert(j, weight))
    }

    /// Adds or replaces both `from -> to` and `to -> from`.
    pub fn add_undirected_edge(
        &mut self,
        from: &str,
        to: &str,
        weight: f64,
    ) -> Result<(), GraphError> {
        self.add_edge(from, to, weight)?;
        self.add_edge(to, from, weight)?;
        Ok(())
    }

    /// Removes the directed edge `from -> to`, returning its weight.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Result<Option<f64>, GraphError> {
        let (i, j) = (self.vertex(from)?, self.vertex(to)?);
        Ok(self.rows[i].remove(&j))
    }
}

impl From<&MatrixGraph> for SparseGraph {
    fn from(graph: &MatrixGraph) -> Self {
        let labels = graph.labels().map(str::to_owned).collect::<Vec<_>>();
        let index = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i))
            .collect();
        let rows = (0..graph.num_vertices())
            .map(|from| graph.neighbors(from).collect())
            .collect();
        Self {
            labels,
            index,
            rows,
        }
    }
}

impl WeightedGraph for SparseGraph {
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
        self.rows[from].get(&to).copied()
    }

    fn neighbors(&self, from: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.rows[from].iter().map(|(&to, &weight)| (to, weight))
    }
}

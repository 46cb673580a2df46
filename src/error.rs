//! Error types shared by every engine.

use crate::bellman_ford::NegativeCycle;
use crate::pert::ValidationError;

/// Errors returned by graph construction and by the graph engines.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A vertex name was not found among the graph's labels.
    #[error("unknown vertex: {0}")]
    InvalidVertex(String),
    /// No path exists between the two vertices.
    #[error("no path from {from} to {to}")]
    NotFound { from: String, to: String },
    /// A negative-weight cycle is reachable from the source.
    #[error("negative cycle detected: {0}")]
    NegativeCycle(NegativeCycle),
    /// A PERT project failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The matrix does not have one row per label.
    #[error("adjacency matrix has {rows} rows but there are {labels} labels")]
    DimensionMismatch { rows: usize, labels: usize },
    /// A matrix row does not have one entry per label.
    #[error("row {row} of the adjacency matrix has {len} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// Two vertices share the same label.
    #[error("duplicate vertex label: {0}")]
    DuplicateLabel(String),
    /// A weight that cannot be interpreted as an edge or as "no edge".
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },
}

impl GraphError {
    pub(crate) fn not_found(from: &str, to: &str) -> Self {
        GraphError::NotFound {
            from: from.to_owned(),
            to: to.to_owned(),
        }
    }
}

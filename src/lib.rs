//! Classic graph algorithms over small labelled weighted graphs: shortest
//! paths, traversals, minimum spanning trees and PERT scheduling.

pub mod bellman_ford;
pub mod demo;
pub mod dijkstra;
#[cfg(feature = "dot")]
pub mod dot;
pub mod error;
pub mod floyd_warshall;
pub mod graph;
pub mod highlight;
pub mod mst;
pub mod path;
pub mod pert;
pub mod prelude;
pub mod search;
pub mod tracing_support;
pub mod union_find;

mod util;

pub use error::GraphError;
pub use graph::{Edge, MatrixGraph, SparseGraph, WeightedGraph};

pub use crate::bellman_ford::NegativeCycle;
pub use crate::error::GraphError;
pub use crate::floyd_warshall::DistanceMatrix;
pub use crate::graph::{Edge, MatrixGraph, SparseGraph, WeightedGraph};
pub use crate::highlight::{Highlight, Highlighted};
pub use crate::mst::{MinimumSpanningTree, MstEdge};
pub use crate::path::{Path, ShortestPaths};
pub use crate::pert::{Schedule, Task, TaskTiming, ValidationError};
pub use crate::search::{Bfs, Dfs, Traversal, Visit};

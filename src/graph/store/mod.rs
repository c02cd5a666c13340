//! Graph stores.
//!
//! Two backings share one read interface ([`GraphView`](crate::graph::GraphView)):
//! - `adj_list`: per-vertex neighbor lists, for sparse graphs
//! - `adj_matrix`: dense `n × n` weight matrix, for small or dense graphs
//! - `document`: serde-friendly edge-list form of either backing

pub mod adj_list;
pub mod adj_matrix;
pub mod document;

pub use adj_list::{AdjacencyList, DiGraph, UnGraph};
pub use adj_matrix::{AdjacencyMatrix, DiMatrix, MatrixNeighbors, UnMatrix};
pub use document::GraphDocument;

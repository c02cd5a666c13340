//! Working collections used by the graph solvers.
//!
//! - `disjoint_set`: union-find for Kruskal and component labelling
//! - `min_queue`: binary min-heap with FIFO tie-breaking for Dijkstra, Prim and A*
//! - `vertex_table`: label → dense id interner backing every graph store

pub mod disjoint_set;
pub mod min_queue;
pub mod vertex_table;

pub use disjoint_set::DisjointSet;
pub use min_queue::MinQueue;
pub use vertex_table::{VertexId, VertexTable};

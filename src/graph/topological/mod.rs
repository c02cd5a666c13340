//! Topological ordering of directed graphs.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `kahn` | \(O(n + m)\) | FIFO queue of zero in-degree vertices |
//! | `dfs_order` | \(O(n + m)\) | Reverse finishing order of three-colour DFS |
//! | `longest_path_lengths` | \(O(n + m)\) | DP over Kahn's order |
//! | `all_orders` | exponential | Backtracking, capped by `limit` |
//!
//! Cycles never produce a fabricated full order: the sorters return a
//! [`TopologicalOrder`] whose [`is_complete`](TopologicalOrder::is_complete)
//! is `false`.

pub mod dfs;
pub mod kahn;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

pub use dfs::dfs_order;
pub use kahn::{all_orders, kahn, longest_path_lengths};

/// The (possibly partial) result of a topological sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologicalOrder<V> {
    order: Vec<V>,
    vertex_count: usize,
}

impl<V> TopologicalOrder<V> {
    pub(crate) fn new(order: Vec<V>, vertex_count: usize) -> Self {
        Self { order, vertex_count }
    }

    /// Returns `true` if every vertex was ordered, i.e. the graph is acyclic.
    pub fn is_complete(&self) -> bool {
        self.order.len() == self.vertex_count
    }

    /// The ordered vertices. Shorter than the vertex count on a cycle.
    pub fn order(&self) -> &[V] {
        &self.order
    }

    /// Vertices in the source graph.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The full order, or [`GraphError::CycleDetected`] if it is partial.
    pub fn into_result(self) -> Result<Vec<V>> {
        if self.is_complete() {
            Ok(self.order)
        } else {
            Err(GraphError::CycleDetected {
                ordered: self.order.len(),
                total: self.vertex_count,
            })
        }
    }
}

//! Minimum spanning trees over undirected graphs.
//!
//! | Solver | Complexity | Strategy |
//! |--------|------------|----------|
//! | `kruskal` | \(O(m \log m)\) | Sorted edges + union-find |
//! | `prim` | \(O(m \log m)\) | Frontier min-queue from a start vertex |
//! | `all_spanning_trees` | exponential | Backtracking over acyclic edge subsets |
//!
//! Kruskal covers every component (a spanning forest); Prim covers only the
//! component of its start vertex. Neither promotes a partial result: use
//! [`SpanningTree::is_spanning`] or [`SpanningTree::into_spanning`].

pub mod all_trees;
pub mod kruskal;
pub mod prim;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::edge::Edge;

pub use all_trees::all_spanning_trees;
pub use kruskal::kruskal;
pub use prim::prim;

/// Edges chosen by a spanning-tree solver and their total weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree<V, W> {
    edges: Vec<Edge<V, W>>,
    total_weight: W,
    vertex_count: usize,
}

impl<V, W> SpanningTree<V, W> {
    pub(crate) fn new(edges: Vec<Edge<V, W>>, total_weight: W, vertex_count: usize) -> Self {
        Self {
            edges,
            total_weight,
            vertex_count,
        }
    }

    /// Chosen edges in the order the solver accepted them.
    pub fn edges(&self) -> &[Edge<V, W>] {
        &self.edges
    }

    /// Consumes the tree, returning its edges.
    pub fn into_edges(self) -> Vec<Edge<V, W>> {
        self.edges
    }

    /// Sum of the chosen edge weights.
    pub fn total_weight(&self) -> &W {
        &self.total_weight
    }

    /// Vertices in the source graph.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Trees in the forest, counting every uncovered vertex as its own tree.
    pub fn component_count(&self) -> usize {
        self.vertex_count.saturating_sub(self.edges.len())
    }

    /// Returns `true` if the edges connect every vertex.
    pub fn is_spanning(&self) -> bool {
        self.component_count() <= 1
    }

    /// `self` if it spans the graph, [`GraphError::Disconnected`] otherwise.
    pub fn into_spanning(self) -> Result<Self> {
        if self.is_spanning() {
            Ok(self)
        } else {
            Err(GraphError::Disconnected {
                reached: self.edges.len() + 1,
                total: self.vertex_count,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanning_checks() {
        let tree = SpanningTree::new(vec![Edge::new('a', 'b', 1), Edge::new('b', 'c', 2)], 3, 3);
        assert!(tree.is_spanning());
        assert_eq!(tree.component_count(), 1);

        let forest = SpanningTree::new(vec![Edge::new('a', 'b', 1)], 1, 4);
        assert_eq!(forest.component_count(), 3);
        assert_eq!(
            forest.into_spanning(),
            Err(GraphError::Disconnected { reached: 2, total: 4 })
        );

        let empty = SpanningTree::<char, u32>::new(Vec::new(), 0, 0);
        assert!(empty.is_spanning());
    }
}

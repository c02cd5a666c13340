//! DFS-based topological ordering.

use crate::error::{GraphError, Result};
use crate::graph::topological::TopologicalOrder;
use crate::graph::traversal::cycle::colored_dfs;
use crate::graph::view::GraphView;

/// Topological order as the reverse of DFS finishing order.
///
/// Roots are tried in insertion order. When a back edge to a gray vertex is
/// found the walk stops and the returned order holds only the vertices that
/// had already finished, which is a valid order of that subset.
///
/// # Errors
/// [`GraphError::RequiresDirected`] for undirected graphs.
pub fn dfs_order<G: GraphView>(graph: &G) -> Result<TopologicalOrder<G::Vertex>> {
    if !graph.is_directed() {
        return Err(GraphError::RequiresDirected);
    }

    let mut finished = Vec::with_capacity(graph.vertex_count());
    let acyclic = colored_dfs(graph, |u| finished.push(u));
    if !acyclic {
        trace_event!(finished = finished.len(), "dfs sort hit a back edge");
    }

    finished.reverse();
    Ok(TopologicalOrder::new(
        finished.into_iter().map(|id| graph.label(id).clone()).collect(),
        graph.vertex_count(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::store::{DiGraph, UnMatrix};

    #[test]
    fn reverse_finishing_order() {
        let g = DiGraph::<&str, u8>::from_edges([
            ("shirt", "tie", 1),
            ("tie", "jacket", 1),
            ("trousers", "shoes", 1),
            ("trousers", "belt", 1),
            ("belt", "jacket", 1),
        ]);
        let order = dfs_order(&g).unwrap().into_result().unwrap();
        assert_eq!(order, vec!["trousers", "belt", "shoes", "shirt", "tie", "jacket"]);
    }

    #[test]
    fn cycle_leaves_order_incomplete() {
        let g = DiGraph::<char, u8>::from_edges([('A', 'B', 1), ('B', 'C', 1), ('C', 'A', 1)]);
        let order = dfs_order(&g).unwrap();
        assert!(!order.is_complete());
        assert!(order.order().is_empty());
    }

    #[test]
    fn undirected_is_rejected() {
        let g = UnMatrix::<u8, u8>::from_edges([(0, 1, 1)]);
        assert_eq!(dfs_order(&g), Err(GraphError::RequiresDirected));
    }
}

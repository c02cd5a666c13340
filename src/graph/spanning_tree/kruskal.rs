//! Kruskal's minimum spanning forest.

use num_traits::Zero;

use crate::collections::DisjointSet;
use crate::error::{GraphError, Result};
use crate::graph::edge::Edge;
use crate::graph::spanning_tree::SpanningTree;
use crate::graph::view::GraphView;
use crate::graph::weight::{weight_order, Weight};

/// Minimum spanning forest of an undirected graph.
///
/// Edges are stably sorted by weight, so equal weights keep insertion order,
/// and accepted while they join two different trees. Stops once `n - 1` edges
/// are chosen. Disconnected input yields one tree per component. NaN weights
/// sort after every number.
///
/// # Errors
/// [`GraphError::RequiresUndirected`] for directed graphs,
/// [`GraphError::WeightOverflow`] if the total weight does not fit `W`.
pub fn kruskal<G: GraphView>(graph: &G) -> Result<SpanningTree<G::Vertex, G::Weight>> {
    if graph.is_directed() {
        return Err(GraphError::RequiresUndirected);
    }

    let n = graph.vertex_count();
    let mut candidates = graph.edge_ids();
    candidates.sort_by(|a, b| weight_order(&a.2, &b.2));

    let mut sets = DisjointSet::with_singletons(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut total = G::Weight::zero();

    for (u, v, w) in candidates {
        if edges.len() + 1 >= n {
            break;
        }
        if sets.union(u.0, v.0) {
            total = Weight::checked_sum(total, w).ok_or(GraphError::WeightOverflow)?;
            edges.push(Edge::new(graph.label(u).clone(), graph.label(v).clone(), w));
        }
    }

    trace_event!(
        vertices = n,
        edges = edges.len(),
        trees = sets.set_count(),
        "kruskal finished"
    );
    Ok(SpanningTree::new(edges, total, n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::store::{DiGraph, UnGraph, UnMatrix};

    #[test]
    fn picks_cheapest_edges() {
        let g = UnGraph::<char, u32>::from_edges([
            ('A', 'B', 4),
            ('A', 'C', 2),
            ('B', 'C', 1),
            ('B', 'D', 5),
            ('C', 'D', 8),
            ('C', 'E', 10),
            ('D', 'E', 2),
        ]);
        let tree = kruskal(&g).unwrap();
        assert_eq!(*tree.total_weight(), 10);
        assert!(tree.is_spanning());
        assert_eq!(
            tree.edges(),
            &[
                Edge::new('B', 'C', 1),
                Edge::new('A', 'C', 2),
                Edge::new('D', 'E', 2),
                Edge::new('B', 'D', 5),
            ]
        );
    }

    #[test]
    fn forest_on_disconnected_graph() {
        let g = UnMatrix::<u8, i32>::from_edges([(0, 1, 3), (2, 3, -1), (3, 4, 2), (2, 4, 7)]);
        let tree = kruskal(&g).unwrap();
        assert_eq!(tree.edges().len(), 3);
        assert_eq!(*tree.total_weight(), 4);
        assert_eq!(tree.component_count(), 2);
        assert!(!tree.is_spanning());
    }

    #[test]
    fn self_loops_never_chosen() {
        let g = UnGraph::<u8, u32>::from_edges([(0, 0, 0), (0, 1, 5)]);
        let tree = kruskal(&g).unwrap();
        assert_eq!(tree.edges(), &[Edge::new(0, 1, 5)]);
    }

    #[test]
    fn nan_weights_are_considered_last() {
        let g = UnGraph::<char, f64>::from_edges([
            ('a', 'b', f64::NAN),
            ('b', 'c', 2.0),
            ('a', 'c', 1.0),
        ]);
        let tree = kruskal(&g).unwrap();
        assert_eq!(tree.edges(), &[Edge::new('a', 'c', 1.0), Edge::new('b', 'c', 2.0)]);
        assert_eq!(*tree.total_weight(), 3.0);
    }

    #[test]
    fn total_beyond_the_weight_range_is_an_error() {
        let g = UnGraph::<u8, u8>::from_edges([(0, 1, 200), (1, 2, 100)]);
        assert_eq!(kruskal(&g), Err(GraphError::WeightOverflow));
    }

    #[test]
    fn rejects_directed_graphs() {
        let g = DiGraph::<u8, u32>::from_edges([(0, 1, 1)]);
        assert_eq!(kruskal(&g), Err(GraphError::RequiresUndirected));
    }
}

//! Prim's minimum spanning tree.

use num_traits::Zero;

use crate::collections::{MinQueue, VertexId};
use crate::error::{GraphError, Result};
use crate::graph::edge::Edge;
use crate::graph::spanning_tree::SpanningTree;
use crate::graph::view::GraphView;
use crate::graph::weight::Weight;

/// Candidate edges `(tree end, outside end)` keyed by weight.
type Frontier<W> = MinQueue<W, (VertexId, VertexId)>;

/// Minimum spanning tree of the component containing `start`.
///
/// Grows a tree from `start`, repeatedly taking the cheapest frontier edge
/// whose far end is not yet in the tree. If `start` cannot reach every vertex
/// the result is partial and [`SpanningTree::is_spanning`] is `false`.
///
/// # Errors
/// [`GraphError::RequiresUndirected`] for directed graphs,
/// [`GraphError::UnknownVertex`] if `start` is absent,
/// [`GraphError::WeightOverflow`] if the total weight does not fit `W`.
pub fn prim<G: GraphView>(
    graph: &G,
    start: &G::Vertex,
) -> Result<SpanningTree<G::Vertex, G::Weight>> {
    if graph.is_directed() {
        return Err(GraphError::RequiresUndirected);
    }
    let s = graph.require(start)?;

    let n = graph.vertex_count();
    let mut in_tree = vec![false; n];
    let mut frontier: Frontier<G::Weight> = MinQueue::new();
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut total = G::Weight::zero();

    let grow = |u: VertexId, in_tree: &mut [bool], frontier: &mut Frontier<G::Weight>| {
        in_tree[u.0] = true;
        for (v, w) in graph.neighbor_ids(u) {
            if !in_tree[v.0] {
                frontier.push(w, (u, v));
            }
        }
    };

    grow(s, &mut in_tree, &mut frontier);
    while let Some((w, (u, v))) = frontier.pop() {
        if in_tree[v.0] {
            continue;
        }
        total = Weight::checked_sum(total, w).ok_or(GraphError::WeightOverflow)?;
        edges.push(Edge::new(graph.label(u).clone(), graph.label(v).clone(), w));
        grow(v, &mut in_tree, &mut frontier);
    }

    trace_event!(vertices = n, edges = edges.len(), "prim finished");
    Ok(SpanningTree::new(edges, total, n))
}

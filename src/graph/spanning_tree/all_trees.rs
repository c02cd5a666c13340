//! Exhaustive spanning-tree enumeration for small graphs.

use num_traits::Zero;

use crate::collections::{DisjointSet, VertexId};
use crate::error::{GraphError, Result};
use crate::graph::edge::Edge;
use crate::graph::spanning_tree::SpanningTree;
use crate::graph::view::GraphView;
use crate::graph::weight::Weight;

/// Enumerates spanning trees of an undirected graph, at most `limit` of them.
///
/// Trees are built from edge subsets in lexicographic order of the edges'
/// positions in [`GraphView::edge_ids`]. A branch is cut as soon as an edge
/// would close a cycle, so every subset reaching `n - 1` edges is a tree.
/// The count grows exponentially with the graph; keep `limit` small on
/// anything but toy inputs.
///
/// A disconnected graph has no spanning tree and yields an empty list. A
/// graph with at most one vertex has exactly one, with no edges.
///
/// # Errors
/// [`GraphError::RequiresUndirected`] for directed graphs,
/// [`GraphError::WeightOverflow`] if a tree's total weight does not fit `W`.
pub fn all_spanning_trees<G: GraphView>(
    graph: &G,
    limit: usize,
) -> Result<Vec<SpanningTree<G::Vertex, G::Weight>>> {
    if graph.is_directed() {
        return Err(GraphError::RequiresUndirected);
    }

    let n = graph.vertex_count();
    let target = n.saturating_sub(1);
    let candidates: Vec<_> = graph
        .edge_ids()
        .into_iter()
        .filter(|(u, v, _)| u != v)
        .collect();
    let m = candidates.len();

    let mut chosen: Vec<usize> = Vec::with_capacity(target);
    // cursor[d] = first candidate index still to try at depth d
    let mut cursor: Vec<usize> = vec![0];
    let mut trees = Vec::new();

    while trees.len() < limit {
        let depth = chosen.len();
        let next = if depth == target {
            trees.push(assemble(graph, &candidates, &chosen, n)?);
            None
        } else {
            let needed = target - depth;
            let mut forest = forest_of(&candidates, &chosen, n);
            (cursor[depth]..m)
                .take_while(|&i| m - i >= needed)
                .find(|&i| {
                    let (u, v, _) = candidates[i];
                    !forest.connected(u.0, v.0)
                })
        };

        match next {
            Some(i) => {
                cursor[depth] = i + 1;
                chosen.push(i);
                cursor.push(i + 1);
            }
            None => {
                cursor.pop();
                if chosen.pop().is_none() {
                    break;
                }
            }
        }
    }

    trace_event!(vertices = n, found = trees.len(), limit, "enumerated spanning trees");
    Ok(trees)
}

fn forest_of<W>(
    candidates: &[(VertexId, VertexId, W)],
    chosen: &[usize],
    n: usize,
) -> DisjointSet {
    let mut forest = DisjointSet::with_singletons(n);
    for &i in chosen {
        let (u, v, _) = &candidates[i];
        forest.union(u.0, v.0);
    }
    forest
}

fn assemble<G: GraphView>(
    graph: &G,
    candidates: &[(VertexId, VertexId, G::Weight)],
    chosen: &[usize],
    n: usize,
) -> Result<SpanningTree<G::Vertex, G::Weight>> {
    let mut total = G::Weight::zero();
    let mut edges = Vec::with_capacity(chosen.len());
    for &i in chosen {
        let (u, v, w) = candidates[i];
        total = Weight::checked_sum(total, w).ok_or(GraphError::WeightOverflow)?;
        edges.push(Edge::new(graph.label(u).clone(), graph.label(v).clone(), w));
    }
    Ok(SpanningTree::new(edges, total, n))
}

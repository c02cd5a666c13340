//! A* single-pair search.

use num_traits::Zero;

use crate::collections::{MinQueue, VertexId};
use crate::error::Result;
use crate::graph::view::GraphView;
use crate::graph::weight::{improves, Weight};

/// Cheapest path from `start` to `goal` and its cost, guided by `heuristic`.
///
/// `heuristic(v)` estimates the remaining cost from `v` to `goal`. With an
/// admissible estimate (never above the true cost) and non-negative weights the
/// returned path is optimal. A vertex reached again at a lower cost is
/// reopened, so an inconsistent estimate only costs extra expansions. A
/// consistent (monotone) estimate expands each vertex once, and a zero
/// heuristic degrades to Dijkstra.
///
/// Returns `Ok(None)` when `goal` is unreachable.
///
/// # Errors
/// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if either
/// endpoint is not in the graph.
pub fn a_star<G, H>(
    graph: &G,
    start: &G::Vertex,
    goal: &G::Vertex,
    mut heuristic: H,
) -> Result<Option<(Vec<G::Vertex>, G::Weight)>>
where
    G: GraphView,
    H: FnMut(&G::Vertex) -> G::Weight,
{
    let s = graph.require(start)?;
    let t = graph.require(goal)?;
    let n = graph.vertex_count();

    let mut cost: Vec<Option<G::Weight>> = vec![None; n];
    let mut pred: Vec<Option<VertexId>> = vec![None; n];
    let mut open = MinQueue::new();

    cost[s.0] = Some(G::Weight::zero());
    open.push(heuristic(graph.label(s)), (s, G::Weight::zero()));

    while let Some((_, (u, g_u))) = open.pop() {
        // Superseded by a cheaper route to u.
        if cost[u.0].is_some_and(|best| best < g_u) {
            continue;
        }

        if u == t {
            let mut path = vec![graph.label(t).clone()];
            let mut cur = t;
            while let Some(p) = pred[cur.0] {
                path.push(graph.label(p).clone());
                cur = p;
            }
            path.reverse();
            trace_event!(length = path.len(), "a* reached goal");
            return Ok(Some((path, g_u)));
        }

        for (v, w) in graph.neighbor_ids(u) {
            let Some(candidate) = Weight::checked_sum(g_u, w) else {
                continue;
            };
            if !improves(candidate, cost[v.0]) {
                continue;
            }
            let Some(priority) = Weight::checked_sum(candidate, heuristic(graph.label(v))) else {
                continue;
            };
            cost[v.0] = Some(candidate);
            pred[v.0] = Some(u);
            open.push(priority, (v, candidate));
        }
    }

    trace_event!(vertices = n, "a* exhausted the frontier");
    Ok(None)
}

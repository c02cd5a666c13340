//! Bellman-Ford single-source shortest paths.
//!
//! Variables:
//!   n       = number of vertices
//!   dist[v] = shortest known distance from source to v (`None` = unreachable)
//!
//! Relax every arc up to n-1 times (stopping early when a round changes
//! nothing). One more pass that still relaxes an arc proves a negative cycle
//! reachable from the source.
//!
//! Complexity: O(n * m)

use num_traits::Zero;

use crate::collections::VertexId;
use crate::error::{GraphError, Result};
use crate::graph::shortest_path::ShortestPaths;
use crate::graph::view::GraphView;
use crate::graph::weight::{add_finite, improves};

/// Outcome of a Bellman-Ford run.
///
/// When a negative cycle is reachable the distance table is *not meaningful*:
/// it holds whatever the n-1 rounds produced. Check
/// [`has_negative_cycle`](Self::has_negative_cycle) or convert with
/// [`into_result`](Self::into_result) before trusting distances.
#[must_use = "a negative cycle invalidates the distances; check has_negative_cycle()"]
#[derive(Debug, Clone)]
pub struct BellmanFord<'g, G: GraphView> {
    paths: ShortestPaths<'g, G>,
    cycle: Option<Vec<VertexId>>,
}

impl<'g, G: GraphView> BellmanFord<'g, G> {
    /// Returns `true` if a negative cycle is reachable from the source.
    pub fn has_negative_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// The distance and predecessor tables, meaningful only without a cycle.
    pub fn paths(&self) -> &ShortestPaths<'g, G> {
        &self.paths
    }

    /// Vertices of one negative cycle, in edge order.
    pub fn negative_cycle(&self) -> Option<Vec<G::Vertex>> {
        let graph = self.paths.graph;
        self.cycle
            .as_ref()
            .map(|ids| ids.iter().map(|&id| graph.label(id).clone()).collect())
    }

    /// The tables, or [`GraphError::NegativeCycle`].
    pub fn into_result(self) -> Result<ShortestPaths<'g, G>> {
        match self.cycle {
            None => Ok(self.paths),
            Some(ids) => {
                let graph = self.paths.graph;
                Err(GraphError::NegativeCycle {
                    vertices: ids.iter().map(|&id| format!("{:?}", graph.label(id))).collect(),
                })
            }
        }
    }
}

/// Shortest distances from `start`, tolerating negative weights.
///
/// On undirected graphs every edge is usable both ways, so any negative edge
/// reachable from `start` is itself a negative cycle.
///
/// # Errors
/// [`GraphError::UnknownVertex`] if `start` is not in the graph. A negative
/// cycle is reported through the returned [`BellmanFord`], not as an error.
pub fn bellman_ford<'g, G: GraphView>(
    graph: &'g G,
    start: &G::Vertex,
) -> Result<BellmanFord<'g, G>> {
    let s = graph.require(start)?;
    let n = graph.vertex_count();
    let arcs = graph.arcs();

    let mut dist: Vec<Option<G::Weight>> = vec![None; n];
    let mut pred: Vec<Option<VertexId>> = vec![None; n];
    dist[s.0] = Some(G::Weight::zero());

    for _ in 1..n {
        let mut updated = false;
        for &(u, v, w) in &arcs {
            if let Some(candidate) = add_finite(dist[u.0], Some(w)) {
                if improves(candidate, dist[v.0]) {
                    dist[v.0] = Some(candidate);
                    pred[v.0] = Some(u);
                    updated = true;
                }
            }
        }
        if !updated {
            break;
        }
    }

    // n-th pass: anything that still relaxes sits on or behind a negative cycle.
    let witness = arcs.iter().find_map(|&(u, v, w)| {
        let candidate = add_finite(dist[u.0], Some(w))?;
        improves(candidate, dist[v.0]).then_some((u, v))
    });

    let cycle = witness.map(|(u, v)| extract_cycle(&pred, n, u, v));
    if let Some(cycle) = &cycle {
        trace_event!(length = cycle.len(), "bellman-ford found a negative cycle");
    }

    Ok(BellmanFord {
        paths: ShortestPaths::new(graph, s, dist, pred),
        cycle,
    })
}

/// Walks predecessors from the relaxing arc `u -> v` back into the cycle.
fn extract_cycle(
    pred: &[Option<VertexId>],
    n: usize,
    u: VertexId,
    v: VertexId,
) -> Vec<VertexId> {
    let mut pred = pred.to_vec();
    pred[v.0] = Some(u);

    // n steps back from v is guaranteed to land on the cycle itself.
    let mut x = v;
    for _ in 0..n {
        match pred[x.0] {
            Some(p) => x = p,
            None => break,
        }
    }

    let start = x;
    let mut cycle = vec![start];
    let mut cur = start;
    while let Some(p) = pred[cur.0] {
        if p == start || cycle.len() > n {
            break;
        }
        cycle.push(p);
        cur = p;
    }
    cycle.reverse();
    cycle
}

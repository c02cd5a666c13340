//! Shortest-path solvers.
//!
//! - `dijkstra`: single source, non-negative weights
//! - `bellman_ford`: single source, negative weights, negative-cycle detection
//! - `floyd_warshall`: all pairs, with an explicit negative-cycle check
//! - `a_star`: single pair guided by an admissible heuristic
//!
//! Single-source solvers return a [`ShortestPaths`] table: per-vertex distance
//! (`None` = unreachable) plus the predecessor used for path reconstruction.

pub mod a_star;
pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;

use core::fmt;
use std::collections::HashMap;

use crate::collections::VertexId;
use crate::graph::view::GraphView;

pub use a_star::a_star;
pub use bellman_ford::{bellman_ford, BellmanFord};
pub use dijkstra::{all_pairs_dijkstra, dijkstra};
pub use floyd_warshall::{floyd_warshall, AllPairsShortestPaths};

/// Distance and predecessor tables from one source vertex.
pub struct ShortestPaths<'g, G: GraphView> {
    graph: &'g G,
    source: VertexId,
    dist: Vec<Option<G::Weight>>,
    pred: Vec<Option<VertexId>>,
}

impl<'g, G: GraphView> ShortestPaths<'g, G> {
    pub(crate) fn new(
        graph: &'g G,
        source: VertexId,
        dist: Vec<Option<G::Weight>>,
        pred: Vec<Option<VertexId>>,
    ) -> Self {
        Self {
            graph,
            source,
            dist,
            pred,
        }
    }

    /// The source vertex.
    pub fn source(&self) -> &'g G::Vertex {
        self.graph.label(self.source)
    }

    /// Distance to `vertex`; `None` if unreachable or not in the graph.
    pub fn distance(&self, vertex: &G::Vertex) -> Option<G::Weight> {
        self.graph.id_of(vertex).and_then(|id| self.dist[id.0])
    }

    /// Distance to a vertex id; `None` if unreachable.
    #[inline]
    pub fn distance_by_id(&self, id: VertexId) -> Option<G::Weight> {
        self.dist.get(id.0).copied().flatten()
    }

    /// Returns `true` if `vertex` was reached from the source.
    pub fn is_reachable(&self, vertex: &G::Vertex) -> bool {
        self.distance(vertex).is_some()
    }

    /// The vertex preceding `vertex` on its best known path.
    pub fn predecessor(&self, vertex: &G::Vertex) -> Option<&'g G::Vertex> {
        let id = self.graph.id_of(vertex)?;
        self.pred[id.0].map(|p| self.graph.label(p))
    }

    /// The best known path from the source to `vertex`, both ends included.
    ///
    /// `None` if `vertex` is unreachable, unknown, or its predecessor chain
    /// does not lead back to the source (only possible after a negative cycle).
    pub fn path_to(&self, vertex: &G::Vertex) -> Option<Vec<&'g G::Vertex>> {
        let target = self.graph.id_of(vertex)?;
        self.dist[target.0]?;

        let mut path = vec![target];
        let mut cur = target;
        while cur != self.source {
            cur = self.pred[cur.0]?;
            path.push(cur);
            if path.len() > self.dist.len() {
                return None;
            }
        }
        path.reverse();
        Some(path.into_iter().map(|id| self.graph.label(id)).collect())
    }

    /// Every `(vertex, distance)` pair in insertion order.
    pub fn distances(&self) -> impl Iterator<Item = (&'g G::Vertex, Option<G::Weight>)> + '_ {
        let graph = self.graph;
        self.dist
            .iter()
            .enumerate()
            .map(move |(i, d)| (graph.label(VertexId(i)), *d))
    }

    /// Owned label → distance map.
    pub fn to_distance_map(&self) -> HashMap<G::Vertex, Option<G::Weight>> {
        self.distances().map(|(v, d)| (v.clone(), d)).collect()
    }

    /// Number of vertices with a finite distance (the source included).
    pub fn reachable_count(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }
}

impl<'g, G: GraphView> Clone for ShortestPaths<'g, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            source: self.source,
            dist: self.dist.clone(),
            pred: self.pred.clone(),
        }
    }
}

impl<'g, G: GraphView> fmt::Debug for ShortestPaths<'g, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortestPaths")
            .field("source", self.source())
            .field("distances", &self.distances().collect::<Vec<_>>())
            .finish()
    }
}

//! Floyd-Warshall all-pairs shortest paths.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `floyd_warshall` | \(O(n^3)\) time, \(O(n^2)\) space | Dense row-major tables |
//! | `distance` | \(O(1)\) | |
//! | `path` | \(O(n)\) | Follows the successor table |

use std::collections::HashMap;

use num_traits::Zero;

use crate::collections::VertexId;
use crate::error::{GraphError, Result};
use crate::graph::view::GraphView;
use crate::graph::weight::{add_finite, improves, Weight};

/// Distances and successors between every ordered pair of vertices.
///
/// A negative entry on the diagonal means its vertex lies on a negative
/// cycle; distances that route through such a vertex are not meaningful.
#[must_use = "check has_negative_cycle() before trusting distances"]
pub struct AllPairsShortestPaths<'g, G: GraphView> {
    graph: &'g G,
    n: usize,
    dist: Vec<Option<G::Weight>>,
    next: Vec<Option<VertexId>>,
}

impl<'g, G: GraphView> AllPairsShortestPaths<'g, G> {
    #[inline]
    fn at(&self, i: usize, j: usize) -> usize {
        i * self.n + j
    }

    /// Shortest distance from `from` to `to`; `None` if unreachable or unknown.
    pub fn distance(&self, from: &G::Vertex, to: &G::Vertex) -> Option<G::Weight> {
        let i = self.graph.id_of(from)?;
        let j = self.graph.id_of(to)?;
        self.dist[self.at(i.0, j.0)]
    }

    /// The shortest path from `from` to `to`, both ends included.
    ///
    /// `None` if unreachable, unknown, or the path would enter a negative cycle.
    pub fn path(&self, from: &G::Vertex, to: &G::Vertex) -> Option<Vec<&'g G::Vertex>> {
        let i = self.graph.id_of(from)?;
        let j = self.graph.id_of(to)?;
        self.dist[self.at(i.0, j.0)]?;

        let mut path = vec![i];
        let mut cur = i;
        while cur != j {
            cur = self.next[self.at(cur.0, j.0)]?;
            path.push(cur);
            if path.len() > self.n {
                return None;
            }
        }
        if path.iter().any(|id| self.on_negative_cycle(*id)) {
            return None;
        }
        Some(path.into_iter().map(|id| self.graph.label(id)).collect())
    }

    fn on_negative_cycle(&self, id: VertexId) -> bool {
        self.dist[self.at(id.0, id.0)].is_some_and(|d| d.is_negative())
    }

    /// Returns `true` if any vertex lies on a negative cycle.
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.n).any(|i| self.on_negative_cycle(VertexId(i)))
    }

    /// Vertices whose diagonal distance went negative, in insertion order.
    pub fn negative_cycle_vertices(&self) -> Vec<G::Vertex> {
        (0..self.n)
            .map(VertexId)
            .filter(|&id| self.on_negative_cycle(id))
            .map(|id| self.graph.label(id).clone())
            .collect()
    }

    /// `self`, or [`GraphError::NegativeCycle`] naming the affected vertices.
    pub fn into_checked(self) -> Result<Self> {
        if self.has_negative_cycle() {
            let vertices = self
                .negative_cycle_vertices()
                .iter()
                .map(|v| format!("{v:?}"))
                .collect();
            return Err(GraphError::NegativeCycle { vertices });
        }
        Ok(self)
    }

    /// Owned `(from, to) → distance` map over every ordered pair.
    pub fn to_distance_map(&self) -> HashMap<(G::Vertex, G::Vertex), Option<G::Weight>> {
        let mut map = HashMap::with_capacity(self.n * self.n);
        for i in 0..self.n {
            for j in 0..self.n {
                let key = (
                    self.graph.label(VertexId(i)).clone(),
                    self.graph.label(VertexId(j)).clone(),
                );
                map.insert(key, self.dist[self.at(i, j)]);
            }
        }
        map
    }
}

impl<'g, G: GraphView> core::fmt::Debug for AllPairsShortestPaths<'g, G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AllPairsShortestPaths")
            .field("vertices", &self.n)
            .field("negative_cycle", &self.has_negative_cycle())
            .finish()
    }
}

/// Shortest distances between every ordered pair of vertices.
///
/// Negative edge weights are allowed. Negative cycles do not fail the run;
/// they show up as negative diagonal entries, see
/// [`has_negative_cycle`](AllPairsShortestPaths::has_negative_cycle) and
/// [`into_checked`](AllPairsShortestPaths::into_checked).
///
/// A self-loop only replaces the zero diagonal when its weight is negative.
pub fn floyd_warshall<G: GraphView>(graph: &G) -> AllPairsShortestPaths<'_, G> {
    let n = graph.vertex_count();
    let mut dist: Vec<Option<G::Weight>> = vec![None; n * n];
    let mut next: Vec<Option<VertexId>> = vec![None; n * n];

    for i in 0..n {
        dist[i * n + i] = Some(G::Weight::zero());
        next[i * n + i] = Some(VertexId(i));
    }
    for (u, v, w) in graph.arcs() {
        let cell = u.0 * n + v.0;
        if improves(w, dist[cell]) {
            dist[cell] = Some(w);
            next[cell] = Some(v);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let ik = dist[i * n + k];
            if ik.is_none() {
                continue;
            }
            for j in 0..n {
                if let Some(candidate) = add_finite(ik, dist[k * n + j]) {
                    if improves(candidate, dist[i * n + j]) {
                        dist[i * n + j] = Some(candidate);
                        next[i * n + j] = next[i * n + k];
                    }
                }
            }
        }
    }

    let result = AllPairsShortestPaths {
        graph,
        n,
        dist,
        next,
    };
    trace_event!(
        vertices = n,
        negative_cycle = result.has_negative_cycle(),
        "floyd-warshall finished"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::shortest_path::dijkstra;
    use crate::graph::store::{DiGraph, DiMatrix};

    fn reference() -> DiMatrix<char, u32> {
        DiMatrix::from_edges([
            ('A', 'B', 4),
            ('A', 'C', 2),
            ('B', 'C', 1),
            ('B', 'D', 5),
            ('C', 'D', 8),
            ('C', 'E', 10),
            ('D', 'E', 2),
        ])
    }

    #[test]
    fn sums_outside_the_weight_range_stay_infinite() {
        let g = DiMatrix::<char, u8>::from_edges([('a', 'b', 200), ('b', 'c', 100)]);
        let all = floyd_warshall(&g);
        assert_eq!(all.distance(&'a', &'b'), Some(200));
        assert_eq!(all.distance(&'a', &'c'), None);
        assert_eq!(all.path(&'a', &'c'), None);
    }

    #[test]
    fn matches_dijkstra_from_every_source() {
        let g = reference();
        let all = floyd_warshall(&g).into_checked().unwrap();
        for s in ['A', 'B', 'C', 'D', 'E'] {
            let single = dijkstra(&g, &s).unwrap();
            for t in ['A', 'B', 'C', 'D', 'E'] {
                assert_eq!(all.distance(&s, &t), single.distance(&t), "{s} -> {t}");
            }
        }
        assert_eq!(all.path(&'A', &'E'), Some(vec![&'A', &'B', &'D', &'E']));
        assert_eq!(all.path(&'E', &'A'), None);
        assert_eq!(all.path(&'C', &'C'), Some(vec![&'C']));
    }

    #[test]
    fn diagonal_exposes_negative_cycle() {
        let g = DiGraph::<u8, i32>::from_edges([(0, 1, 1), (1, 2, -2), (2, 1, 1), (3, 0, 5)]);
        let all = floyd_warshall(&g);
        assert!(all.has_negative_cycle());
        assert_eq!(all.negative_cycle_vertices(), vec![1, 2]);
        assert_eq!(all.path(&0, &2), None);
        assert!(matches!(all.into_checked(), Err(GraphError::NegativeCycle { .. })));
    }

    #[test]
    fn negative_edges_without_cycle() {
        let g = DiGraph::<u8, i32>::from_edges([(0, 1, 4), (0, 2, 1), (2, 1, -2)]);
        let all = floyd_warshall(&g).into_checked().unwrap();
        assert_eq!(all.distance(&0, &1), Some(-1));
        assert_eq!(all.path(&0, &1), Some(vec![&0, &2, &1]));
        assert_eq!(all.to_distance_map()[&(1, 0)], None);
    }

    #[test]
    fn positive_self_loop_keeps_zero_diagonal() {
        let g = DiGraph::<u8, i32>::from_edges([(0, 0, 3)]);
        assert_eq!(floyd_warshall(&g).distance(&0, &0), Some(0));
    }
}

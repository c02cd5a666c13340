//! Dijkstra's single-source shortest paths.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `dijkstra` | \(O((n + m) \log n)\) | Lazy-deletion binary heap |
//! | `all_pairs_dijkstra` | \(O(n (n + m) \log n)\) | One run per source; rayon with `parallel` |

use num_traits::Zero;

use crate::collections::{MinQueue, VertexId};
use crate::error::Result;
use crate::graph::shortest_path::ShortestPaths;
use crate::graph::view::GraphView;
use crate::graph::weight::{improves, Weight};

/// Shortest distances from `start`.
///
/// Weights must be non-negative. This is not checked: a negative edge gives
/// silently wrong distances, never a hang, because each vertex is settled
/// (expanded) exactly once. Use [`bellman_ford`](super::bellman_ford) for
/// graphs with negative weights.
///
/// Vertices with equal tentative distance are settled in the order they were
/// queued.
///
/// # Errors
/// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if `start`
/// is not in the graph.
pub fn dijkstra<'g, G: GraphView>(
    graph: &'g G,
    start: &G::Vertex,
) -> Result<ShortestPaths<'g, G>> {
    let s = graph.require(start)?;
    let paths = dijkstra_from(graph, s);
    trace_event!(
        vertices = graph.vertex_count(),
        reached = paths.reachable_count(),
        "dijkstra finished"
    );
    Ok(paths)
}

pub(crate) fn dijkstra_from<G: GraphView>(graph: &G, s: VertexId) -> ShortestPaths<'_, G> {
    let n = graph.vertex_count();
    let mut dist: Vec<Option<G::Weight>> = vec![None; n];
    let mut pred = vec![None; n];
    let mut settled = vec![false; n];
    let mut queue = MinQueue::with_capacity(n);

    dist[s.0] = Some(G::Weight::zero());
    queue.push(G::Weight::zero(), s);

    while let Some((d, u)) = queue.pop() {
        if settled[u.0] {
            continue;
        }
        settled[u.0] = true;

        for (v, w) in graph.neighbor_ids(u) {
            if settled[v.0] {
                continue;
            }
            let Some(candidate) = Weight::checked_sum(d, w) else {
                continue;
            };
            if improves(candidate, dist[v.0]) {
                dist[v.0] = Some(candidate);
                pred[v.0] = Some(u);
                queue.push(candidate, v);
            }
        }
    }

    ShortestPaths::new(graph, s, dist, pred)
}

/// Dijkstra from every vertex, in insertion order of the sources.
#[cfg(not(feature = "parallel"))]
pub fn all_pairs_dijkstra<G: GraphView>(graph: &G) -> Vec<ShortestPaths<'_, G>> {
    graph.vertex_ids().map(|s| dijkstra_from(graph, s)).collect()
}

/// Dijkstra from every vertex, in insertion order of the sources.
///
/// Runs are independent and distributed over the rayon pool.
#[cfg(feature = "parallel")]
pub fn all_pairs_dijkstra<G>(graph: &G) -> Vec<ShortestPaths<'_, G>>
where
    G: GraphView + Sync,
    G::Weight: Send,
{
    use rayon::prelude::*;

    (0..graph.vertex_count())
        .into_par_iter()
        .map(|i| dijkstra_from(graph, VertexId(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::store::{DiGraph, UnMatrix};
    use crate::GraphError;

    fn reference() -> DiGraph<char, u32> {
        DiGraph::from_edges([
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
    fn reference_distances() {
        let g = reference();
        let paths = dijkstra(&g, &'A').unwrap();
        let expected = [('A', 0), ('B', 4), ('C', 2), ('D', 9), ('E', 11)];
        for (v, d) in expected {
            assert_eq!(paths.distance(&v), Some(d), "distance to {v}");
        }
        assert_eq!(paths.path_to(&'E'), Some(vec![&'A', &'B', &'D', &'E']));
    }

    #[test]
    fn distances_beyond_the_weight_range_are_unreachable() {
        let g = DiGraph::<char, u8>::from_edges([('a', 'b', 200), ('b', 'c', 100)]);
        let paths = dijkstra(&g, &'a').unwrap();
        assert_eq!(paths.distance(&'b'), Some(200));
        assert_eq!(paths.distance(&'c'), None);
        assert_eq!(paths.path_to(&'c'), None);
    }

    #[test]
    fn unreachable_vertices_have_no_distance() {
        let mut g = reference();
        g.add_vertex('Z');
        let paths = dijkstra(&g, &'C').unwrap();
        assert_eq!(paths.distance(&'A'), None);
        assert_eq!(paths.distance(&'Z'), None);
        assert_eq!(paths.distance(&'C'), Some(0));
        assert!(!paths.is_reachable(&'B'));
    }

    #[test]
    fn unknown_start_is_an_error() {
        let g = reference();
        assert!(matches!(dijkstra(&g, &'Q'), Err(GraphError::UnknownVertex(_))));
    }

    #[test]
    fn works_on_matrix_with_floats() {
        let g = UnMatrix::<&str, f64>::from_edges([
            ("a", "b", 0.5),
            ("b", "c", 0.25),
            ("a", "c", 1.0),
        ]);
        let paths = dijkstra(&g, &"a").unwrap();
        assert_eq!(paths.distance(&"c"), Some(0.75));
        assert_eq!(paths.predecessor(&"c"), Some(&"b"));
    }

    #[test]
    fn all_pairs_runs_every_source() {
        let g = reference();
        let runs = all_pairs_dijkstra(&g);
        assert_eq!(runs.len(), 5);
        assert_eq!(*runs[3].source(), 'D');
        assert_eq!(runs[3].distance(&'E'), Some(2));
    }
}

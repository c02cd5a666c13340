//! Cycle detection.
//!
//! Directed graphs use three-colour DFS; undirected graphs use parent-tracking
//! DFS. Both walk with an explicit stack of neighbor iterators.

use crate::collections::VertexId;
use crate::graph::view::GraphView;

/// DFS visitation state of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Not yet discovered.
    White,
    /// Discovered, descendants still being explored.
    Gray,
    /// Finished.
    Black,
}

/// Runs three-colour DFS from every white vertex in insertion order.
///
/// `finished` is called for each vertex as it turns black. Stops at the first
/// gray → gray back edge and returns `false`; returns `true` if the whole graph
/// was explored without one.
pub(crate) fn colored_dfs<G, F>(graph: &G, mut finished: F) -> bool
where
    G: GraphView,
    F: FnMut(VertexId),
{
    let mut color = vec![Color::White; graph.vertex_count()];
    let mut stack: Vec<(VertexId, G::Neighbors<'_>)> = Vec::new();

    for root in graph.vertex_ids() {
        if color[root.0] != Color::White {
            continue;
        }
        color[root.0] = Color::Gray;
        stack.push((root, graph.neighbor_ids(root)));

        while let Some((u, neighbors)) = stack.last_mut() {
            let u = *u;
            match neighbors.next() {
                Some((v, _)) => match color[v.0] {
                    Color::Gray => return false,
                    Color::White => {
                        color[v.0] = Color::Gray;
                        stack.push((v, graph.neighbor_ids(v)));
                    }
                    Color::Black => {}
                },
                None => {
                    color[u.0] = Color::Black;
                    finished(u);
                    stack.pop();
                }
            }
        }
    }
    true
}

/// Returns `true` if following edge directions can return to a vertex.
///
/// Every stored arc is treated as one-way, so on an undirected store each edge
/// reads as a two-cycle; use [`has_cycle_undirected`] there.
pub fn has_cycle_directed<G: GraphView>(graph: &G) -> bool {
    let acyclic = colored_dfs(graph, |_| {});
    if !acyclic {
        trace_event!(vertices = graph.vertex_count(), "directed cycle found");
    }
    !acyclic
}

/// Returns `true` if the underlying undirected graph has a cycle.
///
/// A DFS that meets an already-visited vertex other than the one it came from
/// has closed a cycle. Self-loops are cycles. On directed stores the arcs are
/// read without direction, so `u -> v` plus `v -> u` is a cycle.
pub fn has_cycle_undirected<G: GraphView>(graph: &G) -> bool {
    let adj = graph.undirected_adjacency();
    let mut visited = vec![false; adj.len()];
    // (vertex, parent, parent edge already skipped, next neighbor index)
    let mut stack: Vec<(usize, Option<usize>, bool, usize)> = Vec::new();

    for root in 0..adj.len() {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push((root, None, false, 0));

        while let Some(frame) = stack.last_mut() {
            let (u, parent) = (frame.0, frame.1);
            let Some(&v) = adj[u].get(frame.3) else {
                stack.pop();
                continue;
            };
            frame.3 += 1;
            let v = v.0;

            if Some(v) == parent && !frame.2 {
                frame.2 = true;
                continue;
            }
            if visited[v] {
                return true;
            }
            visited[v] = true;
            stack.push((v, Some(u), false, 0));
        }
    }
    false
}

/// Dispatches to the directed or undirected detector by the graph's edge type.
pub fn has_cycle<G: GraphView>(graph: &G) -> bool {
    if graph.is_directed() {
        has_cycle_directed(graph)
    } else {
        has_cycle_undirected(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::store::{DiGraph, UnGraph};

    #[test]
    fn three_cycle_is_found() {
        let g = DiGraph::<char, u8>::from_edges([('A', 'B', 1), ('B', 'C', 1), ('C', 'A', 1)]);
        assert!(has_cycle_directed(&g));
        assert!(has_cycle(&g));
    }

    #[test]
    fn diamond_is_acyclic() {
        let g = DiGraph::<char, u8>::from_edges([
            ('A', 'B', 1),
            ('A', 'C', 1),
            ('B', 'D', 1),
            ('C', 'D', 1),
        ]);
        assert!(!has_cycle_directed(&g));
        // ...but its shadow has the square A-B-D-C.
        assert!(has_cycle_undirected(&g));
    }

    #[test]
    fn trees_have_no_undirected_cycle() {
        let g = UnGraph::<u8, u8>::from_edges([(1, 2, 1), (1, 3, 1), (3, 4, 1), (5, 6, 1)]);
        assert!(!has_cycle_undirected(&g));
        assert!(!has_cycle(&g));
    }

    #[test]
    fn undirected_triangle_and_self_loop() {
        let tri = UnGraph::<u8, u8>::from_edges([(1, 2, 1), (2, 3, 1), (3, 1, 1)]);
        assert!(has_cycle(&tri));

        let mut looped = UnGraph::<u8, u8>::new();
        looped.add_unit_edge(7, 7);
        assert!(has_cycle_undirected(&looped));
    }

    #[test]
    fn finish_order_is_reverse_topological() {
        let g = DiGraph::<char, u8>::from_edges([('a', 'b', 1), ('b', 'c', 1)]);
        let mut finished = Vec::new();
        assert!(colored_dfs(&g, |v| finished.push(v.0)));
        assert_eq!(finished, vec![2, 1, 0]);
    }
}

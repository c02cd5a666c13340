//! Connectivity and two-colouring.
//!
//! Both operate on the graph's shadow (edges without direction), so on
//! directed stores components are the weakly connected ones.

use std::collections::VecDeque;

use crate::collections::DisjointSet;
use crate::graph::view::GraphView;

/// Groups vertices into connected components.
///
/// Runs an explicit-stack DFS from every unvisited vertex in insertion order.
/// Components appear in order of their first vertex; vertices inside a
/// component appear in DFS preorder.
pub fn connected_components<G: GraphView>(graph: &G) -> Vec<Vec<G::Vertex>> {
    let adj = graph.undirected_adjacency();
    let mut visited = vec![false; adj.len()];
    let mut components = Vec::new();
    let mut stack = Vec::new();

    for root in graph.vertex_ids() {
        if visited[root.0] {
            continue;
        }
        let mut component = Vec::new();
        stack.push(root);
        while let Some(u) = stack.pop() {
            if visited[u.0] {
                continue;
            }
            visited[u.0] = true;
            component.push(graph.label(u).clone());
            stack.extend(adj[u.0].iter().rev().filter(|v| !visited[v.0]));
        }
        components.push(component);
    }

    trace_event!(
        vertices = graph.vertex_count(),
        components = components.len(),
        "connected components"
    );
    components
}

/// Counts connected components with a union-find pass over the edges.
pub fn component_count<G: GraphView>(graph: &G) -> usize {
    let mut sets = DisjointSet::with_singletons(graph.vertex_count());
    for (u, v, _) in graph.arcs() {
        sets.union(u.0, v.0);
    }
    sets.set_count()
}

/// Returns `true` if the vertices can be two-coloured with every edge joining
/// different colours.
///
/// BFS colours each component from its first vertex and stops at the first
/// edge whose endpoints share a colour. A self-loop is never bipartite.
pub fn is_bipartite<G: GraphView>(graph: &G) -> bool {
    let adj = graph.undirected_adjacency();
    let mut side: Vec<Option<bool>> = vec![None; adj.len()];
    let mut queue = VecDeque::new();

    for root in 0..adj.len() {
        if side[root].is_some() {
            continue;
        }
        side[root] = Some(false);
        queue.push_back(root);

        while let Some(u) = queue.pop_front() {
            let here = side[u] == Some(true);
            for v in &adj[u] {
                match side[v.0] {
                    None => {
                        side[v.0] = Some(!here);
                        queue.push_back(v.0);
                    }
                    Some(there) if there == here => return false,
                    Some(_) => {}
                }
            }
        }
    }
    true
}

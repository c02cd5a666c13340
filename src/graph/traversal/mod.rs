//! Traversal engine: DFS, BFS, cycle detection, components, bipartiteness.
//!
//! The label-level functions here validate their start vertex and fail with
//! [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) instead of
//! returning an empty walk.

pub mod components;
pub mod cycle;
pub mod iter;

use std::collections::VecDeque;

use crate::collections::VertexId;
use crate::error::Result;
use crate::graph::view::GraphView;

pub use components::{component_count, connected_components, is_bipartite};
pub use cycle::{has_cycle, has_cycle_directed, has_cycle_undirected, Color};
pub use iter::{Bfs, Dfs};

/// Vertices reachable from `start` in depth-first preorder.
pub fn dfs<G: GraphView>(graph: &G, start: &G::Vertex) -> Result<Vec<G::Vertex>> {
    let s = graph.require(start)?;
    Ok(Dfs::new(graph, s).map(|id| graph.label(id).clone()).collect())
}

/// Vertices reachable from `start` in breadth-first order.
pub fn bfs<G: GraphView>(graph: &G, start: &G::Vertex) -> Result<Vec<G::Vertex>> {
    let s = graph.require(start)?;
    Ok(Bfs::new(graph, s).map(|id| graph.label(id).clone()).collect())
}

/// Vertices reachable from `start`, grouped by hop distance.
///
/// `levels[0]` is `[start]`, `levels[k]` holds the vertices first reached after
/// `k` edges.
pub fn bfs_levels<G: GraphView>(graph: &G, start: &G::Vertex) -> Result<Vec<Vec<G::Vertex>>> {
    let s = graph.require(start)?;
    let mut depth: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    let mut levels: Vec<Vec<G::Vertex>> = Vec::new();
    let mut queue = VecDeque::new();

    depth[s.0] = Some(0);
    queue.push_back(s);
    while let Some(u) = queue.pop_front() {
        let d = depth[u.0].unwrap_or_default();
        if levels.len() == d {
            levels.push(Vec::new());
        }
        levels[d].push(graph.label(u).clone());

        for (v, _) in graph.neighbor_ids(u) {
            if depth[v.0].is_none() {
                depth[v.0] = Some(d + 1);
                queue.push_back(v);
            }
        }
    }
    Ok(levels)
}

/// A path from `start` to `end` with the fewest edges, if one exists.
pub fn bfs_path<G: GraphView>(
    graph: &G,
    start: &G::Vertex,
    end: &G::Vertex,
) -> Result<Option<Vec<G::Vertex>>> {
    let s = graph.require(start)?;
    let t = graph.require(end)?;

    let mut parent: Vec<Option<VertexId>> = vec![None; graph.vertex_count()];
    let mut seen = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();
    seen[s.0] = true;
    queue.push_back(s);

    while let Some(u) = queue.pop_front() {
        if u == t {
            let mut path = vec![graph.label(t).clone()];
            let mut cur = t;
            while let Some(p) = parent[cur.0] {
                path.push(graph.label(p).clone());
                cur = p;
            }
            path.reverse();
            return Ok(Some(path));
        }
        for (v, _) in graph.neighbor_ids(u) {
            if !seen[v.0] {
                seen[v.0] = true;
                parent[v.0] = Some(u);
                queue.push_back(v);
            }
        }
    }
    Ok(None)
}

/// Returns `true` if `end` is reachable from `start`.
pub fn has_path<G: GraphView>(graph: &G, start: &G::Vertex, end: &G::Vertex) -> Result<bool> {
    let s = graph.require(start)?;
    let t = graph.require(end)?;
    Ok(Dfs::new(graph, s).any(|v| v == t))
}

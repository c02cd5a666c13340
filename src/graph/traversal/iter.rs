//! Lazy BFS and DFS iterators over vertex ids.
//!
//! Both keep their frontier in an explicit `VecDeque`/`Vec`, so traversal depth
//! is bounded by heap memory rather than the call stack.

use std::collections::VecDeque;

use crate::collections::VertexId;
use crate::graph::view::GraphView;

/// An iterator for Breadth-First Search (BFS).
///
/// This iterator yields vertex ids in BFS order.
/// It uses an internal `VecDeque` and `Vec<bool>` for state management.
pub struct Bfs<'g, G: GraphView> {
    graph: &'g G,
    visited: Vec<bool>,
    queue: VecDeque<VertexId>,
}

impl<'g, G: GraphView> Bfs<'g, G> {
    /// Creates a new BFS iterator starting from `start`.
    pub fn new(graph: &'g G, start: VertexId) -> Self {
        let len = graph.vertex_count();
        let mut visited = vec![false; len];
        let mut queue = VecDeque::new();

        if start.0 < len {
            visited[start.0] = true;
            queue.push_back(start);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<'g, G: GraphView> Iterator for Bfs<'g, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for (v, _) in self.graph.neighbor_ids(u) {
            if !self.visited[v.0] {
                self.visited[v.0] = true;
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}

/// An iterator for Depth-First Search (DFS).
///
/// Yields vertex ids in preorder, visiting neighbors in adjacency order, which
/// is the order a recursive DFS would produce. Neighbors are pushed in reverse
/// and a vertex is marked when popped.
pub struct Dfs<'g, G: GraphView> {
    graph: &'g G,
    visited: Vec<bool>,
    stack: Vec<VertexId>,
    scratch: Vec<VertexId>,
}

impl<'g, G: GraphView> Dfs<'g, G> {
    /// Creates a new DFS iterator starting from `start`.
    pub fn new(graph: &'g G, start: VertexId) -> Self {
        let len = graph.vertex_count();
        let mut stack = Vec::new();
        if start.0 < len {
            stack.push(start);
        }

        Self {
            graph,
            visited: vec![false; len],
            stack,
            scratch: Vec::new(),
        }
    }

    /// Returns `true` if `id` has been yielded.
    pub fn is_visited(&self, id: VertexId) -> bool {
        self.visited.get(id.0).copied().unwrap_or(false)
    }
}

impl<'g, G: GraphView> Iterator for Dfs<'g, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.stack.pop()?;
            if self.visited[u.0] {
                continue;
            }
            self.visited[u.0] = true;

            self.scratch.clear();
            self.scratch.extend(
                self.graph
                    .neighbor_ids(u)
                    .map(|(v, _)| v)
                    .filter(|v| !self.visited[v.0]),
            );
            self.stack.extend(self.scratch.drain(..).rev());

            return Some(u);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::store::DiGraph;

    #[test]
    fn dfs_matches_recursive_preorder() {
        // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3
        let g = DiGraph::<u32, u32>::from_edges([(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
        let order: Vec<usize> = Dfs::new(&g, VertexId(0)).map(|v| v.0).collect();
        assert_eq!(order, vec![0, 1, 3, 2]);
    }

    #[test]
    fn bfs_is_level_order() {
        let g = DiGraph::<u32, u32>::from_edges([(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
        let order: Vec<usize> = Bfs::new(&g, VertexId(0)).map(|v| v.0).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn out_of_range_start_yields_nothing() {
        let g = DiGraph::<u32, u32>::new();
        assert_eq!(Bfs::new(&g, VertexId(3)).count(), 0);
        assert_eq!(Dfs::new(&g, VertexId(3)).count(), 0);
    }
}

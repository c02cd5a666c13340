//! Kahn's algorithm and the in-degree based DAG passes built on it.

use std::collections::VecDeque;

use crate::collections::VertexId;
use crate::error::{GraphError, Result};
use crate::graph::topological::TopologicalOrder;
use crate::graph::view::GraphView;

fn in_degrees<G: GraphView>(graph: &G) -> Vec<usize> {
    let mut indeg = vec![0usize; graph.vertex_count()];
    for u in graph.vertex_ids() {
        for (v, _) in graph.neighbor_ids(u) {
            indeg[v.0] += 1;
        }
    }
    indeg
}

fn kahn_ids<G: GraphView>(graph: &G) -> Vec<VertexId> {
    let n = graph.vertex_count();
    let mut indeg = in_degrees(graph);

    // Sources in insertion order for determinism.
    let mut queue: VecDeque<VertexId> = graph.vertex_ids().filter(|u| indeg[u.0] == 0).collect();

    let mut order = Vec::with_capacity(n);
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for (v, _) in graph.neighbor_ids(u) {
            indeg[v.0] -= 1;
            if indeg[v.0] == 0 {
                queue.push_back(v);
            }
        }
    }
    order
}

fn require_directed<G: GraphView>(graph: &G) -> Result<()> {
    if graph.is_directed() {
        Ok(())
    } else {
        Err(GraphError::RequiresDirected)
    }
}

/// Topological order by repeatedly removing zero in-degree vertices.
///
/// Ties are broken in insertion order. On a cycle the returned order stops
/// short: vertices on or behind the cycle never reach in-degree zero.
///
/// # Errors
/// [`GraphError::RequiresDirected`] for undirected graphs.
pub fn kahn<G: GraphView>(graph: &G) -> Result<TopologicalOrder<G::Vertex>> {
    require_directed(graph)?;
    let n = graph.vertex_count();
    let order = kahn_ids(graph);
    if order.len() < n {
        trace_event!(ordered = order.len(), total = n, "kahn stopped at a cycle");
    }
    Ok(TopologicalOrder::new(
        order.into_iter().map(|id| graph.label(id).clone()).collect(),
        n,
    ))
}

/// Length in edges of the longest path leaving each vertex, in insertion order.
///
/// # Errors
/// [`GraphError::RequiresDirected`] for undirected graphs,
/// [`GraphError::CycleDetected`] when the graph is not a DAG.
pub fn longest_path_lengths<G: GraphView>(graph: &G) -> Result<Vec<(G::Vertex, usize)>> {
    require_directed(graph)?;
    let n = graph.vertex_count();
    let order = kahn_ids(graph);
    if order.len() < n {
        return Err(GraphError::CycleDetected {
            ordered: order.len(),
            total: n,
        });
    }

    let mut length = vec![0usize; n];
    for &u in order.iter().rev() {
        length[u.0] = graph
            .neighbor_ids(u)
            .map(|(v, _)| length[v.0] + 1)
            .max()
            .unwrap_or(0);
    }
    Ok(graph
        .vertex_ids()
        .map(|id| (graph.label(id).clone(), length[id.0]))
        .collect())
}

/// Enumerates topological orders, at most `limit` of them.
///
/// Orders come out in lexicographic order of vertex insertion ids. The search
/// backtracks with an explicit cursor stack, so depth is bounded by the heap.
///
/// # Errors
/// [`GraphError::RequiresDirected`] for undirected graphs,
/// [`GraphError::CycleDetected`] when no order exists.
pub fn all_orders<G: GraphView>(graph: &G, limit: usize) -> Result<Vec<Vec<G::Vertex>>> {
    require_directed(graph)?;
    let n = graph.vertex_count();
    let ordered = kahn_ids(graph).len();
    if ordered < n {
        return Err(GraphError::CycleDetected { ordered, total: n });
    }

    let mut indeg = in_degrees(graph);
    let mut placed = vec![false; n];
    let mut order: Vec<VertexId> = Vec::with_capacity(n);
    // cursor[d] = first candidate id still to try at depth d
    let mut cursor: Vec<usize> = vec![0];
    let mut results = Vec::new();

    while results.len() < limit {
        let depth = order.len();
        let next = if depth == n {
            results.push(order.iter().map(|&id| graph.label(id).clone()).collect());
            None
        } else {
            (cursor[depth]..n).find(|&v| !placed[v] && indeg[v] == 0)
        };

        match next {
            Some(v) => {
                cursor[depth] = v + 1;
                placed[v] = true;
                order.push(VertexId(v));
                for (w, _) in graph.neighbor_ids(VertexId(v)) {
                    indeg[w.0] -= 1;
                }
                cursor.push(0);
            }
            None => {
                cursor.pop();
                let Some(last) = order.pop() else { break };
                placed[last.0] = false;
                for (w, _) in graph.neighbor_ids(last) {
                    indeg[w.0] += 1;
                }
            }
        }
    }

    trace_event!(found = results.len(), limit, "enumerated topological orders");
    Ok(results)
}

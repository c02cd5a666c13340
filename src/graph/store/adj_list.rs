//! Adjacency-list graph store.
//!
//! Each vertex owns a `Vec<(VertexId, W)>` of out-neighbors in insertion order.
//! Undirected graphs mirror every edge into both endpoint lists (a self-loop is
//! stored once).
//!
//! Re-adding an existing edge overwrites its weight; the store never holds
//! parallel edges.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) amortized | Interns the label, appends an empty list |
//! | `add_edge` | \(O(\text{out-degree})\) | Scans for an existing edge to overwrite |
//! | `remove_edge` | \(O(\text{out-degree})\) | Order-preserving removal |
//! | `has_edge` | \(O(\text{out-degree})\) | Linear scan of the list |
//! | `neighbor_ids` | \(O(1)\) | Borrowed slice iterator |

use core::fmt::Debug;
use core::hash::Hash;
use core::iter::Copied;
use core::marker::PhantomData;
use core::slice;

use crate::collections::{VertexId, VertexTable};
use crate::graph::edge_type::{Directed, EdgeType, Undirected};
use crate::graph::view::{GraphStore, GraphView};
use crate::graph::weight::Weight;

/// A weighted graph stored as per-vertex adjacency lists.
#[derive(Debug, Clone)]
pub struct AdjacencyList<V, W, Ty = Directed> {
    vertices: VertexTable<V>,
    adjacency: Vec<Vec<(VertexId, W)>>,
    edge_count: usize,
    _ty: PhantomData<Ty>,
}

/// Directed adjacency-list graph.
pub type DiGraph<V, W> = AdjacencyList<V, W, Directed>;
/// Undirected adjacency-list graph.
pub type UnGraph<V, W> = AdjacencyList<V, W, Undirected>;

impl<V, W, Ty> AdjacencyList<V, W, Ty> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: VertexTable::new(),
            adjacency: Vec::new(),
            edge_count: 0,
            _ty: PhantomData,
        }
    }

    /// Creates an empty graph with room for `vertex_capacity` vertices.
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: VertexTable::with_capacity(vertex_capacity),
            adjacency: Vec::with_capacity(vertex_capacity),
            edge_count: 0,
            _ty: PhantomData,
        }
    }

    /// Vertex labels in insertion order.
    pub fn vertices(&self) -> &[V] {
        self.vertices.labels()
    }
}

impl<V, W, Ty> AdjacencyList<V, W, Ty>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
    Ty: EdgeType,
{
    /// Builds a graph from `(from, to, weight)` triples.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new();
        for (u, v, w) in edges {
            graph.add_edge(u, v, w);
        }
        graph
    }

    /// Adds `vertex` if absent. Idempotent; returns the vertex id either way.
    pub fn add_vertex(&mut self, vertex: V) -> VertexId {
        let (id, fresh) = self.vertices.insert(vertex);
        if fresh {
            self.adjacency.push(Vec::new());
        }
        id
    }

    /// Adds the edge `from -> to` (mirrored when undirected).
    ///
    /// Missing endpoints are added. An existing edge keeps its position and
    /// takes the new weight.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> (VertexId, VertexId) {
        let s = self.add_vertex(from);
        let t = self.add_vertex(to);

        let fresh = upsert(&mut self.adjacency[s.0], t, weight);
        if !Ty::is_directed() && s != t {
            upsert(&mut self.adjacency[t.0], s, weight);
        }
        if fresh {
            self.edge_count += 1;
        }
        (s, t)
    }

    /// Adds an edge of weight one.
    pub fn add_unit_edge(&mut self, from: V, to: V) -> (VertexId, VertexId) {
        self.add_edge(from, to, W::one())
    }

    /// Removes the edge `from -> to` (and its mirror), returning its weight.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> Option<W> {
        let s = self.vertices.get(from)?;
        let t = self.vertices.get(to)?;

        let weight = remove(&mut self.adjacency[s.0], t)?;
        if !Ty::is_directed() && s != t {
            remove(&mut self.adjacency[t.0], s);
        }
        self.edge_count -= 1;
        Some(weight)
    }

    /// Returns `true` if the edge `from -> to` exists.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        let s = self.vertices.get(from)?;
        let t = self.vertices.get(to)?;
        self.adjacency[s.0]
            .iter()
            .find(|(v, _)| *v == t)
            .map(|&(_, w)| w)
    }
}

fn upsert<W>(list: &mut Vec<(VertexId, W)>, target: VertexId, weight: W) -> bool {
    if let Some(slot) = list.iter_mut().find(|(v, _)| *v == target) {
        slot.1 = weight;
        false
    } else {
        list.push((target, weight));
        true
    }
}

fn remove<W>(list: &mut Vec<(VertexId, W)>, target: VertexId) -> Option<W> {
    let pos = list.iter().position(|(v, _)| *v == target)?;
    Some(list.remove(pos).1)
}

impl<V, W, Ty> Default for AdjacencyList<V, W, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, Ty> GraphView for AdjacencyList<V, W, Ty>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
    Ty: EdgeType,
{
    type Vertex = V;
    type Weight = W;
    type Neighbors<'a> = Copied<slice::Iter<'a, (VertexId, W)>>
    where
        Self: 'a;

    #[inline]
    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    #[inline]
    fn vertex_table(&self) -> &VertexTable<V> {
        &self.vertices
    }

    #[inline]
    fn neighbor_ids(&self, id: VertexId) -> Self::Neighbors<'_> {
        self.adjacency[id.0].iter().copied()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<V, W, Ty> GraphStore for AdjacencyList<V, W, Ty>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
    Ty: EdgeType,
{
    fn insert_vertex(&mut self, vertex: V) -> VertexId {
        self.add_vertex(vertex)
    }

    fn insert_edge(&mut self, from: V, to: V, weight: W) -> (VertexId, VertexId) {
        self.add_edge(from, to, weight)
    }

    fn directed() -> bool {
        Ty::is_directed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_edges_are_one_way() {
        let mut g = DiGraph::<&str, u32>::new();
        g.add_edge("a", "b", 3);
        assert!(g.has_edge(&"a", &"b"));
        assert!(!g.has_edge(&"b", &"a"));
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn undirected_edges_are_mirrored() {
        let mut g = UnGraph::<&str, u32>::new();
        g.add_edge("a", "b", 3);
        assert_eq!(g.edge_weight(&"b", &"a"), Some(3));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edges().len(), 1);
        assert_eq!(g.arcs().len(), 2);
    }

    #[test]
    fn duplicate_edge_overwrites_weight() {
        let mut g = UnGraph::<&str, i32>::new();
        g.add_edge("a", "b", 3);
        g.add_edge("b", "a", 7);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge_weight(&"a", &"b"), Some(7));
        assert_eq!(g.neighbors(&"a").unwrap(), vec![(&"b", 7)]);
    }

    #[test]
    fn remove_edge_drops_mirror() {
        let mut g = UnGraph::<u8, f64>::new();
        g.add_edge(1, 2, 0.5);
        g.add_edge(2, 3, 1.5);
        assert_eq!(g.remove_edge(&2, &1), Some(0.5));
        assert!(!g.has_edge(&1, &2));
        assert_eq!(g.remove_edge(&1, &2), None);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.vertex_count(), 3);
    }

    #[test]
    fn self_loop_is_stored_once() {
        let mut g = UnGraph::<char, u8>::new();
        g.add_unit_edge('x', 'x');
        assert_eq!(g.out_degree(&'x').unwrap(), 1);
        assert_eq!(g.remove_edge(&'x', &'x'), Some(1));
        assert_eq!(g.edge_count(), 0);
    }
}

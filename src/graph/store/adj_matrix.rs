//! Adjacency-matrix graph store.
//!
//! A dense row-major `n × n` matrix of `Option<W>`; `None` marks a non-edge.
//! Adding a vertex re-lays the matrix out with one more row and column.
//! Re-adding an edge overwrites the cell, so the matrix shares the list
//! store's overwrite policy.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(n^2)\) | Copies rows into the grown matrix |
//! | `add_edge` | \(O(1)\) | Plus vertex growth for new endpoints |
//! | `remove_edge` | \(O(1)\) | Clears one (or two) cells |
//! | `has_edge` | \(O(1)\) | Direct cell lookup |
//! | `neighbor_ids` | \(O(n)\) | Scans one row |

use core::fmt::Debug;
use core::hash::Hash;
use core::iter::Enumerate;
use core::marker::PhantomData;
use core::slice;

use crate::collections::{VertexId, VertexTable};
use crate::graph::edge_type::{Directed, EdgeType, Undirected};
use crate::graph::view::{GraphStore, GraphView};
use crate::graph::weight::Weight;

/// A weighted graph stored as a dense adjacency matrix.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<V, W, Ty = Directed> {
    vertices: VertexTable<V>,
    cells: Vec<Option<W>>,
    edge_count: usize,
    _ty: PhantomData<Ty>,
}

/// Directed adjacency-matrix graph.
pub type DiMatrix<V, W> = AdjacencyMatrix<V, W, Directed>;
/// Undirected adjacency-matrix graph.
pub type UnMatrix<V, W> = AdjacencyMatrix<V, W, Undirected>;

/// Iterator over the present cells of one matrix row.
pub struct MatrixNeighbors<'a, W> {
    row: Enumerate<slice::Iter<'a, Option<W>>>,
}

impl<'a, W: Copy> Iterator for MatrixNeighbors<'a, W> {
    type Item = (VertexId, W);

    fn next(&mut self) -> Option<Self::Item> {
        for (col, cell) in self.row.by_ref() {
            if let Some(w) = *cell {
                return Some((VertexId(col), w));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.row.size_hint().1)
    }
}

impl<V, W, Ty> AdjacencyMatrix<V, W, Ty> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: VertexTable::new(),
            cells: Vec::new(),
            edge_count: 0,
            _ty: PhantomData,
        }
    }

    /// Creates an empty graph with room for `vertex_capacity` vertices.
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: VertexTable::with_capacity(vertex_capacity),
            cells: Vec::with_capacity(vertex_capacity.saturating_mul(vertex_capacity)),
            edge_count: 0,
            _ty: PhantomData,
        }
    }

    /// Vertex labels in insertion order.
    pub fn vertices(&self) -> &[V] {
        self.vertices.labels()
    }

    #[inline(always)]
    fn dim(&self) -> usize {
        self.vertices.len()
    }

    #[inline(always)]
    fn cell(&self, row: VertexId, col: VertexId) -> usize {
        row.0 * self.dim() + col.0
    }
}

impl<V, W, Ty> AdjacencyMatrix<V, W, Ty>
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

    /// Adds `vertex` if absent, growing the matrix. Returns the vertex id.
    pub fn add_vertex(&mut self, vertex: V) -> VertexId {
        let old = self.dim();
        let (id, fresh) = self.vertices.insert(vertex);
        if fresh {
            let new = old + 1;
            let mut cells = vec![None; new * new];
            for row in 0..old {
                let src = &self.cells[row * old..(row + 1) * old];
                cells[row * new..row * new + old].copy_from_slice(src);
            }
            self.cells = cells;
        }
        id
    }

    /// Adds the edge `from -> to` (mirrored when undirected), overwriting any
    /// previous weight.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> (VertexId, VertexId) {
        let s = self.add_vertex(from);
        let t = self.add_vertex(to);

        let idx = self.cell(s, t);
        if self.cells[idx].replace(weight).is_none() {
            self.edge_count += 1;
        }
        if !Ty::is_directed() {
            let mirror = self.cell(t, s);
            self.cells[mirror] = Some(weight);
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
        let idx = self.cell(s, t);
        let weight = self.cells[idx].take()?;
        if !Ty::is_directed() {
            let mirror = self.cell(t, s);
            self.cells[mirror] = None;
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
        self.cells[self.cell(s, t)]
    }
}

impl<V, W, Ty> Default for AdjacencyMatrix<V, W, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, Ty> GraphView for AdjacencyMatrix<V, W, Ty>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
    Ty: EdgeType,
{
    type Vertex = V;
    type Weight = W;
    type Neighbors<'a> = MatrixNeighbors<'a, W>
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

    fn neighbor_ids(&self, id: VertexId) -> Self::Neighbors<'_> {
        let n = self.dim();
        MatrixNeighbors {
            row: self.cells[id.0 * n..(id.0 + 1) * n].iter().enumerate(),
        }
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<V, W, Ty> GraphStore for AdjacencyMatrix<V, W, Ty>
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

//! Read and write interfaces shared by every graph backing.
//!
//! Solvers are written once against [`GraphView`], which exposes the store in
//! terms of dense [`VertexId`]s. Labels are only resolved at the API boundary.

use core::fmt::Debug;
use core::hash::Hash;
use core::iter::Map;
use core::ops::Range;

use crate::collections::{VertexId, VertexTable};
use crate::error::{GraphError, Result};
use crate::graph::edge::Edge;
use crate::graph::store::GraphDocument;
use crate::graph::weight::Weight;

/// Iterator over every vertex id of a graph, in insertion order.
pub type VertexIds = Map<Range<usize>, fn(usize) -> VertexId>;

/// Read-only adjacency access over dense vertex ids.
pub trait GraphView {
    /// Vertex label type.
    type Vertex: Clone + Eq + Hash + Debug;
    /// Edge weight type.
    type Weight: Weight;
    /// Iterator over `(neighbor, weight)` pairs of one vertex.
    type Neighbors<'a>: Iterator<Item = (VertexId, Self::Weight)>
    where
        Self: 'a;

    /// Returns `true` if edges are one-way.
    fn is_directed(&self) -> bool;

    /// The label side table.
    fn vertex_table(&self) -> &VertexTable<Self::Vertex>;

    /// Out-neighbors of `id` (both directions for undirected graphs).
    ///
    /// # Panics
    /// Panics if `id` is not a vertex of this graph.
    fn neighbor_ids(&self, id: VertexId) -> Self::Neighbors<'_>;

    /// Number of logical edges (an undirected edge counts once).
    fn edge_count(&self) -> usize;

    /// Number of vertices.
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertex_table().len()
    }

    /// Resolves an id to its label.
    #[inline]
    fn label(&self, id: VertexId) -> &Self::Vertex {
        self.vertex_table().label(id)
    }

    /// Looks up the id of a label.
    #[inline]
    fn id_of(&self, vertex: &Self::Vertex) -> Option<VertexId> {
        self.vertex_table().get(vertex)
    }

    /// Looks up the id of a label, failing with [`GraphError::UnknownVertex`].
    fn require(&self, vertex: &Self::Vertex) -> Result<VertexId> {
        self.id_of(vertex).ok_or_else(|| GraphError::unknown(vertex))
    }

    /// Every vertex id in insertion order.
    fn vertex_ids(&self) -> VertexIds {
        (0..self.vertex_count()).map(VertexId as fn(usize) -> VertexId)
    }

    /// Every stored arc `(from, to, weight)`.
    ///
    /// Undirected edges appear in both directions, self-loops once.
    fn arcs(&self) -> Vec<(VertexId, VertexId, Self::Weight)> {
        let mut arcs = Vec::new();
        for u in self.vertex_ids() {
            arcs.extend(self.neighbor_ids(u).map(|(v, w)| (u, v, w)));
        }
        arcs
    }

    /// Every logical edge as `(from, to, weight)`; undirected edges appear once.
    fn edge_ids(&self) -> Vec<(VertexId, VertexId, Self::Weight)> {
        let directed = self.is_directed();
        let mut arcs = self.arcs();
        if !directed {
            arcs.retain(|&(u, v, _)| u <= v);
        }
        arcs
    }

    /// Every logical edge with resolved labels.
    fn edges(&self) -> Vec<Edge<Self::Vertex, Self::Weight>> {
        self.edge_ids()
            .into_iter()
            .map(|(u, v, w)| Edge::new(self.label(u).clone(), self.label(v).clone(), w))
            .collect()
    }

    /// Neighbors of `vertex` with resolved labels.
    fn neighbors(&self, vertex: &Self::Vertex) -> Result<Vec<(&Self::Vertex, Self::Weight)>> {
        let id = self.require(vertex)?;
        Ok(self
            .neighbor_ids(id)
            .map(|(v, w)| (self.label(v), w))
            .collect())
    }

    /// Number of out-neighbors of `vertex`.
    fn out_degree(&self, vertex: &Self::Vertex) -> Result<usize> {
        let id = self.require(vertex)?;
        Ok(self.neighbor_ids(id).count())
    }

    /// Returns `true` if `vertex` is in the store.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
        self.id_of(vertex).is_some()
    }

    /// Adjacency with every edge in both directions, ignoring weights.
    ///
    /// Used by the algorithms that reason about weak connectivity.
    fn undirected_adjacency(&self) -> Vec<Vec<VertexId>> {
        let mut adj = vec![Vec::new(); self.vertex_count()];
        for (u, v, _) in self.arcs() {
            adj[u.0].push(v);
            if self.is_directed() && u != v {
                adj[v.0].push(u);
            }
        }
        adj
    }

    /// Captures the graph as a serializable [`GraphDocument`].
    fn to_document(&self) -> GraphDocument<Self::Vertex, Self::Weight>
    where
        Self: Sized,
    {
        GraphDocument::from_graph(self)
    }
}

/// Mutation interface shared by the graph backings.
///
/// Both stores also expose these operations as inherent methods; the trait
/// exists so builders like [`GraphDocument`](crate::graph::store::GraphDocument)
/// can target either backing.
pub trait GraphStore: GraphView + Default {
    /// Adds `vertex` if absent and returns its id.
    fn insert_vertex(&mut self, vertex: Self::Vertex) -> VertexId;

    /// Adds (or re-weights) the edge `from -> to`, interning missing endpoints.
    fn insert_edge(
        &mut self,
        from: Self::Vertex,
        to: Self::Vertex,
        weight: Self::Weight,
    ) -> (VertexId, VertexId);

    /// Directedness of the store type, known without an instance.
    fn directed() -> bool;

    /// Rebuilds a store from `document`.
    ///
    /// # Errors
    /// [`GraphError::DirectednessMismatch`] if the document's directedness
    /// differs from `Self`'s.
    fn from_document(document: GraphDocument<Self::Vertex, Self::Weight>) -> Result<Self> {
        document.into_graph()
    }
}

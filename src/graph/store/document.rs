//! Edge-list documents for moving graphs in and out of serde formats.
//!
//! A `GraphDocument` is the flat edge-list representation of a store: its
//! directedness, every vertex (so isolated vertices survive), and every logical
//! edge once. Any [`GraphStore`] can be rebuilt from one.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::edge::Edge;
use crate::graph::view::{GraphStore, GraphView};

/// Serializable edge-list form of a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument<V, W> {
    /// Whether `edges` are one-way.
    pub directed: bool,
    /// Every vertex in insertion order.
    pub vertices: Vec<V>,
    /// Every logical edge.
    pub edges: Vec<Edge<V, W>>,
}

impl<V, W> GraphDocument<V, W> {
    /// Captures `graph` as a document.
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: GraphView<Vertex = V, Weight = W>,
        V: Clone,
    {
        Self {
            directed: graph.is_directed(),
            vertices: graph.vertex_table().labels().to_vec(),
            edges: graph.edges(),
        }
    }

    /// Rebuilds a store of type `G` from this document.
    ///
    /// # Errors
    /// [`GraphError::DirectednessMismatch`] if `G`'s edge type disagrees with
    /// the document.
    pub fn into_graph<G>(self) -> Result<G>
    where
        G: GraphStore<Vertex = V, Weight = W>,
    {
        if G::directed() != self.directed {
            return Err(GraphError::DirectednessMismatch {
                expected: G::directed(),
                found: self.directed,
            });
        }
        let mut graph = G::default();
        for v in self.vertices {
            graph.insert_vertex(v);
        }
        for edge in self.edges {
            graph.insert_edge(edge.source, edge.target, edge.weight);
        }
        Ok(graph)
    }
}
